//! CSV parser producing typed rows.

use csv::StringRecord;

use super::row::Row;
use crate::error::Result;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

/// Parses delimited text with a header row.
///
/// Records must have as many fields as the header; a ragged record is
/// reported as malformed content rather than padded.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Read the header and the first data record.
    ///
    /// Returns `Ok(None)` when the file has no data records.
    pub fn first_row(&self, bytes: &[u8]) -> Result<Option<Row>> {
        Ok(self.sample_rows(bytes, 1)?.into_iter().next())
    }

    /// Read at most `limit` data records.
    pub fn sample_rows(&self, bytes: &[u8], limit: usize) -> Result<Vec<Row>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(true)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for result in reader.records().take(limit) {
            let record: StringRecord = result?;
            rows.push(Row::from_parts(headers.iter(), record.iter()));
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CellReaderError;

    #[test]
    fn test_first_row() {
        let parser = Parser::new();
        let data = b"id,CD3,CD19\nS1,1,4.5\nS2,0,3.2\n";
        let row = parser.first_row(data).unwrap().unwrap();

        let names: Vec<&str> = row.names().collect();
        assert_eq!(names, vec!["id", "CD3", "CD19"]);
        assert_eq!(row.get("CD19"), Some("4.5"));
    }

    #[test]
    fn test_header_only_has_no_rows() {
        let parser = Parser::new();
        assert!(parser.first_row(b"id,CD3\n").unwrap().is_none());
        assert!(parser.first_row(b"").unwrap().is_none());
    }

    #[test]
    fn test_sample_limit() {
        let parser = Parser::new();
        let mut data = String::from("v\n");
        for i in 0..25 {
            data.push_str(&format!("{}\n", i));
        }
        let rows = parser.sample_rows(data.as_bytes(), 10).unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[9].get("v"), Some("9"));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let parser = Parser::new();
        let err = parser.sample_rows(b"a,b\n1,2\n3\n", 10).unwrap_err();
        assert!(matches!(err, CellReaderError::Csv(_)));
    }

    #[test]
    fn test_ragged_row_beyond_limit_is_not_read() {
        let parser = Parser::new();
        let rows = parser.sample_rows(b"a,b\n1,2\n3\n", 1).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let parser = Parser::new();
        let err = parser.sample_rows(b"a,b\n\xff\xfe,1\n", 10).unwrap_err();
        assert!(matches!(err, CellReaderError::Csv(_)));
    }

    #[test]
    fn test_custom_delimiter_and_quotes() {
        let parser = Parser::with_config(ParserConfig {
            delimiter: b';',
            ..ParserConfig::default()
        });
        let rows = parser
            .sample_rows(b"name;CD3\n\"a;b\";1\n", 10)
            .unwrap();
        assert_eq!(rows[0].get("name"), Some("a;b"));
        assert_eq!(rows[0].get("CD3"), Some("1"));
    }
}
