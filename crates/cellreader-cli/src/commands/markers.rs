//! Markers command - discover and classify the columns of selected files.

use std::path::PathBuf;

use cellreader::{
    FileDescriptor, ParserConfig, PresentationHint, ScanConfig, ScanState, Scanner,
};
use colored::Colorize;

pub async fn run(
    folder: PathBuf,
    selected: Vec<String>,
    leading_columns: usize,
    sample_rows: usize,
    delimiter: char,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !folder.is_dir() {
        return Err(format!("Folder not found: {}", folder.display()).into());
    }

    if !delimiter.is_ascii() {
        return Err(format!(
            "Delimiter must be a single ASCII character, got '{}'",
            delimiter
        )
        .into());
    }

    // Build the selection in folder order
    let files = if selected.is_empty() {
        FileDescriptor::csv_files(&folder).await?
    } else {
        let all = FileDescriptor::list_dir(&folder).await?;
        if let Some(missing) = selected.iter().find(|s| !all.iter().any(|f| &f.name == *s)) {
            return Err(format!("File not found in folder: {}", missing).into());
        }
        all.into_iter()
            .filter(|f| selected.contains(&f.name))
            .collect()
    };

    let config = ScanConfig {
        parser: ParserConfig {
            delimiter: delimiter as u8,
            ..ParserConfig::default()
        },
        leading_columns,
        sample_rows,
    };
    config.validate()?;

    let scanner = Scanner::with_config(config);
    let mut state = ScanState::new();
    let report = scanner.scan(&mut state, &files).await?;

    if json_output {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!(
        "{} {} {}",
        "Scanned".cyan().bold(),
        files.len().to_string().white(),
        "files".cyan().bold()
    );
    if verbose {
        for file in &files {
            println!("  {}", file.name.dimmed());
        }
    }
    println!();

    if report.columns.is_empty() {
        println!("{}", "No columns could be classified.".yellow());
    } else {
        println!("{}", "Columns:".yellow().bold());
        for column in &report.columns {
            let control = match column.hint {
                PresentationHint::Toggle => "[toggle]".green().to_string(),
                PresentationHint::Range { .. } => "[min .. max]".blue().to_string(),
            };
            println!("  {:24} {:8} {}", column.name, column.kind.to_string(), control);
        }
    }

    if !report.unclassified.is_empty() {
        println!();
        println!(
            "{} {}",
            "No data for:".dimmed(),
            report.unclassified.join(", ").dimmed()
        );
    }

    if !report.failures.is_empty() {
        println!();
        println!("{}", "Failed files:".red().bold());
        for failure in &report.failures {
            println!(
                "  {} ({}): {}",
                failure.file.white(),
                format!("{:?}", failure.stage).to_lowercase(),
                failure.message
            );
        }
    }

    println!();
    println!("Found {}", report.summary().white().bold());

    Ok(())
}
