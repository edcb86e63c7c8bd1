//! Files command - list the files of a folder and which ones are scanned.

use std::path::PathBuf;

use cellreader::{FileDescriptor, FileKind, TableSource};
use colored::Colorize;

pub async fn run(folder: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !folder.is_dir() {
        return Err(format!("Folder not found: {}", folder.display()).into());
    }

    let files = FileDescriptor::list_dir(&folder).await?;
    let selectable = files.iter().filter(|f| f.kind().is_supported()).count();

    println!(
        "{} {}",
        "Files in".cyan().bold(),
        folder.display().to_string().white()
    );
    println!();

    for file in &files {
        match file.kind() {
            FileKind::Csv => println!("  {}", file.name().white()),
            FileKind::Unsupported(ext) => {
                if verbose {
                    let reason = if ext.is_empty() {
                        "no extension".to_string()
                    } else {
                        format!(".{}", ext)
                    };
                    println!(
                        "  {} {}",
                        file.name().dimmed(),
                        format!("(ignored, {})", reason).dimmed()
                    );
                } else {
                    println!("  {} {}", file.name().dimmed(), "(ignored)".dimmed());
                }
            }
        }
    }

    println!();
    if selectable == 0 {
        println!("{}", "The selected folder does not contain any CSV files.".yellow());
    } else {
        println!(
            "{} of {} files can be scanned",
            selectable.to_string().white().bold(),
            files.len()
        );
    }

    Ok(())
}
