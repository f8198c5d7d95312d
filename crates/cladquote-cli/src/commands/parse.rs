use cladquote_core::error::QuoteError;
use cladquote_core::extraction::pdftotext::PdftotextReader;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), QuoteError> {
    super::require_pdf(&input_file)?;

    let doc_bytes = std::fs::read(&input_file)?;
    let reader = PdftotextReader::new();
    let measurements = cladquote_core::extract_from_document(&doc_bytes, &reader)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&measurements)?;
            std::fs::write(&path, json)?;
            eprintln!("Measurements written to {}", path.display());
        }
        None => match output_format {
            "json" => output::json::print(&measurements)?,
            _ => println!("{}", output::table::format_measurements(&measurements)),
        },
    }

    Ok(())
}
