use cladquote_core::error::QuoteError;
use cladquote_core::extraction::pdftotext::PdftotextReader;
use cladquote_core::model::MeasurementRecord;
use cladquote_core::pricing::{self, QuoteInput};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    product: Option<String>,
    waste: Option<u32>,
    catalog_file: Option<PathBuf>,
    input_overrides: Option<PathBuf>,
    output_format: &str,
    show_items: bool,
) -> Result<(), QuoteError> {
    let catalog = match catalog_file {
        Some(ref path) => pricing::load_catalog(path)?,
        None => pricing::builtin_catalog()?,
    };

    // Start from a full QuoteInput override file when given, else defaults.
    let mut input: QuoteInput = match input_overrides {
        Some(ref path) => {
            let bytes = std::fs::read(path)?;
            serde_json::from_slice(&bytes)?
        }
        None => QuoteInput::default(),
    };
    if let Some(product) = product {
        input.siding_product = product;
    }
    if let Some(waste) = waste {
        input.waste_percent = waste;
    }

    // A .json input is a pre-parsed measurement record; anything else must
    // be a report PDF.
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let result = if is_json {
        let bytes = std::fs::read(&input_file)?;
        let measurements: MeasurementRecord = serde_json::from_slice(&bytes)?;
        input.measurements = Some(measurements);
        pricing::calculate_quote(&input, &catalog)?
    } else {
        super::require_pdf(&input_file)?;
        let doc_bytes = std::fs::read(&input_file)?;
        let reader = PdftotextReader::new();
        let (_, result) =
            cladquote_core::quote_document(&doc_bytes, &reader, input, &catalog)?;
        result
    };

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_quote(&result, show_items),
    }

    Ok(())
}
