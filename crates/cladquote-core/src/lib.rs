pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod pricing;

use error::QuoteError;
use extraction::DocumentReader;
use model::MeasurementRecord;
use pricing::{PriceCatalog, QuoteInput, QuoteResult};

/// Main API entry point: extract measurements from a report document.
///
/// The only failure mode is the reader being unable to open or iterate the
/// document. A readable document always yields a complete record — possibly
/// mostly empty, never a partial error.
pub fn extract_from_document(
    doc_bytes: &[u8],
    reader: &dyn DocumentReader,
) -> Result<MeasurementRecord, QuoteError> {
    let pages = reader.read_pages(doc_bytes)?;
    Ok(parsing::extract_measurements(&pages))
}

/// Extract measurements and calculate a quote in one step.
pub fn quote_document(
    doc_bytes: &[u8],
    reader: &dyn DocumentReader,
    mut input: QuoteInput,
    catalog: &PriceCatalog,
) -> Result<(MeasurementRecord, QuoteResult), QuoteError> {
    let measurements = extract_from_document(doc_bytes, reader)?;
    input.measurements = Some(measurements.clone());
    let result = pricing::calculate_quote(&input, catalog)?;
    Ok((measurements, result))
}
