pub mod catalog;
pub mod parse;
pub mod quote;

use cladquote_core::error::QuoteError;
use std::path::Path;

/// Document inputs must be PDFs; anything else is rejected up front.
pub fn require_pdf(path: &Path) -> Result<(), QuoteError> {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if is_pdf {
        Ok(())
    } else {
        Err(QuoteError::UnsupportedInput(format!(
            "'{}' is not a PDF file",
            path.display()
        )))
    }
}
