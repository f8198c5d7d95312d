pub mod pdftotext;

use crate::error::QuoteError;

/// A table as recovered from a page: rows of nullable text cells. No
/// assumption is made about column alignment across rows.
pub type Table = Vec<Vec<Option<String>>>;

/// Content extracted from a single page of a document.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    /// Plain text of the page (may be empty).
    pub text: String,
    /// Zero or more tables recovered from the page, in reading order.
    pub tables: Vec<Table>,
}

/// Trait for document text/table extraction backends.
pub trait DocumentReader: Send + Sync {
    /// Extract page content from raw document bytes, one entry per page.
    fn read_pages(&self, doc_bytes: &[u8]) -> Result<Vec<PageContent>, QuoteError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
