use crate::error::QuoteError;
use crate::extraction::{DocumentReader, PageContent, Table};
use std::io::Write;
use std::process::Command;

/// Document reader backed by pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout`, which preserves column alignment with spaces.
/// Table grids are reconstructed from runs of consecutive lines whose cells
/// are separated by 2+ space gaps.
pub struct PdftotextReader;

impl PdftotextReader {
    pub fn new() -> Self {
        PdftotextReader
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for PdftotextReader {
    fn read_pages(&self, doc_bytes: &[u8]) -> Result<Vec<PageContent>, QuoteError> {
        // Write the document to a temp file; deleted on drop on every path.
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| QuoteError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(doc_bytes)
            .map_err(|e| QuoteError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    QuoteError::PdftotextNotFound
                } else {
                    QuoteError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(QuoteError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);

        // pdftotext uses form feed \x0c as the page separator.
        let pages: Vec<PageContent> = text
            .split('\x0c')
            .enumerate()
            .map(|(i, page_text)| {
                let lines: Vec<&str> = page_text.lines().collect();
                PageContent {
                    page_number: i + 1,
                    text: page_text.to_string(),
                    tables: reconstruct_tables(&lines),
                }
            })
            .filter(|p| !p.text.trim().is_empty() || p.page_number == 1)
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Reconstruct table grids from layout-preserved lines.
///
/// A run of 2+ consecutive lines that each split into 2+ columns is taken
/// as one table; everything else is narrative text.
fn reconstruct_tables(lines: &[&str]) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut current: Table = Vec::new();

    for line in lines {
        let segments = split_by_whitespace_gaps(line);
        if segments.len() >= 2 {
            current.push(
                segments
                    .into_iter()
                    .map(|s| Some(s.trim().to_string()))
                    .collect(),
            );
        } else {
            if current.len() >= 2 {
                tables.push(std::mem::take(&mut current));
            }
            current.clear();
        }
    }

    if current.len() >= 2 {
        tables.push(current);
    }

    tables
}

/// Split a line by gaps of 2+ whitespace characters. Whitespace may be
/// multi-byte (pdftotext emits U+00A0 for non-breaking spaces), so the
/// segment end is the byte index where the gap began, not an offset from
/// the current position.
fn split_by_whitespace_gaps(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = None;
    let mut gap_start = 0;
    let mut space_count = 0;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            if space_count == 0 {
                gap_start = i;
            }
            space_count += 1;
            if space_count == 2 {
                if let Some(s) = start {
                    segments.push(&line[s..gap_start]);
                    start = None;
                }
            }
        } else {
            if start.is_none() {
                start = Some(i);
            }
            space_count = 0;
        }
    }

    if let Some(s) = start {
        segments.push(&line[s..]);
    }

    segments
}
