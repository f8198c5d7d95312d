//! Integration tests for the extract-then-quote pipeline.
//!
//! Uses a MockReader that returns pre-built PageContent without invoking
//! pdftotext, so these tests run without poppler-utils.

use cladquote_core::error::QuoteError;
use cladquote_core::extraction::{DocumentReader, PageContent, Table};
use cladquote_core::pricing::{builtin_catalog, calculate_quote, QuoteInput};
use cladquote_core::{extract_from_document, quote_document};

struct MockReader {
    pages: Vec<PageContent>,
}

impl DocumentReader for MockReader {
    fn read_pages(&self, _doc_bytes: &[u8]) -> Result<Vec<PageContent>, QuoteError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingReader;

impl DocumentReader for FailingReader {
    fn read_pages(&self, _doc_bytes: &[u8]) -> Result<Vec<PageContent>, QuoteError> {
        Err(QuoteError::Extraction("unreadable document".into()))
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

fn page(number: usize, text: &str, tables: Vec<Table>) -> PageContent {
    PageContent {
        page_number: number,
        text: text.to_string(),
        tables,
    }
}

fn table(rows: &[&[&str]]) -> Table {
    rows.iter()
        .map(|row| row.iter().map(|c| Some(c.to_string())).collect())
        .collect()
}

// ---------------------------------------------------------------------------
// Test 1: the representative synthetic report
// ---------------------------------------------------------------------------
#[test]
fn synthetic_report_end_to_end() {
    let areas = table(&[
        &["Areas", "Total"],
        &["Facades", "1703 ft²"],
        &["Openings", "351 ft²"],
    ]);
    let roofline = table(&[
        &["Roofline", "Length"],
        &["Eaves Fascia", "103' 8\""],
        &["Rakes Fascia", "88' 4\""],
    ]);
    let body = "\
319 Walden Station Drive, Macon, GA
PROPERTY ID: 55443322
SIDING WASTE TOTALS
+ Openings < 33ft²
Zero Waste 2054 ft² 20¾
+10% 2259 ft² 22¾
+18% 2423 ft² 24½
";
    let reader = MockReader {
        pages: vec![
            page(1, "319 Walden Station Drive Complete Measurements", vec![]),
            page(2, body, vec![areas, roofline]),
        ],
    };

    let rec = extract_from_document(&[], &reader).unwrap();

    assert_eq!(rec.facades_area_sqft, Some(1703.0));
    assert_eq!(rec.openings_sqft, Some(351.0));
    assert_eq!(rec.eaves_fascia_length, Some(103.7));
    assert_eq!(rec.gutter_total_length, Some(103.7));
    assert_eq!(rec.rakes_fascia_length, Some(88.3));
    assert_eq!(rec.siding_squares_0_waste, Some(20.75));
    assert_eq!(rec.siding_squares_10_waste, Some(22.75));
    assert_eq!(rec.siding_squares_18_waste, Some(24.5));
    assert_eq!(
        rec.property_address.as_deref(),
        Some("319 Walden Station Drive, Macon, GA")
    );
    assert_eq!(rec.property_id.as_deref(), Some("55443322"));
}

// ---------------------------------------------------------------------------
// Test 2: porch ceiling from a soffit breakdown row, with derived beam
// ---------------------------------------------------------------------------
#[test]
fn porch_ceiling_and_derived_beam() {
    let soffit = table(&[
        &["Soffit Breakdown", "Depth", "Length", "Area"],
        &["5 eave", "76\"", "13' 11\"", "88 ft²"],
    ]);
    let reader = MockReader {
        pages: vec![page(1, "", vec![soffit])],
    };

    let rec = extract_from_document(&[], &reader).unwrap();
    assert_eq!(rec.porch_ceiling_sqft, Some(88.0));
    // 4 * sqrt(88) = 37.52, rounded to one decimal
    assert_eq!(rec.porch_beam_lf, Some(37.5));
}

// ---------------------------------------------------------------------------
// Test 3: table pass beats text pass
// ---------------------------------------------------------------------------
#[test]
fn table_values_survive_conflicting_text() {
    let corners = table(&[
        &["Corners", "Qty"],
        &["Inside Qty", "3"],
        &["Outside Qty", "9"],
    ]);
    let reader = MockReader {
        pages: vec![page(1, "Detail section: Inside Qty 7", vec![corners])],
    };

    let rec = extract_from_document(&[], &reader).unwrap();
    assert_eq!(rec.inside_corners_count, Some(3));
}

// ---------------------------------------------------------------------------
// Test 4: an empty document still yields a (fully absent) record
// ---------------------------------------------------------------------------
#[test]
fn empty_document_yields_empty_record() {
    let reader = MockReader { pages: vec![] };
    let rec = extract_from_document(&[], &reader).unwrap();
    let json = serde_json::to_value(&rec).unwrap();
    assert!(json.as_object().unwrap().values().all(|v| v.is_null()));
}

// ---------------------------------------------------------------------------
// Test 5: a reader failure is the only abort
// ---------------------------------------------------------------------------
#[test]
fn reader_failure_propagates() {
    let err = extract_from_document(&[], &FailingReader).unwrap_err();
    assert!(matches!(err, QuoteError::Extraction(_)));
}

// ---------------------------------------------------------------------------
// Test 6: one-step quote from a report
// ---------------------------------------------------------------------------
#[test]
fn quote_document_prices_extracted_measurements() {
    let body = "\
+ Openings < 33ft²
Zero Waste 2054 ft² 20¾
+10% 2259 ft² 22¾
+18% 2423 ft² 24½
";
    let reader = MockReader {
        pages: vec![page(1, body, vec![])],
    };
    let catalog = builtin_catalog().unwrap();

    let (rec, quote) =
        quote_document(&[], &reader, QuoteInput::default(), &catalog).unwrap();

    assert_eq!(rec.siding_squares_18_waste, Some(24.5));
    // Default 14% waste prices the 18%-tier squares.
    let siding = &quote.line_items[0];
    assert_eq!(siding.quantity, 24.5);
    assert!(quote.grand_total > quote.siding_package_total);
}

// ---------------------------------------------------------------------------
// Test 7: quoting an empty record is total
// ---------------------------------------------------------------------------
#[test]
fn empty_record_prices_to_cleanup_only() {
    let reader = MockReader { pages: vec![] };
    let catalog = builtin_catalog().unwrap();
    let rec = extract_from_document(&[], &reader).unwrap();

    let input = QuoteInput {
        measurements: Some(rec),
        ..Default::default()
    };
    let result = calculate_quote(&input, &catalog).unwrap();
    assert_eq!(result.line_items.len(), 1);
    assert_eq!(result.line_items[0].description, "Cleanup (Standard)");
}
