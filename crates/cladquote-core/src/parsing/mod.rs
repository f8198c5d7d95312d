pub mod tables;
pub mod text;
pub mod values;

use crate::extraction::PageContent;
use crate::model::MeasurementRecord;
use values::round1;

/// Extract a measurement record from page content.
///
/// Pages are processed strictly in document order. Each page's tables go
/// through the shape-recognizer battery while its raw text accumulates into
/// a whole-document buffer; the text recovery pass then runs exactly once
/// over that buffer, filling only fields the table pass left empty.
///
/// Infallible: anything the document lacks, or renders unrecognizably,
/// stays `None` in the returned record.
pub fn extract_measurements(pages: &[PageContent]) -> MeasurementRecord {
    let mut rec = MeasurementRecord::default();
    let mut full_text = String::new();

    for page in pages {
        full_text.push_str(&page.text);
        full_text.push('\n');

        for table in &page.tables {
            tables::scan_table(table, &mut rec);
        }
    }

    text::recover_from_text(&full_text, &mut rec);

    // Porch beam length estimated from the ceiling area (either pass),
    // assuming a roughly square footprint.
    if let Some(area) = rec.porch_ceiling_sqft {
        if area > 0.0 && rec.porch_beam_lf.is_none() {
            rec.porch_beam_lf = Some(round1(4.0 * area.sqrt()));
        }
    }

    rec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::Table;

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

    #[test]
    fn test_empty_document_yields_empty_record() {
        let rec = extract_measurements(&[]);
        assert!(rec.facades_area_sqft.is_none());
        assert!(rec.property_address.is_none());
    }

    #[test]
    fn test_table_pass_wins_over_text_pass() {
        let corners = table(&[
            &["Corners", "Qty"],
            &["Inside Qty", "3"],
            &["Outside Qty", "9"],
        ]);
        // Text elsewhere claims a different inside count.
        let pages = [page(1, "Inside Qty 7", vec![corners])];
        let rec = extract_measurements(&pages);
        assert_eq!(rec.inside_corners_count, Some(3));
        assert_eq!(rec.outside_corners_count, Some(9));
    }

    #[test]
    fn test_accumulators_span_pages() {
        let frieze = |len: &str, area: &str| {
            table(&[
                &["Roofline", "Length", "Area"],
                &["Level Frieze", len, area],
            ])
        };
        let pages = [
            page(1, "", vec![frieze("120' 0\"", "160 ft²")]),
            page(2, "", vec![frieze("40' 0\"", "75 ft²")]),
        ];
        let rec = extract_measurements(&pages);
        assert_eq!(rec.soffit_total_sqft, Some(235.0));
        // Write-once field keeps the first page's value.
        assert_eq!(rec.level_frieze_length, Some(120.0));
    }

    #[test]
    fn test_porch_beam_derived_from_table_pass() {
        let soffit = table(&[
            &["Soffit Breakdown", "Depth", "Length", "Area"],
            &["5 eave", "76\"", "13' 11\"", "88 ft²"],
        ]);
        let pages = [page(1, "", vec![soffit])];
        let rec = extract_measurements(&pages);
        assert_eq!(rec.porch_ceiling_sqft, Some(88.0));
        assert_eq!(rec.porch_beam_lf, Some(37.5));
    }

    #[test]
    fn test_porch_beam_derived_from_text_pass() {
        let pages = [page(1, "5 eave 76\" 13' 11\" 88 ft²", vec![])];
        let rec = extract_measurements(&pages);
        assert_eq!(rec.porch_ceiling_sqft, Some(88.0));
        assert_eq!(rec.porch_beam_lf, Some(37.5));
    }

    #[test]
    fn test_text_buffer_spans_pages() {
        // The combined waste section split across two pages still matches
        // once the buffers are concatenated.
        let pages = [
            page(1, "+ Openings < 33ft²\nZero Waste 2054 ft² 20¾", vec![]),
            page(2, "+10% 2259 ft² 22¾\n+18% 2423 ft² 24½", vec![]),
        ];
        let rec = extract_measurements(&pages);
        assert_eq!(rec.siding_squares_0_waste, Some(20.75));
        assert_eq!(rec.siding_squares_10_waste, Some(22.75));
        assert_eq!(rec.siding_squares_18_waste, Some(24.5));
    }
}
