use crate::extraction::Table;
use crate::model::{accumulate, fill, fill_count, MeasurementRecord};
use crate::parsing::values::{parse_length, parse_sqft};
use regex::Regex;
use std::sync::LazyLock;

/// Frieze rows sometimes carry an area column; anything at or below this
/// floor is treated as noise rather than soffit area. Heuristic constant
/// with no documented derivation — kept tunable here.
pub const SOFFIT_AREA_FLOOR_SQFT: f64 = 50.0;

/// Soffit deeper than this (inches) is classified as a porch ceiling.
/// Standard eave soffits run 12-24" deep; porch ceilings are over four feet.
pub const PORCH_CEILING_MIN_DEPTH_IN: u32 = 48;

static DEPTH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(\d+)["”]"#).unwrap());

/// Run the full recognizer battery on one table.
///
/// Recognizers are independent and not mutually exclusive: a table whose
/// flattened text satisfies several triggers is handled by each of them.
pub fn scan_table(table: &Table, rec: &mut MeasurementRecord) {
    if table.len() < 2 {
        return;
    }

    let flat = flatten_lower(table);

    if flat.contains("facades") && flat.contains("ft²") {
        areas_table(table, rec);
    }

    if flat.contains("inside") && flat.contains("outside") && flat.contains("qty") {
        corners_table(table, rec);
    }

    if flat.contains("eaves") || flat.contains("fascia") || flat.contains("frieze") {
        roofline_table(table, rec);
    }

    if flat.contains("soffit") {
        soffit_breakdown_table(table, rec);
    }
}

/// Facades/openings areas.
fn areas_table(table: &Table, rec: &mut MeasurementRecord) {
    for row in table {
        let label = cell_text(row, 0).to_lowercase();
        if label.contains("facades") {
            fill(&mut rec.facades_area_sqft, parse_sqft(cell_text(row, 1)));
        } else if label.contains("openings") {
            fill(&mut rec.openings_sqft, parse_sqft(cell_text(row, 1)));
        }
    }
}

/// Inside/outside corner counts, with aggregate lengths when a row carries
/// a length-valued cell after the count.
fn corners_table(table: &Table, rec: &mut MeasurementRecord) {
    for row in table {
        let label = cell_text(row, 0).to_lowercase();
        if label.contains("inside") && label.contains("qty") {
            corner_row(row, &mut rec.inside_corners_count, &mut rec.inside_corners_length);
        } else if label.contains("outside") && label.contains("qty") {
            corner_row(row, &mut rec.outside_corners_count, &mut rec.outside_corners_length);
        }
    }
}

fn corner_row(row: &[Option<String>], count: &mut Option<u32>, length: &mut Option<f64>) {
    let mut count_idx = None;
    for (i, cell) in row.iter().enumerate().skip(1) {
        let text = cell.as_deref().unwrap_or("").trim();
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            fill_count(count, text.parse().ok());
            count_idx = Some(i);
            break;
        }
    }

    // Aggregate length, if stated after the count (marked by a foot tick).
    if let Some(idx) = count_idx {
        for cell in row.iter().skip(idx + 1) {
            let text = cell.as_deref().unwrap_or("");
            if text.contains('\'') || text.contains('\u{2019}') {
                fill(length, parse_length(text));
                break;
            }
        }
    }
}

/// Eaves/rakes fascia, level/sloped frieze, and starter course rows.
fn roofline_table(table: &Table, rec: &mut MeasurementRecord) {
    for row in table {
        let label = cell_text(row, 0).to_lowercase();
        let value = cell_text(row, 1);

        if label.contains("eaves") && label.contains("fascia") {
            let length = parse_length(value);
            fill(&mut rec.eaves_fascia_length, length);
            // Eaves fascia run doubles as the gutter length.
            fill(&mut rec.gutter_total_length, length);
        } else if label.contains("level") && label.contains("frieze") {
            fill(&mut rec.level_frieze_length, parse_length(value));
            accumulate_soffit_area(row, rec);
        } else if label.contains("rakes") && label.contains("fascia") {
            fill(&mut rec.rakes_fascia_length, parse_length(value));
        } else if label.contains("sloped") && label.contains("frieze") {
            fill(&mut rec.sloped_frieze_length, parse_length(value));
            accumulate_soffit_area(row, rec);
        } else if label.contains("level") && label.contains("starter") {
            fill(&mut rec.level_starter_length, parse_length(value));
        } else if label.contains("sloped") && label.contains("starter") {
            fill(&mut rec.sloped_starter_length, parse_length(value));
        } else if label.contains("vertical") && label.contains("starter") {
            fill(&mut rec.vertical_starter_length, parse_length(value));
        }
    }
}

/// Sum any plausible soffit area cell in a frieze row into the total.
fn accumulate_soffit_area(row: &[Option<String>], rec: &mut MeasurementRecord) {
    for cell in row {
        if let Some(sqft) = parse_sqft(cell.as_deref().unwrap_or("")) {
            if sqft > SOFFIT_AREA_FLOOR_SQFT {
                accumulate(&mut rec.soffit_total_sqft, sqft);
            }
        }
    }
}

/// Soffit breakdown rows: a depth cell strictly deeper than 48" marks a
/// porch ceiling; its area (scanned right-to-left, usually the last cell)
/// accumulates into the porch ceiling total. One contribution per row.
fn soffit_breakdown_table(table: &Table, rec: &mut MeasurementRecord) {
    for row in table {
        for cell in row {
            let text = cell.as_deref().unwrap_or("");
            let Some(depth) = first_depth_inches(text) else {
                continue;
            };
            if depth > PORCH_CEILING_MIN_DEPTH_IN {
                for area_cell in row.iter().rev() {
                    if let Some(sqft) = parse_sqft(area_cell.as_deref().unwrap_or("")) {
                        if sqft > 0.0 {
                            accumulate(&mut rec.porch_ceiling_sqft, sqft);
                            break;
                        }
                    }
                }
                break;
            }
        }
    }
}

fn first_depth_inches(s: &str) -> Option<u32> {
    DEPTH_RE
        .captures(s)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn cell_text(row: &[Option<String>], idx: usize) -> &str {
    row.get(idx)
        .and_then(|c| c.as_deref())
        .unwrap_or("")
        .trim()
}

fn flatten_lower(table: &Table) -> String {
    table
        .iter()
        .flat_map(|row| row.iter())
        .map(|cell| cell.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        rows.iter()
            .map(|row| row.iter().map(|c| Some(c.to_string())).collect())
            .collect()
    }

    #[test]
    fn test_areas_table() {
        let t = table(&[
            &["Areas", "Total ft²"],
            &["Facades", "1703 ft²"],
            &["Openings", "351 ft²"],
        ]);
        let mut rec = MeasurementRecord::default();
        scan_table(&t, &mut rec);
        assert_eq!(rec.facades_area_sqft, Some(1703.0));
        assert_eq!(rec.openings_sqft, Some(351.0));
    }

    #[test]
    fn test_corners_table_counts() {
        let t = table(&[
            &["Corners", "Qty"],
            &["Inside Qty", "3", "64' 2\""],
            &["Outside Qty", "9", "171' 5\""],
        ]);
        let mut rec = MeasurementRecord::default();
        scan_table(&t, &mut rec);
        assert_eq!(rec.inside_corners_count, Some(3));
        assert_eq!(rec.outside_corners_count, Some(9));
        assert_eq!(rec.inside_corners_length, Some(64.2));
        assert_eq!(rec.outside_corners_length, Some(171.4));
    }

    #[test]
    fn test_corners_count_skips_non_digit_cells() {
        let t = table(&[
            &["Corners", "Qty"],
            &["Inside Qty", "-", "3"],
            &["Outside Qty", "n/a", "9"],
        ]);
        let mut rec = MeasurementRecord::default();
        scan_table(&t, &mut rec);
        assert_eq!(rec.inside_corners_count, Some(3));
        assert_eq!(rec.outside_corners_count, Some(9));
    }

    #[test]
    fn test_roofline_lengths_and_gutter_alias() {
        let t = table(&[
            &["Roofline", "Length"],
            &["Eaves Fascia", "103' 8\""],
            &["Rakes Fascia", "88' 0\""],
        ]);
        let mut rec = MeasurementRecord::default();
        scan_table(&t, &mut rec);
        assert_eq!(rec.eaves_fascia_length, Some(103.7));
        assert_eq!(rec.gutter_total_length, Some(103.7));
        assert_eq!(rec.rakes_fascia_length, Some(88.0));
    }

    #[test]
    fn test_frieze_rows_accumulate_soffit_area() {
        let t = table(&[
            &["Roofline", "Length", "Area"],
            &["Level Frieze", "120' 0\"", "160 ft²"],
            &["Sloped Frieze", "40' 0\"", "75 ft²"],
        ]);
        let mut rec = MeasurementRecord::default();
        scan_table(&t, &mut rec);
        assert_eq!(rec.level_frieze_length, Some(120.0));
        assert_eq!(rec.sloped_frieze_length, Some(40.0));
        assert_eq!(rec.soffit_total_sqft, Some(235.0));
    }

    #[test]
    fn test_soffit_area_floor_filters_noise() {
        let t = table(&[
            &["Roofline", "Length", "Area"],
            &["Level Frieze", "120' 0\"", "48 ft²"],
        ]);
        let mut rec = MeasurementRecord::default();
        scan_table(&t, &mut rec);
        // 48 ft² is below the noise floor; no contribution, field stays absent.
        assert_eq!(rec.soffit_total_sqft, None);
    }

    #[test]
    fn test_starter_rows() {
        let t = table(&[
            &["Roofline", "Length"],
            &["Level Starter", "134' 1\""],
            &["Sloped Starter", "22' 0\""],
            &["Vertical Starter", "10' 6\""],
        ]);
        let mut rec = MeasurementRecord::default();
        scan_table(&t, &mut rec);
        assert_eq!(rec.level_starter_length, Some(134.1));
        assert_eq!(rec.sloped_starter_length, Some(22.0));
        assert_eq!(rec.vertical_starter_length, Some(10.5));
    }

    #[test]
    fn test_porch_ceiling_depth_threshold_is_strict() {
        let at_threshold = table(&[
            &["Soffit Breakdown", "Depth", "Area"],
            &["5 eave", "48\"", "88 ft²"],
        ]);
        let mut rec = MeasurementRecord::default();
        scan_table(&at_threshold, &mut rec);
        assert_eq!(rec.porch_ceiling_sqft, None);

        let over_threshold = table(&[
            &["Soffit Breakdown", "Depth", "Area"],
            &["5 eave", "49\"", "88 ft²"],
        ]);
        let mut rec = MeasurementRecord::default();
        scan_table(&over_threshold, &mut rec);
        assert_eq!(rec.porch_ceiling_sqft, Some(88.0));
    }

    #[test]
    fn test_porch_ceiling_area_scanned_in_reverse() {
        let t = table(&[
            &["Soffit Breakdown", "Depth", "Length", "Area"],
            &["5 eave", "76\"", "13' 11\"", "88 ft²"],
        ]);
        let mut rec = MeasurementRecord::default();
        scan_table(&t, &mut rec);
        assert_eq!(rec.porch_ceiling_sqft, Some(88.0));
    }

    #[test]
    fn test_porch_ceiling_one_contribution_per_row() {
        let t = table(&[
            &["Soffit Breakdown", "Depth", "Depth", "Area"],
            &["porch", "76\"", "60\"", "88 ft²"],
            &["porch", "52\"", "-", "120 ft²"],
        ]);
        let mut rec = MeasurementRecord::default();
        scan_table(&t, &mut rec);
        // Two qualifying rows, one contribution each.
        assert_eq!(rec.porch_ceiling_sqft, Some(208.0));
    }

    #[test]
    fn test_short_table_ignored() {
        let t = table(&[&["Facades", "1703 ft²"]]);
        let mut rec = MeasurementRecord::default();
        scan_table(&t, &mut rec);
        assert_eq!(rec.facades_area_sqft, None);
    }

    #[test]
    fn test_table_pass_is_write_once() {
        let first = table(&[
            &["Areas", "Total ft²"],
            &["Facades", "1703 ft²"],
        ]);
        let second = table(&[
            &["Areas", "Total ft²"],
            &["Facades", "999 ft²"],
        ]);
        let mut rec = MeasurementRecord::default();
        scan_table(&first, &mut rec);
        scan_table(&second, &mut rec);
        assert_eq!(rec.facades_area_sqft, Some(1703.0));
    }
}
