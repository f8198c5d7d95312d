use serde::{Deserialize, Serialize};

/// Measurements extracted from one "complete measurements" report.
///
/// Every field is independently optional: anything the document does not
/// contain, or renders in a form the normalizers cannot recognize, stays
/// `None`. Fields are write-once — a later extraction pass never overwrites
/// a value an earlier pass already set — except the accumulating areas
/// (`soffit_total_sqft`, `porch_ceiling_sqft`) which sum across qualifying
/// table rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementRecord {
    // Property info
    pub property_address: Option<String>,
    pub property_id: Option<String>,
    pub customer_name: Option<String>,

    // Siding squares at the report's three waste tiers
    pub siding_squares_0_waste: Option<f64>,
    pub siding_squares_10_waste: Option<f64>,
    pub siding_squares_18_waste: Option<f64>,

    // Facades
    pub facades_area_sqft: Option<f64>,
    pub openings_sqft: Option<f64>,

    // Corners
    pub inside_corners_count: Option<u32>,
    pub inside_corners_length: Option<f64>,
    pub outside_corners_count: Option<u32>,
    pub outside_corners_length: Option<f64>,

    // Starter courses
    pub level_starter_length: Option<f64>,
    pub sloped_starter_length: Option<f64>,
    pub vertical_starter_length: Option<f64>,

    /// Summed from frieze rows that carry an area column.
    pub soffit_total_sqft: Option<f64>,

    // Fascia/frieze lengths
    pub eaves_fascia_length: Option<f64>,
    pub level_frieze_length: Option<f64>,
    pub rakes_fascia_length: Option<f64>,
    pub sloped_frieze_length: Option<f64>,

    /// Summed from soffit-breakdown rows deeper than the porch-ceiling
    /// depth threshold.
    pub porch_ceiling_sqft: Option<f64>,
    /// Estimated from `porch_ceiling_sqft` assuming a roughly square
    /// footprint (`4 * sqrt(area)`). An approximation, not a measurement.
    pub porch_beam_lf: Option<f64>,

    /// Aliased from the eaves fascia length when not independently stated.
    pub gutter_total_length: Option<f64>,
}

/// Set `slot` only if it is still unset and `value` is a finite,
/// non-negative number.
pub(crate) fn fill(slot: &mut Option<f64>, value: Option<f64>) {
    if slot.is_none() {
        if let Some(v) = value {
            if v.is_finite() && v >= 0.0 {
                *slot = Some(v);
            }
        }
    }
}

pub(crate) fn fill_count(slot: &mut Option<u32>, value: Option<u32>) {
    if slot.is_none() && value.is_some() {
        *slot = value;
    }
}

/// Set a string slot only if it is still unset and the value is non-empty
/// after trimming.
pub(crate) fn fill_text(slot: &mut Option<String>, value: Option<&str>) {
    if slot.is_none() {
        if let Some(v) = value {
            let trimmed = v.trim();
            if !trimmed.is_empty() {
                *slot = Some(trimmed.to_string());
            }
        }
    }
}

/// Add `amount` into an accumulating area slot. A slot that never receives
/// a contribution stays `None` rather than becoming zero.
pub(crate) fn accumulate(slot: &mut Option<f64>, amount: f64) {
    if amount.is_finite() && amount >= 0.0 {
        *slot = Some(slot.unwrap_or(0.0) + amount);
    }
}
