use crate::model::MeasurementRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A siding product entry in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDef {
    pub name: String,
    /// Installed price per square.
    pub price: Decimal,
}

/// A price catalog: named sections mapping item keys to unit prices.
///
/// Prices are carried as `Decimal` (string-encoded in JSON) so money
/// arithmetic stays exact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceCatalog {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    pub products: BTreeMap<String, ProductDef>,
    #[serde(default)]
    pub profiles: Vec<String>,
    #[serde(default)]
    pub waste_options: Vec<u32>,
    pub soffit_fascia: BTreeMap<String, Decimal>,
    pub corners: BTreeMap<String, Decimal>,
    pub labor: BTreeMap<String, Decimal>,
    pub wraps: BTreeMap<String, Decimal>,
    pub accessories: BTreeMap<String, Decimal>,
    pub gutters: BTreeMap<String, Decimal>,
    pub other: BTreeMap<String, Decimal>,
}

/// Everything a quote calculation needs: the extracted measurements plus
/// selections and manual overrides. All fields are defaulted so a caller
/// can supply only what differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteInput {
    /// Extracted measurements, if a report was parsed.
    pub measurements: Option<MeasurementRecord>,

    // Siding selection
    pub siding_product: String,
    pub siding_profile: String,
    pub siding_color: String,
    /// Material waste percentage (14, 16, or 18).
    pub waste_percent: u32,
    pub g8_color: String,

    /// Override the report's waste-adjusted squares.
    pub siding_squares: Option<f64>,

    // Corners (override report values when non-zero)
    pub inside_corners: u32,
    pub outside_corners: u32,

    // Soffit/fascia
    pub soffit_lf: f64,
    /// True prices soffit at the over-16" rate.
    pub soffit_width_over_16: bool,
    pub fascia_frieze_lf: f64,
    pub porch_beam_lf: f64,
    pub porch_ceiling_count: u32,
    pub bird_box_count: u32,
    pub extra_bend_lf: f64,
    pub remove_soffit_lf: f64,

    // Labor options
    pub include_fan_fold: bool,
    pub include_remove_dispose: bool,
    pub include_fullback: bool,
    pub dormers_count: u32,

    // Wraps
    pub wraps_are_metal: bool,
    pub window_wrap_count: u32,
    pub door_wrap_count: u32,
    pub transom_wrap_count: u32,
    pub garage_door_wrap_count: u32,

    // Accessories
    pub vent_count: u32,
    pub light_panel_count: u32,
    pub receptacle_count: u32,
    pub faucet_count: u32,
    pub dryer_vent_count: u32,
    pub shutter_pairs: u32,

    // Gutters
    pub new_gutter_lf: f64,
    pub rehang_gutter_lf: f64,

    // Other
    pub rotten_wood_lf: f64,
    pub osb_sheets: u32,
    pub house_wrap_rolls: u32,
    pub fur_out_count: u32,
    /// "standard" or "full" (with dumpster).
    pub cleanup_type: String,
    pub extra_labor: Decimal,
}

impl Default for QuoteInput {
    fn default() -> Self {
        QuoteInput {
            measurements: None,
            siding_product: "carvedwood_044".into(),
            siding_profile: "D-4".into(),
            siding_color: "Harbor Gray".into(),
            waste_percent: 14,
            g8_color: "Charcoal".into(),
            siding_squares: None,
            inside_corners: 0,
            outside_corners: 0,
            soffit_lf: 0.0,
            soffit_width_over_16: false,
            fascia_frieze_lf: 0.0,
            porch_beam_lf: 0.0,
            porch_ceiling_count: 0,
            bird_box_count: 0,
            extra_bend_lf: 0.0,
            remove_soffit_lf: 0.0,
            include_fan_fold: true,
            include_remove_dispose: true,
            include_fullback: false,
            dormers_count: 0,
            wraps_are_metal: false,
            window_wrap_count: 0,
            door_wrap_count: 0,
            transom_wrap_count: 0,
            garage_door_wrap_count: 0,
            vent_count: 0,
            light_panel_count: 0,
            receptacle_count: 0,
            faucet_count: 0,
            dryer_vent_count: 0,
            shutter_pairs: 0,
            new_gutter_lf: 0.0,
            rehang_gutter_lf: 0.0,
            rotten_wood_lf: 0.0,
            osb_sheets: 0,
            house_wrap_rolls: 0,
            fur_out_count: 0,
            cleanup_type: "standard".into(),
            extra_labor: Decimal::ZERO,
        }
    }
}

/// A single priced line in the quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub category: String,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_price: Decimal,
    pub total: Decimal,
}

/// A complete calculated quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,

    pub siding_product_name: String,
    pub siding_profile: String,
    pub siding_color: String,
    pub g8_color: String,

    pub line_items: Vec<LineItem>,

    // Category subtotals (customer view)
    pub siding_package_total: Decimal,
    pub soffit_fascia_package_total: Decimal,
    pub gutters_total: Decimal,
    pub wraps_total: Decimal,
    pub other_total: Decimal,

    pub grand_total: Decimal,

    // 50/50 payment split
    pub deposit_50: Decimal,
    pub balance_50: Decimal,
}
