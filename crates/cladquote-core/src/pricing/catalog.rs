use crate::error::QuoteError;
use crate::pricing::schema::PriceCatalog;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_CATALOG_JSON: &str = include_str!("../../../../pricing/default-catalog.json");

/// Item keys the quote engine prices from each section. A catalog missing
/// any of these is rejected at load time rather than mid-calculation.
const REQUIRED_SOFFIT_FASCIA: &[&str] = &[
    "soffit_over_16",
    "soffit_under_16",
    "fascia_frieze",
    "porch_beam",
    "porch_ceiling",
    "bird_box",
    "extra_bend_crown",
    "remove_soffit",
];
const REQUIRED_CORNERS: &[&str] = &["inside", "outside"];
const REQUIRED_LABOR: &[&str] = &[
    "fullback_insulation",
    "fan_fold",
    "remove_dispose",
    "dormers_flashing",
];
const REQUIRED_WRAPS: &[&str] = &[
    "window_wood",
    "window_metal",
    "door_wood",
    "door_metal",
    "transom_wood",
    "transom_metal",
    "garage_door",
];
const REQUIRED_ACCESSORIES: &[&str] = &[
    "vent",
    "light_panel",
    "receptacle",
    "faucet_bib",
    "dryer_vent",
    "shutters",
];
const REQUIRED_GUTTERS: &[&str] = &["new_gutters", "take_down", "put_back_up"];
const REQUIRED_OTHER: &[&str] = &[
    "rotten_wood",
    "osb_sheet",
    "house_wrap",
    "fur_out",
    "cleanup_standard",
    "cleanup_full",
];

/// Load the builtin price catalog.
pub fn builtin_catalog() -> Result<PriceCatalog, QuoteError> {
    let catalog: PriceCatalog = serde_json::from_str(DEFAULT_CATALOG_JSON)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Load a price catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<PriceCatalog, QuoteError> {
    let content = std::fs::read_to_string(path).map_err(|e| QuoteError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let catalog: PriceCatalog =
        serde_json::from_str(&content).map_err(|e| QuoteError::CatalogLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<PriceCatalog, QuoteError> {
    let catalog: PriceCatalog = serde_json::from_str(json).map_err(QuoteError::Json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed: at least one product, every
/// required item key present, and no negative prices.
pub fn validate_catalog(catalog: &PriceCatalog) -> Result<(), QuoteError> {
    if catalog.products.is_empty() {
        return Err(QuoteError::CatalogInvalid(
            "products must not be empty".into(),
        ));
    }

    for (id, product) in &catalog.products {
        if product.name.is_empty() {
            return Err(QuoteError::CatalogInvalid(format!(
                "product '{}' has an empty name",
                id
            )));
        }
        if product.price < Decimal::ZERO {
            return Err(QuoteError::CatalogInvalid(format!(
                "product '{}' has a negative price",
                id
            )));
        }
    }

    check_section(&catalog.soffit_fascia, REQUIRED_SOFFIT_FASCIA, "soffit_fascia")?;
    check_section(&catalog.corners, REQUIRED_CORNERS, "corners")?;
    check_section(&catalog.labor, REQUIRED_LABOR, "labor")?;
    check_section(&catalog.wraps, REQUIRED_WRAPS, "wraps")?;
    check_section(&catalog.accessories, REQUIRED_ACCESSORIES, "accessories")?;
    check_section(&catalog.gutters, REQUIRED_GUTTERS, "gutters")?;
    check_section(&catalog.other, REQUIRED_OTHER, "other")?;

    Ok(())
}

fn check_section(
    section: &BTreeMap<String, Decimal>,
    required: &[&str],
    section_name: &str,
) -> Result<(), QuoteError> {
    for key in required {
        match section.get(*key) {
            None => {
                return Err(QuoteError::CatalogInvalid(format!(
                    "section '{}' is missing '{}'",
                    section_name, key
                )))
            }
            Some(price) if *price < Decimal::ZERO => {
                return Err(QuoteError::CatalogInvalid(format!(
                    "'{}' in section '{}' has a negative price",
                    key, section_name
                )))
            }
            Some(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builtin_catalog_loads_and_validates() {
        let catalog = builtin_catalog().unwrap();
        assert!(catalog.products.contains_key("carvedwood_044"));
        assert_eq!(catalog.products["carvedwood_044"].price, dec!(525));
        assert_eq!(catalog.waste_options, vec![14, 16, 18]);
        assert_eq!(catalog.soffit_fascia["porch_beam"], dec!(16));
    }

    #[test]
    fn test_missing_required_key_rejected() {
        let mut catalog = builtin_catalog().unwrap();
        catalog.gutters.remove("new_gutters");
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("new_gutters"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut catalog = builtin_catalog().unwrap();
        catalog.other.insert("cleanup_full".into(), dec!(-1));
        assert!(validate_catalog(&catalog).is_err());
    }

    #[test]
    fn test_empty_products_rejected() {
        let mut catalog = builtin_catalog().unwrap();
        catalog.products.clear();
        assert!(validate_catalog(&catalog).is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(parse_catalog_str("{ not json").is_err());
    }
}
