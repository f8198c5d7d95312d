use cladquote_core::error::QuoteError;
use cladquote_core::pricing::{self, PriceCatalog};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub fn list() -> Result<(), QuoteError> {
    let catalog = pricing::builtin_catalog()?;

    println!("Siding products in '{}' (v{}):\n", catalog.name, catalog.version);

    let max_name = catalog
        .products
        .values()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(20);

    for (id, product) in &catalog.products {
        println!(
            "  {:<20} {:<width$} ${}/sq installed",
            id,
            product.name,
            product.price,
            width = max_name + 2
        );
    }

    println!();
    println!("Profiles: {}", catalog.profiles.join(", "));
    let waste: Vec<String> = catalog
        .waste_options
        .iter()
        .map(|w| format!("{}%", w))
        .collect();
    println!("Waste options: {}", waste.join(", "));

    Ok(())
}

pub fn explain(catalog_file: Option<PathBuf>) -> Result<(), QuoteError> {
    let catalog = match catalog_file {
        Some(ref path) => pricing::load_catalog(path)?,
        None => pricing::builtin_catalog()?,
    };

    println!("{} (version {})\n", catalog.name, catalog.version);
    if let Some(ref desc) = catalog.description {
        println!("{}\n", desc);
    }

    println!("Siding products (per square, installed):\n");
    for (id, product) in &catalog.products {
        println!("  {:<20} {:<28} ${}", id, product.name, product.price);
    }
    println!();

    print_section("Soffit / fascia", &catalog.soffit_fascia);
    print_section("Corner posts", &catalog.corners);
    print_section("Labor", &catalog.labor);
    print_section("Wraps", &catalog.wraps);
    print_section("Accessories", &catalog.accessories);
    print_section("Gutters", &catalog.gutters);
    print_section("Other", &catalog.other);

    Ok(())
}

fn print_section(title: &str, section: &BTreeMap<String, Decimal>) {
    println!("{}:\n", title);
    let max_key = section.keys().map(|k| k.len()).max().unwrap_or(10);
    for (key, price) in section {
        println!("  {:<width$} ${}", key, price, width = max_key + 2);
    }
    println!();
}

pub fn schema() -> Result<(), QuoteError> {
    print!(
        r#"JSON Catalog Schema
===================

A catalog file defines the unit prices the quote engine uses. When you
run `cladquote quote --catalog <file>`, every line item is priced from
these sections instead of the builtin catalog.

Top-level fields:
  name          (string, required)  Human-readable name of the catalog
  version       (string, required)  Version identifier (e.g., "2025.1")
  description   (string, optional)  What this catalog is for
  products      (object, required)  Map of product id -> {{name, price}}.
                                    Price is per square, installed, as a
                                    string-encoded decimal (e.g., "525").
  profiles      (array, optional)   Panel profile names offered with the
                                    products (e.g., "D-4", "D-5 Dutch Lap")
  waste_options (array, optional)   Allowed waste percentages (e.g., [14, 16, 18])

Priced sections (each an object of item key -> string-encoded decimal):
  soffit_fascia  soffit_over_16, soffit_under_16, fascia_frieze,
                 porch_beam, porch_ceiling, bird_box, extra_bend_crown,
                 remove_soffit
  corners        inside, outside
  labor          fullback_insulation, fan_fold, remove_dispose,
                 dormers_flashing
  wraps          window_wood, window_metal, door_wood, door_metal,
                 transom_wood, transom_metal, garage_door
  accessories    vent, light_panel, receptacle, faucet_bib, dryer_vent,
                 shutters
  gutters        new_gutters, take_down, put_back_up
  other          rotten_wood, osb_sheet, house_wrap, fur_out,
                 cleanup_standard, cleanup_full

All listed item keys are required; `cladquote catalog validate` rejects
a file missing any of them. Extra keys are allowed and ignored.

Example:
{{
  "name": "Site-negotiated pricing",
  "version": "1.0",
  "products": {{
    "carvedwood_044": {{ "name": "Carvedwood 44 (.044)", "price": "510" }}
  }},
  "profiles": ["D-4", "D-5 Dutch Lap"],
  "waste_options": [14, 16, 18],
  "soffit_fascia": {{
    "soffit_over_16": "25",
    "soffit_under_16": "22",
    "fascia_frieze": "14",
    "porch_beam": "16",
    "porch_ceiling": "500",
    "bird_box": "100",
    "extra_bend_crown": "4",
    "remove_soffit": "2"
  }},
  ...
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), QuoteError> {
    let catalog = pricing::load_catalog(file)?;

    println!("Catalog '{}' (v{}) is valid.", catalog.name, catalog.version);
    println!("  Products: {}", catalog.products.len());
    println!(
        "  Priced items: {}",
        catalog.soffit_fascia.len()
            + catalog.corners.len()
            + catalog.labor.len()
            + catalog.wraps.len()
            + catalog.accessories.len()
            + catalog.gutters.len()
            + catalog.other.len()
    );

    let warnings = collect_warnings(&catalog);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

fn collect_warnings(catalog: &PriceCatalog) -> Vec<String> {
    let mut warnings = Vec::new();

    if catalog.profiles.is_empty() {
        warnings.push("no profiles listed; quote output will show the selection as-is".into());
    }
    if catalog.waste_options.is_empty() {
        warnings.push("no waste_options listed; any waste percentage will be accepted".into());
    }
    for (id, product) in &catalog.products {
        if product.price == Decimal::ZERO {
            warnings.push(format!("product '{}' is priced at zero", id));
        }
    }

    warnings
}
