use crate::error::QuoteError;
use crate::pricing::schema::{LineItem, PriceCatalog, QuoteInput, QuoteResult};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Calculate a complete quote from measurements, selections, and a catalog.
///
/// A deterministic fold: every line is quantity x unit price, subtotaled
/// per category. Total over any record — absent measurements just produce
/// fewer lines.
pub fn calculate_quote(
    input: &QuoteInput,
    catalog: &PriceCatalog,
) -> Result<QuoteResult, QuoteError> {
    let product = catalog.products.get(&input.siding_product).ok_or_else(|| {
        QuoteError::UnsupportedInput(format!(
            "unknown siding product '{}'. Available: {}",
            input.siding_product,
            catalog.products.keys().cloned().collect::<Vec<_>>().join(", ")
        ))
    })?;

    let mut items: Vec<LineItem> = Vec::new();
    let m = input.measurements.as_ref();

    // ------------------------------------------------------------------
    // Siding package
    // ------------------------------------------------------------------
    let mut siding_total = Decimal::ZERO;

    // Waste-adjusted squares: explicit override, else the report tier
    // matching the selected waste percentage.
    let squares = input.siding_squares.or_else(|| {
        m.and_then(|m| {
            if input.waste_percent <= 10 {
                m.siding_squares_10_waste
            } else {
                m.siding_squares_18_waste
            }
        })
    });
    let squares = squares.unwrap_or(0.0);

    if squares > 0.0 {
        add_line(
            &mut items,
            &mut siding_total,
            "Siding",
            product.name.clone(),
            squares,
            "sq",
            product.price,
        );

        if input.include_fan_fold {
            let price = section_price(&catalog.labor, "fan_fold", "labor")?;
            add_line(
                &mut items,
                &mut siding_total,
                "Siding",
                "Fan Fold Insulation".into(),
                squares,
                "sq",
                price,
            );
        }

        if input.include_remove_dispose {
            let price = section_price(&catalog.labor, "remove_dispose", "labor")?;
            add_line(
                &mut items,
                &mut siding_total,
                "Siding",
                "Remove/Dispose Old Siding".into(),
                squares,
                "sq",
                price,
            );
        }

        if input.include_fullback {
            let price = section_price(&catalog.labor, "fullback_insulation", "labor")?;
            add_line(
                &mut items,
                &mut siding_total,
                "Siding",
                "Fullback Insulation".into(),
                squares,
                "sq",
                price,
            );
        }
    }

    // Corners: manual entry wins over report values.
    let inside_count = if input.inside_corners > 0 {
        input.inside_corners
    } else {
        m.and_then(|m| m.inside_corners_count).unwrap_or(0)
    };
    let outside_count = if input.outside_corners > 0 {
        input.outside_corners
    } else {
        m.and_then(|m| m.outside_corners_count).unwrap_or(0)
    };

    if inside_count > 0 {
        let price = section_price(&catalog.corners, "inside", "corners")?;
        add_line(
            &mut items,
            &mut siding_total,
            "Siding",
            "Inside Corners".into(),
            inside_count as f64,
            "ea",
            price,
        );
    }
    if outside_count > 0 {
        let price = section_price(&catalog.corners, "outside", "corners")?;
        add_line(
            &mut items,
            &mut siding_total,
            "Siding",
            "Outside Corners".into(),
            outside_count as f64,
            "ea",
            price,
        );
    }

    if input.dormers_count > 0 {
        let price = section_price(&catalog.labor, "dormers_flashing", "labor")?;
        add_line(
            &mut items,
            &mut siding_total,
            "Siding",
            "Dormers/Flashing".into(),
            input.dormers_count as f64,
            "ea",
            price,
        );
    }

    // ------------------------------------------------------------------
    // Soffit & fascia package
    // ------------------------------------------------------------------
    let mut soffit_total = Decimal::ZERO;

    if input.soffit_lf > 0.0 {
        let (key, label) = if input.soffit_width_over_16 {
            ("soffit_over_16", "Soffit (over 16\")")
        } else {
            ("soffit_under_16", "Soffit (under 16\")")
        };
        let price = section_price(&catalog.soffit_fascia, key, "soffit_fascia")?;
        add_line(
            &mut items,
            &mut soffit_total,
            "Soffit/Fascia",
            label.into(),
            input.soffit_lf,
            "LF",
            price,
        );
    }

    if input.fascia_frieze_lf > 0.0 {
        let price = section_price(&catalog.soffit_fascia, "fascia_frieze", "soffit_fascia")?;
        add_line(
            &mut items,
            &mut soffit_total,
            "Soffit/Fascia",
            "Fascia/Frieze".into(),
            input.fascia_frieze_lf,
            "LF",
            price,
        );
    }

    if input.porch_beam_lf > 0.0 {
        let price = section_price(&catalog.soffit_fascia, "porch_beam", "soffit_fascia")?;
        add_line(
            &mut items,
            &mut soffit_total,
            "Soffit/Fascia",
            "Porch Beam".into(),
            input.porch_beam_lf,
            "LF",
            price,
        );
    }

    if input.porch_ceiling_count > 0 {
        let price = section_price(&catalog.soffit_fascia, "porch_ceiling", "soffit_fascia")?;
        add_line(
            &mut items,
            &mut soffit_total,
            "Soffit/Fascia",
            "Porch Ceiling".into(),
            input.porch_ceiling_count as f64,
            "ea",
            price,
        );
    }

    if input.bird_box_count > 0 {
        let price = section_price(&catalog.soffit_fascia, "bird_box", "soffit_fascia")?;
        add_line(
            &mut items,
            &mut soffit_total,
            "Soffit/Fascia",
            "Bird Box".into(),
            input.bird_box_count as f64,
            "ea",
            price,
        );
    }

    if input.extra_bend_lf > 0.0 {
        let price = section_price(&catalog.soffit_fascia, "extra_bend_crown", "soffit_fascia")?;
        add_line(
            &mut items,
            &mut soffit_total,
            "Soffit/Fascia",
            "Extra Bend/Crown".into(),
            input.extra_bend_lf,
            "LF",
            price,
        );
    }

    if input.remove_soffit_lf > 0.0 {
        let price = section_price(&catalog.soffit_fascia, "remove_soffit", "soffit_fascia")?;
        add_line(
            &mut items,
            &mut soffit_total,
            "Soffit/Fascia",
            "Remove Soffit/Fascia".into(),
            input.remove_soffit_lf,
            "LF",
            price,
        );
    }

    // ------------------------------------------------------------------
    // Gutters
    // ------------------------------------------------------------------
    let mut gutters_total = Decimal::ZERO;

    if input.new_gutter_lf > 0.0 {
        let price = section_price(&catalog.gutters, "new_gutters", "gutters")?;
        add_line(
            &mut items,
            &mut gutters_total,
            "Gutters",
            "New Gutters".into(),
            input.new_gutter_lf,
            "LF",
            price,
        );
    }

    if input.rehang_gutter_lf > 0.0 {
        let take_down = section_price(&catalog.gutters, "take_down", "gutters")?;
        let put_back = section_price(&catalog.gutters, "put_back_up", "gutters")?;
        add_line(
            &mut items,
            &mut gutters_total,
            "Gutters",
            "Remove/Rehang Gutters".into(),
            input.rehang_gutter_lf,
            "LF",
            take_down + put_back,
        );
    }

    // ------------------------------------------------------------------
    // Wraps
    // ------------------------------------------------------------------
    let mut wraps_total = Decimal::ZERO;
    let material = if input.wraps_are_metal { "metal" } else { "wood" };
    let material_label = if input.wraps_are_metal { "Metal" } else { "Wood" };

    let wrap_items: [(&str, u32, String); 3] = [
        (
            "window",
            input.window_wrap_count,
            format!("Window Wrap ({})", material_label),
        ),
        (
            "door",
            input.door_wrap_count,
            format!("Door Wrap ({})", material_label),
        ),
        (
            "transom",
            input.transom_wrap_count,
            format!("Transom Wrap ({})", material_label),
        ),
    ];
    for (kind, count, description) in wrap_items {
        if count > 0 {
            let key = format!("{}_{}", kind, material);
            let price = section_price(&catalog.wraps, &key, "wraps")?;
            add_line(
                &mut items,
                &mut wraps_total,
                "Wraps",
                description,
                count as f64,
                "ea",
                price,
            );
        }
    }

    if input.garage_door_wrap_count > 0 {
        let price = section_price(&catalog.wraps, "garage_door", "wraps")?;
        add_line(
            &mut items,
            &mut wraps_total,
            "Wraps",
            "Garage Door Wrap".into(),
            input.garage_door_wrap_count as f64,
            "ea",
            price,
        );
    }

    // ------------------------------------------------------------------
    // Other: accessories, misc, cleanup
    // ------------------------------------------------------------------
    let mut other_total = Decimal::ZERO;

    let accessory_items: [(&str, u32, &str, &str); 6] = [
        ("vent", input.vent_count, "Vent", "ea"),
        ("light_panel", input.light_panel_count, "Light Panel", "ea"),
        ("receptacle", input.receptacle_count, "Receptacle", "ea"),
        ("faucet_bib", input.faucet_count, "Faucet/Bib", "ea"),
        ("dryer_vent", input.dryer_vent_count, "Dryer Vent", "ea"),
        ("shutters", input.shutter_pairs, "Shutters", "pair"),
    ];
    for (key, count, description, unit) in accessory_items {
        if count > 0 {
            let price = section_price(&catalog.accessories, key, "accessories")?;
            add_line(
                &mut items,
                &mut other_total,
                "Accessories",
                description.into(),
                count as f64,
                unit,
                price,
            );
        }
    }

    if input.rotten_wood_lf > 0.0 {
        let price = section_price(&catalog.other, "rotten_wood", "other")?;
        add_line(
            &mut items,
            &mut other_total,
            "Other",
            "Rotten Wood Repair".into(),
            input.rotten_wood_lf,
            "LF",
            price,
        );
    }
    if input.osb_sheets > 0 {
        let price = section_price(&catalog.other, "osb_sheet", "other")?;
        add_line(
            &mut items,
            &mut other_total,
            "Other",
            "OSB Sheeting".into(),
            input.osb_sheets as f64,
            "sheet",
            price,
        );
    }
    if input.house_wrap_rolls > 0 {
        let price = section_price(&catalog.other, "house_wrap", "other")?;
        add_line(
            &mut items,
            &mut other_total,
            "Other",
            "House Wrap".into(),
            input.house_wrap_rolls as f64,
            "roll",
            price,
        );
    }
    if input.fur_out_count > 0 {
        let price = section_price(&catalog.other, "fur_out", "other")?;
        add_line(
            &mut items,
            &mut other_total,
            "Other",
            "Fur Out".into(),
            input.fur_out_count as f64,
            "ea",
            price,
        );
    }

    // Cleanup is always quoted.
    let (cleanup_key, cleanup_label) = if input.cleanup_type == "full" {
        ("cleanup_full", "Cleanup (Full)")
    } else {
        ("cleanup_standard", "Cleanup (Standard)")
    };
    let cleanup_price = section_price(&catalog.other, cleanup_key, "other")?;
    add_line(
        &mut items,
        &mut other_total,
        "Other",
        cleanup_label.into(),
        1.0,
        "ea",
        cleanup_price,
    );

    if input.extra_labor > Decimal::ZERO {
        add_line(
            &mut items,
            &mut other_total,
            "Other",
            "Additional Labor/Fuel".into(),
            1.0,
            "$",
            input.extra_labor,
        );
    }

    // ------------------------------------------------------------------
    // Totals
    // ------------------------------------------------------------------
    let grand_total =
        (siding_total + soffit_total + gutters_total + wraps_total + other_total).round_dp(2);
    let deposit_50 = (grand_total / Decimal::TWO).round_dp(2);
    let balance_50 = grand_total - deposit_50;

    Ok(QuoteResult {
        property_address: m.and_then(|m| m.property_address.clone()),
        property_id: m.and_then(|m| m.property_id.clone()),
        siding_product_name: product.name.clone(),
        siding_profile: input.siding_profile.clone(),
        siding_color: input.siding_color.clone(),
        g8_color: input.g8_color.clone(),
        line_items: items,
        siding_package_total: siding_total,
        soffit_fascia_package_total: soffit_total,
        gutters_total,
        wraps_total,
        other_total,
        grand_total,
        deposit_50,
        balance_50,
    })
}

fn add_line(
    items: &mut Vec<LineItem>,
    subtotal: &mut Decimal,
    category: &str,
    description: String,
    quantity: f64,
    unit: &str,
    unit_price: Decimal,
) {
    let total = (to_decimal(quantity) * unit_price).round_dp(2);
    *subtotal += total;
    items.push(LineItem {
        category: category.to_string(),
        description,
        quantity,
        unit: unit.to_string(),
        unit_price,
        total,
    });
}

fn to_decimal(q: f64) -> Decimal {
    // Quantities come from the measurement record, which only holds finite
    // non-negative values.
    Decimal::from_f64_retain(q).unwrap_or_default()
}

fn section_price(
    section: &BTreeMap<String, Decimal>,
    key: &str,
    section_name: &str,
) -> Result<Decimal, QuoteError> {
    section.get(key).copied().ok_or_else(|| {
        QuoteError::CatalogInvalid(format!(
            "section '{}' is missing '{}'",
            section_name, key
        ))
    })
}
