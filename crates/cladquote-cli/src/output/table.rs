use cladquote_core::model::MeasurementRecord;
use cladquote_core::pricing::QuoteResult;
use std::fmt::Write;

/// Render extracted measurements as a readable table. Fields the report
/// never yielded are shown as "-".
pub fn format_measurements(rec: &MeasurementRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Property");
    text_row(&mut out, "Address", rec.property_address.as_deref());
    text_row(&mut out, "Property ID", rec.property_id.as_deref());
    text_row(&mut out, "Customer", rec.customer_name.as_deref());
    let _ = writeln!(out);

    let _ = writeln!(out, "Siding");
    num_row(&mut out, "Squares (zero waste)", rec.siding_squares_0_waste, "sq");
    num_row(&mut out, "Squares (+10% waste)", rec.siding_squares_10_waste, "sq");
    num_row(&mut out, "Squares (+18% waste)", rec.siding_squares_18_waste, "sq");
    num_row(&mut out, "Facades", rec.facades_area_sqft, "ft²");
    num_row(&mut out, "Openings", rec.openings_sqft, "ft²");
    let _ = writeln!(out);

    let _ = writeln!(out, "Corners");
    count_row(&mut out, "Inside corners", rec.inside_corners_count);
    num_row(&mut out, "Inside corner length", rec.inside_corners_length, "lf");
    count_row(&mut out, "Outside corners", rec.outside_corners_count);
    num_row(&mut out, "Outside corner length", rec.outside_corners_length, "lf");
    let _ = writeln!(out);

    let _ = writeln!(out, "Starter");
    num_row(&mut out, "Level starter", rec.level_starter_length, "lf");
    num_row(&mut out, "Sloped starter", rec.sloped_starter_length, "lf");
    num_row(&mut out, "Vertical starter", rec.vertical_starter_length, "lf");
    let _ = writeln!(out);

    let _ = writeln!(out, "Roofline");
    num_row(&mut out, "Eaves fascia", rec.eaves_fascia_length, "lf");
    num_row(&mut out, "Level frieze", rec.level_frieze_length, "lf");
    num_row(&mut out, "Rakes fascia", rec.rakes_fascia_length, "lf");
    num_row(&mut out, "Sloped frieze", rec.sloped_frieze_length, "lf");
    num_row(&mut out, "Gutters", rec.gutter_total_length, "lf");
    let _ = writeln!(out);

    let _ = writeln!(out, "Soffit / porch");
    num_row(&mut out, "Soffit total", rec.soffit_total_sqft, "ft²");
    num_row(&mut out, "Porch ceiling", rec.porch_ceiling_sqft, "ft²");
    num_row(&mut out, "Porch beam", rec.porch_beam_lf, "lf");

    out
}

fn text_row(out: &mut String, label: &str, value: Option<&str>) {
    let _ = writeln!(out, "  {:<22} {}", label, value.unwrap_or("-"));
}

fn num_row(out: &mut String, label: &str, value: Option<f64>, unit: &str) {
    match value {
        Some(v) => {
            let _ = writeln!(out, "  {:<22} {} {}", label, v, unit);
        }
        None => {
            let _ = writeln!(out, "  {:<22} -", label);
        }
    }
}

fn count_row(out: &mut String, label: &str, value: Option<u32>) {
    match value {
        Some(v) => {
            let _ = writeln!(out, "  {:<22} {}", label, v);
        }
        None => {
            let _ = writeln!(out, "  {:<22} -", label);
        }
    }
}

pub fn print_quote(result: &QuoteResult, show_items: bool) {
    if let Some(ref address) = result.property_address {
        println!("Estimate for {}", address);
    } else {
        println!("Estimate");
    }
    if let Some(ref id) = result.property_id {
        println!("Property ID: {}", id);
    }
    println!();

    println!(
        "Siding: {} / {} / {} (G8 trim: {})",
        result.siding_product_name, result.siding_profile, result.siding_color, result.g8_color
    );
    println!();

    if show_items {
        let mut current_category = "";
        for item in &result.line_items {
            if item.category != current_category {
                if !current_category.is_empty() {
                    println!();
                }
                println!("{}:", item.category);
                current_category = &item.category;
            }
            println!(
                "  {:<34} {:>8} {:<5} @ ${:<9} ${}",
                item.description, item.quantity, item.unit, item.unit_price, item.total
            );
        }
        println!();
    }

    println!("Package totals:");
    subtotal_row("Siding package", result.siding_package_total);
    subtotal_row("Soffit/fascia package", result.soffit_fascia_package_total);
    subtotal_row("Gutters", result.gutters_total);
    subtotal_row("Wraps", result.wraps_total);
    subtotal_row("Other", result.other_total);
    println!();

    subtotal_row("Grand total", result.grand_total);
    subtotal_row("Deposit (50%)", result.deposit_50);
    subtotal_row("Balance on completion", result.balance_50);
}

fn subtotal_row(label: &str, amount: rust_decimal::Decimal) {
    println!("  {:<24} ${}", label, amount);
}
