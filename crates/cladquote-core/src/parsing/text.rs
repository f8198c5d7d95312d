use crate::model::{fill, fill_count, fill_text, MeasurementRecord};
use crate::parsing::values::parse_squares;
use regex::Regex;
use std::sync::LazyLock;

/// Lines containing the report title are never the street address, even
/// when they start with a house number.
const REPORT_TITLE_WORD: &str = "Complete";

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d+ [\w ]+(?i:Drive|Dr|Street|St|Road|Rd|Avenue|Ave|Lane|Ln|Way|Circle|Cir|Court|Ct|Boulevard|Blvd), ?[\w ]+, ?[A-Z]{2})",
    )
    .unwrap()
});

static ADDRESS_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\s+\w+.*(?i:Drive|Dr|Street|St|Road|Rd|Avenue|Ave|Lane|Ln|Way)").unwrap()
});

static CUSTOMER_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"MODEL ID:\s*\d+\s*\n([A-Z][A-Z\s]+)\n").unwrap());

static PROPERTY_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)PROPERTY\s*ID[:\s]*(\d+)").unwrap());

// Combined three-tier pattern over the waste totals section. Capturing all
// three tiers in one match guarantees they come from the same section.
static WASTE_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?si)\+\s*Openings\s*<\s*33ft².*?Zero\s*Waste\s*[\d,]+\s*ft²\s*(\d+[½¼¾⅓⅔]?).*?\+10%\s*[\d,]+\s*ft²\s*(\d+[½¼¾⅓⅔]?).*?\+18%\s*[\d,]+\s*ft²\s*(\d+[½¼¾⅓⅔]?)",
    )
    .unwrap()
});

// Single-tier fallbacks for reports where the combined section is absent
// or reordered. Each is optional and independently settable.
static ZERO_WASTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Zero\s*Waste\s*[\d,]+\s*ft²\s*(\d+[½¼¾⅓⅔]?)").unwrap());
static TEN_WASTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+10%\s*[\d,]+\s*ft²\s*(\d+[½¼¾⅓⅔]?)").unwrap());
static EIGHTEEN_WASTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+18%\s*[\d,]+\s*ft²\s*(\d+[½¼¾⅓⅔]?)").unwrap());

static INSIDE_QTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Inside\s*Qty\s*(\d+)").unwrap());
static OUTSIDE_QTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Outside\s*Qty\s*(\d+)").unwrap());

// Soffit breakdown rows as they appear in flowed text:
// "5 eave 76\" 13' 11\" 88 ft²" (count, eave/rake, depth, length, area).
static SOFFIT_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\d+\s+(?:eave|rake)\s+(\d+)"\s+[\d'\s"]+\s+(\d+)\s*ft²"#).unwrap()
});

/// Recover fields from the whole-document text buffer.
///
/// Runs once, after the table pass. Only fields still unset are written;
/// a pattern that fails to match simply leaves its field alone.
pub fn recover_from_text(text: &str, rec: &mut MeasurementRecord) {
    recover_address(text, rec);

    if let Some(caps) = CUSTOMER_NAME_RE.captures(text) {
        let name = title_case(caps[1].trim());
        fill_text(&mut rec.customer_name, Some(&name));
    }

    if let Some(caps) = PROPERTY_ID_RE.captures(text) {
        fill_text(&mut rec.property_id, Some(&caps[1]));
    }

    recover_siding_squares(text, rec);

    if let Some(caps) = INSIDE_QTY_RE.captures(text) {
        fill_count(&mut rec.inside_corners_count, caps[1].parse().ok());
    }
    if let Some(caps) = OUTSIDE_QTY_RE.captures(text) {
        fill_count(&mut rec.outside_corners_count, caps[1].parse().ok());
    }

    recover_porch_ceiling(text, rec);
}

/// Prefer the summary-page address format ("319 Walden Station Drive,
/// Macon, GA"); fall back to scanning the first lines for a house number
/// followed by a street-type keyword.
fn recover_address(text: &str, rec: &mut MeasurementRecord) {
    if let Some(caps) = ADDRESS_RE.captures(text) {
        fill_text(&mut rec.property_address, Some(caps[1].trim()));
        return;
    }

    // Blank lines don't count against the three-line budget.
    let lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    for line in lines.take(3) {
        if ADDRESS_LINE_RE.is_match(line) && !line.contains(REPORT_TITLE_WORD) {
            fill_text(&mut rec.property_address, Some(line));
            break;
        }
    }
}

/// Three-tier waste squares: the combined section pattern takes precedence;
/// the single-anchor fallbacks only run when it finds nothing.
fn recover_siding_squares(text: &str, rec: &mut MeasurementRecord) {
    if let Some(caps) = WASTE_SECTION_RE.captures(text) {
        fill(&mut rec.siding_squares_0_waste, parse_squares(&caps[1]));
        fill(&mut rec.siding_squares_10_waste, parse_squares(&caps[2]));
        fill(&mut rec.siding_squares_18_waste, parse_squares(&caps[3]));
        return;
    }

    if let Some(caps) = ZERO_WASTE_RE.captures(text) {
        fill(&mut rec.siding_squares_0_waste, parse_squares(&caps[1]));
    }
    if let Some(caps) = TEN_WASTE_RE.captures(text) {
        fill(&mut rec.siding_squares_10_waste, parse_squares(&caps[1]));
    }
    if let Some(caps) = EIGHTEEN_WASTE_RE.captures(text) {
        fill(&mut rec.siding_squares_18_waste, parse_squares(&caps[1]));
    }
}

/// Text-only porch ceiling fallback over row-shaped fragments. Applies only
/// when the table pass found nothing, and commits only a positive total.
fn recover_porch_ceiling(text: &str, rec: &mut MeasurementRecord) {
    if rec.porch_ceiling_sqft.is_some() {
        return;
    }

    let mut total = 0.0;
    for caps in SOFFIT_ROW_RE.captures_iter(text) {
        let depth: u32 = match caps[1].parse() {
            Ok(d) => d,
            Err(_) => continue,
        };
        let area: f64 = match caps[2].parse() {
            Ok(a) => a,
            Err(_) => continue,
        };
        if depth > super::tables::PORCH_CEILING_MIN_DEPTH_IN {
            total += area;
        }
    }

    if total > 0.0 {
        rec.porch_ceiling_sqft = Some(total);
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
