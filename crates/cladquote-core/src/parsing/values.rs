use regex::Regex;
use std::sync::LazyLock;

static LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\d+)'?\s*(\d+)?"?"#).unwrap());

static SQFT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d,]+)\s*(?:ft²|sq)").unwrap());

static SQUARES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)([½¼¾⅓⅔])?").unwrap());

/// Round to one decimal place.
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// True for the placeholder dashes reports use for missing cells.
fn is_placeholder(s: &str) -> bool {
    matches!(s, "-" | "–" | "—")
}

/// Parse a feet-inches length like `134' 1"` or `103' 8"` to decimal feet,
/// rounded to one decimal place. A bare `134'` (or `134`) is whole feet.
///
/// Total over all inputs: empty strings, placeholder dashes, and strings
/// with no leading digits yield `None`.
pub fn parse_length(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() || is_placeholder(s) {
        return None;
    }
    // Normalize typographic quotes some renderers emit.
    let normalized = s.replace('\u{2019}', "'").replace('\u{201d}', "\"");

    let caps = LENGTH_RE.captures(&normalized)?;
    let feet: f64 = caps.get(1)?.as_str().parse().ok()?;
    let inches: f64 = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0);
    Some(round1(feet + inches / 12.0))
}

/// Parse an area like `1703 ft²`, `2,054 ft²`, or `88 sq` to square feet.
pub fn parse_sqft(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() || is_placeholder(s) {
        return None;
    }
    let caps = SQFT_RE.captures(s)?;
    caps.get(1)?.as_str().replace(',', "").parse().ok()
}

/// Parse a siding "squares" count like `24½` or `22¾` (1 square = 100 sqft,
/// quarter-unit granularity in these reports).
///
/// An unrecognized suffix contributes no fractional part; a bare integer is
/// returned exactly.
pub fn parse_squares(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() || is_placeholder(s) {
        return None;
    }
    let caps = SQUARES_RE.captures(s)?;
    let whole: f64 = caps.get(1)?.as_str().parse().ok()?;
    let frac = match caps.get(2).map(|m| m.as_str()) {
        Some("½") => 0.5,
        Some("¼") => 0.25,
        Some("¾") => 0.75,
        Some("⅓") => 0.33,
        Some("⅔") => 0.67,
        _ => 0.0,
    };
    Some(whole + frac)
}
