//! Engineering shorthand for resistor values (`330`, `4.7`, `4K7`, `1M`).
//!
//! Formatting is two-phase: the full digit string is assembled with the unit
//! letter at a fixed offset from the end, then `' '`/`'0'` are trimmed from
//! the two ends only. Interior zeros survive (`1050 -> "1K05"`).

use std::sync::LazyLock;

use regex::Regex;

static SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<int>\d*)(?:\.(?<frac>\d+))?(?<unit>[RrKkM])(?<tail>\d*)$")
        .unwrap_or_else(|e| panic!("invalid shorthand regex: {e}"))
});

/// Render an ohm value the way it is printed on schematics.
pub fn format_resistance(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    if value < 1_000.0 {
        if value.fract() == 0.0 {
            return format!("{value:.0}");
        }
        let text = format!("{value:.2}");
        return text.trim_end_matches('0').trim_end_matches('.').to_string();
    }

    let (unit, offset) = if value < 1_000_000.0 { ('K', 3) } else { ('M', 6) };
    let digits = format!("{:.0}", value.trunc());
    let split = digits.len() - offset;

    let mut text = String::with_capacity(digits.len() + 1);
    text.push_str(&digits[..split]);
    text.push(unit);
    text.push_str(&digits[split..]);

    text.trim_matches(|c| c == ' ' || c == '0').to_string()
}

/// Read a plain number (`4700`, `4.7e3`) or shorthand (`4K7`, `R47`).
pub fn parse_resistance(text: &str) -> Option<f64> {
    let text = text.trim();
    text.parse::<f64>().ok().or_else(|| parse_shorthand(text))
}

/// Read a value written in shorthand (`4K7`, `2R2`, `R47`, `1M`, `4.7k`).
///
/// The digits are rebuilt into a single decimal literal (`4K02 -> 402e1`) so
/// the result is the correctly rounded value, never an inexact product.
pub fn parse_shorthand(text: &str) -> Option<f64> {
    let caps = SHORTHAND.captures(text.trim())?;
    let int = caps.name("int").map_or("", |m| m.as_str());
    let frac = caps.name("frac").map_or("", |m| m.as_str());
    let tail = caps.name("tail").map_or("", |m| m.as_str());

    // `4.7K7` is ambiguous; `.5K` and a bare `K` have no integer part to anchor on.
    if !frac.is_empty() && !tail.is_empty() {
        return None;
    }
    if int.is_empty() && (tail.is_empty() || !frac.is_empty()) {
        return None;
    }

    let unit_exp: i32 = match caps.name("unit")?.as_str() {
        "R" | "r" => 0,
        "K" | "k" => 3,
        "M" => 6,
        _ => return None,
    };

    let decimals = if frac.is_empty() { tail } else { frac };
    let exp = unit_exp - i32::try_from(decimals.len()).ok()?;
    let int = if int.is_empty() { "0" } else { int };
    format!("{int}{decimals}e{exp}").parse().ok()
}
