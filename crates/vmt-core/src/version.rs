//! Version and service-pack extraction.
//!
//! Versions live on one fractional scale across the whole engine: 4-digit
//! years (2019.0), R2-adjusted years (2008.1), and short/dotted releases
//! (7.0, 8.6). R2 releases sort strictly after their base year under range
//! checks, while special-rule lookups truncate back onto the base integer
//! key (see `vmt_rules::FamilyRules::special_rule_for`).

use once_cell::sync::Lazy;
use regex::Regex;

static RE_ARCH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(32|64)[-\s]?bit\b").unwrap());
static RE_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").unwrap());

/// 4-digit year token starting with 20.
static RE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"20\d{2}").unwrap());

/// First version-looking token: year, dotted release, or 1–2 digit integer.
static RE_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(20\d{2}|\d{1,2}\.\d+|\d{1,2})\b").unwrap());

/// Service-pack marker: "sp1", "sp 3".
static RE_SERVICE_PACK: Lazy<Regex> = Lazy::new(|| Regex::new(r"sp\s?(\d+)").unwrap());

/// Extract a numeric version from a guest-OS string.
///
/// Robust to unnormalized input: architecture tokens and bracketed content
/// are stripped again here, so "Ubuntu 22.04 (64-bit)" does not yield 64.
/// R2 releases return `year + 0.1`, making them strictly newer than the base
/// year under range comparisons. Returns `None` when no recognizable numeral
/// is present.
pub fn extract_version(s: &str) -> Option<f64> {
    let s = s.to_lowercase();
    let s = RE_ARCH.replace_all(&s, "");
    let s = RE_BRACKETS.replace_all(&s, "");

    if s.contains("r2") {
        if let Some(year) = RE_YEAR.find(&s) {
            // Parse cannot fail: the match is exactly four digits.
            let year: f64 = year.as_str().parse().unwrap_or(0.0);
            return Some(year + 0.1);
        }
    }

    RE_VERSION
        .find(&s)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Extract an integer service-pack level ("SP1", "sp 3"), if present.
pub fn extract_service_pack(s: &str) -> Option<u32> {
    RE_SERVICE_PACK
        .captures(&s.to_lowercase())
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
}
