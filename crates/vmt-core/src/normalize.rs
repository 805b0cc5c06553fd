//! Guest-OS string normalization.
//!
//! Inventory exports carry a lot of noise around the OS name: architecture
//! markers, bracketed build notes, marketing edition qualifiers. Normalization
//! strips those in a fixed order so family resolution and version extraction
//! see a predictable string.
//!
//! The 32-bit hard-block check in the engine runs against the *raw*
//! lowercased string before this function is applied, since normalization
//! removes the very token that check looks for.

use once_cell::sync::Lazy;
use regex::Regex;

/// Architecture markers: "32-bit", "64 bit", "32bit".
static RE_ARCH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(32|64)[-\s]?bit\b").unwrap());

/// Bracketed parenthetical content, non-greedy.
static RE_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").unwrap());

/// Marketing/edition qualifiers stripped as plain substrings.
///
/// Deliberately not word-bounded, matching the shipped behavior: "standard"
/// inside a longer word would also be removed. Leaky, but rule evaluation
/// depends only on family keywords and digits, which survive.
const NOISE_PHRASES: &[&str] = &["or later", "datacenter", "standard", "enterprise"];

/// Lowercase a guest-OS string and strip noise tokens.
///
/// Order-sensitive: lowercase, then architecture markers, then bracketed
/// content, then noise phrases. Idempotent; empty input yields an empty
/// string.
pub fn normalize(raw: &str) -> String {
    let mut s = raw.to_lowercase();
    s = RE_ARCH.replace_all(&s, "").into_owned();
    s = RE_BRACKETS.replace_all(&s, "").into_owned();
    for phrase in NOISE_PHRASES {
        s = s.replace(phrase, "");
    }
    s
}
