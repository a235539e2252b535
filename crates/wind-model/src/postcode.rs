//! Postcode normalization and hierarchical keys.
//!
//! Every lookup in the workspace is keyed by a normalized postcode: uppercase
//! ASCII letters and digits only. Two refinement levels exist:
//!
//! - **full key**: the entire normalized postcode (`SW1A1AA`)
//! - **sector key**: the full key without its inward code when the last three
//!   characters look like one (`digit, letter, letter`), e.g. `SW1A`
//!
//! All functions here are total: garbage input yields an empty string.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static UK_POSTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z]{1,2}\d[A-Z\d]?\s*\d[A-Z]{2}$").expect("valid postcode regex")
});

/// Uppercases and drops every character outside `[A-Z0-9]`.
pub fn normalize_postcode(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Returns the sector key of a postcode.
///
/// The trailing inward code is removed only when the normalized value is
/// longer than three characters and ends with `digit, letter, letter`.
///
/// Only one inward code is removed per call, so the result is not always a
/// fixed point: `A1AA1AA` gives `A1AA`, whose own sector is `A`.
pub fn postcode_sector(raw: &str) -> String {
    let normalized = normalize_postcode(raw);
    if has_inward_code(&normalized) {
        normalized[..normalized.len() - 3].to_string()
    } else {
        normalized
    }
}

/// Formats a postcode for display with a single space before the inward code.
pub fn format_postcode(raw: &str) -> String {
    let normalized = normalize_postcode(raw);
    if normalized.len() <= 3 {
        return normalized;
    }
    let split = normalized.len() - 3;
    format!("{} {}", &normalized[..split], &normalized[split..])
}

/// Checks the usual UK postcode shape (`SW4 6QD`, `EC1A1BB`).
///
/// Lookups never require this; it only flags suspicious input.
pub fn is_valid_uk_postcode(raw: &str) -> bool {
    UK_POSTCODE.is_match(raw.trim())
}

fn has_inward_code(normalized: &str) -> bool {
    let bytes = normalized.as_bytes();
    if bytes.len() <= 3 {
        return false;
    }
    let tail = &bytes[bytes.len() - 3..];
    tail[0].is_ascii_digit() && tail[1].is_ascii_alphabetic() && tail[2].is_ascii_alphabetic()
}

/// A normalized postcode key.
///
/// Construction always normalizes, so a `PostcodeKey` only ever contains
/// `[A-Z0-9]`. The key may be empty when the input held no usable characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostcodeKey(String);

impl PostcodeKey {
    /// Full key of an arbitrary postcode text.
    pub fn full(raw: &str) -> Self {
        Self(normalize_postcode(raw))
    }

    /// Sector key of an arbitrary postcode text.
    pub fn sector(raw: &str) -> Self {
        Self(postcode_sector(raw))
    }

    /// Sector key derived from this key.
    #[must_use]
    pub fn to_sector(&self) -> Self {
        Self::sector(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops the last character. Returns `false` once the key is empty.
    pub fn shorten(&mut self) -> bool {
        self.0.pop().is_some()
    }

    /// True if `self` equals `other` or is a leading part of it.
    pub fn is_prefix_of(&self, other: &PostcodeKey) -> bool {
        other.0.starts_with(&self.0)
    }

    /// Display form with the inward code separated.
    pub fn formatted(&self) -> String {
        format_postcode(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PostcodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for PostcodeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_and_uppercases() {
        assert_eq!(normalize_postcode(" sw1a 1aa "), "SW1A1AA");
        assert_eq!(normalize_postcode("da11-9au"), "DA119AU");
        assert_eq!(normalize_postcode("!!"), "");
        assert_eq!(normalize_postcode(""), "");
    }

    #[test]
    fn normalize_drops_non_ascii_letters() {
        assert_eq!(normalize_postcode("ÉC1A 1BB"), "C1A1BB");
    }

    #[test]
    fn sector_removes_inward_code() {
        assert_eq!(postcode_sector("SW1A 1AA"), "SW1A");
        assert_eq!(postcode_sector("DA11 9AU"), "DA11");
        assert_eq!(postcode_sector("M1 1AE"), "M1");
    }

    #[test]
    fn sector_keeps_values_without_inward_code() {
        assert_eq!(postcode_sector("SW1A"), "SW1A");
        assert_eq!(postcode_sector("1AA"), "1AA");
        assert_eq!(postcode_sector("SW1A1A1"), "SW1A1A1");
        assert_eq!(postcode_sector(""), "");
    }

    #[test]
    fn sector_strips_one_inward_code_per_call() {
        assert_eq!(postcode_sector("A1AA1AA"), "A1AA");
        assert_eq!(postcode_sector("A1AA"), "A");
        assert_eq!(postcode_sector("A"), "A");
        assert_eq!(PostcodeKey::sector("A1AA 1AA").as_str(), "A1AA");
    }

    #[test]
    fn format_inserts_single_space() {
        assert_eq!(format_postcode("SW1A1AA"), "SW1A 1AA");
        assert_eq!(format_postcode("sw1a   1aa"), "SW1A 1AA");
        assert_eq!(format_postcode("AB1"), "AB1");
        assert_eq!(format_postcode(""), "");
    }

    #[test]
    fn uk_shape_check() {
        assert!(is_valid_uk_postcode("SW4 6QD"));
        assert!(is_valid_uk_postcode(" ec1a1bb "));
        assert!(is_valid_uk_postcode("M1 1AE"));
        assert!(!is_valid_uk_postcode("SW4"));
        assert!(!is_valid_uk_postcode("12345"));
    }

    #[test]
    fn key_shortens_to_empty() {
        let mut key = PostcodeKey::full("AB");
        assert!(key.shorten());
        assert_eq!(key.as_str(), "A");
        assert!(key.shorten());
        assert!(key.is_empty());
        assert!(!key.shorten());
    }

    #[test]
    fn key_prefix_relation() {
        let area = PostcodeKey::full("SW1");
        let full = PostcodeKey::full("SW1A 1AA");
        assert!(area.is_prefix_of(&full));
        assert!(full.is_prefix_of(&full));
        assert!(!full.is_prefix_of(&area));
        assert_eq!(full.to_sector().as_str(), "SW1A");
        assert_eq!(full.formatted(), "SW1A 1AA");
    }
}
