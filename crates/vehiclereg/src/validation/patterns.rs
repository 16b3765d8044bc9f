//! Built-in field format patterns.
//!
//! This module provides the regex patterns that VINs and registration plates
//! must match. Patterns are compiled once on first use and shared for the
//! life of the process.

use std::sync::OnceLock;

use regex::Regex;

use super::rules::VinAlphabet;
use crate::record::PlateFormat;

/// A compiled, fully-anchored field pattern.
#[derive(Debug)]
pub struct FieldPattern {
    /// Name of the pattern for identification.
    pub name: &'static str,

    /// Human readable description of the accepted format.
    pub description: &'static str,

    /// The compiled regex.
    regex: Regex,
}

impl FieldPattern {
    /// Create a new field pattern.
    ///
    /// The pattern is anchored at both ends, so callers pass the bare body.
    ///
    /// # Panics
    ///
    /// Panics if the regex pattern is invalid.
    #[must_use]
    pub fn new(name: &'static str, description: &'static str, pattern: &str) -> Self {
        Self {
            name,
            description,
            regex: Regex::new(&format!("^(?:{pattern})$")).expect("Invalid regex pattern"),
        }
    }

    /// Check if the whole value matches this pattern.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// VIN pattern for the given alphabet.
#[must_use]
pub fn vin_pattern(alphabet: VinAlphabet) -> &'static FieldPattern {
    static STRICT: OnceLock<FieldPattern> = OnceLock::new();
    static RELAXED: OnceLock<FieldPattern> = OnceLock::new();

    match alphabet {
        VinAlphabet::Strict => STRICT.get_or_init(|| {
            FieldPattern::new(
                "vin_strict",
                "17 characters, A-Z and 0-9 excluding I, O and Q",
                r"[A-HJ-NPR-Z0-9]{17}",
            )
        }),
        VinAlphabet::Relaxed => RELAXED.get_or_init(|| {
            FieldPattern::new("vin_relaxed", "17 characters, A-Z and 0-9", r"[A-Z0-9]{17}")
        }),
    }
}

/// Plate pattern for the given format.
#[must_use]
pub fn plate_pattern(format: PlateFormat) -> &'static FieldPattern {
    static OLD: OnceLock<FieldPattern> = OnceLock::new();
    static NEW: OnceLock<FieldPattern> = OnceLock::new();

    match format {
        PlateFormat::Old => OLD.get_or_init(|| {
            FieldPattern::new(
                "plate_old",
                "three letters, three digits, then GP (e.g. ABC123GP)",
                r"[A-Z]{3}[0-9]{3}GP",
            )
        }),
        PlateFormat::New => NEW.get_or_init(|| {
            FieldPattern::new(
                "plate_new",
                "two letters, two digits, two letters, then GP (e.g. AB12CDGP)",
                r"[A-Z]{2}[0-9]{2}[A-Z]{2}GP",
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_pattern_is_anchored() {
        let pattern = FieldPattern::new("digits", "Three digits", r"[0-9]{3}");

        assert!(pattern.matches("123"));
        assert!(!pattern.matches("1234"));
        assert!(!pattern.matches("x123"));
        assert!(!pattern.matches(""));
    }

    #[test]
    fn test_strict_vin_pattern() {
        let pattern = vin_pattern(VinAlphabet::Strict);

        assert!(pattern.matches("A1B2C3D4E5F6G7H8J"));
        assert!(pattern.matches("1HGCM82633A004352"));
        assert!(!pattern.matches("I1B2C3D4E5F6G7H8J"));
        assert!(!pattern.matches("A1B2C3D4E5F6G7H8O"));
        assert!(!pattern.matches("Q1B2C3D4E5F6G7H8J"));
        assert!(!pattern.matches("a1b2c3d4e5f6g7h8j"));
        assert!(!pattern.matches("A1B2C3D4E5F6G7H8"));
    }

    #[test]
    fn test_relaxed_vin_pattern_allows_ioq() {
        let pattern = vin_pattern(VinAlphabet::Relaxed);

        assert!(pattern.matches("IOQ2C3D4E5F6G7H8J"));
        assert!(!pattern.matches("A1B2C3D4E5F6G7H8-"));
    }

    #[test]
    fn test_old_plate_pattern() {
        let pattern = plate_pattern(PlateFormat::Old);

        assert!(pattern.matches("ABC123GP"));
        assert!(pattern.matches("JHN675GP"));
        assert!(!pattern.matches("ABCD123GP"));
        assert!(!pattern.matches("AB12CDGP"));
        assert!(!pattern.matches("ABC123WP"));
    }

    #[test]
    fn test_new_plate_pattern() {
        let pattern = plate_pattern(PlateFormat::New);

        assert!(pattern.matches("AB12CDGP"));
        assert!(!pattern.matches("ABC123GP"));
        assert!(!pattern.matches("AB12CD"));
    }

    #[test]
    fn test_patterns_have_names() {
        let all = [
            vin_pattern(VinAlphabet::Strict),
            vin_pattern(VinAlphabet::Relaxed),
            plate_pattern(PlateFormat::Old),
            plate_pattern(PlateFormat::New),
        ];
        for pattern in all {
            assert!(!pattern.name.is_empty());
            assert!(!pattern.description.is_empty());
        }
    }
}
