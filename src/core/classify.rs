//! Field classification rules
//!
//! Decides which scalar values are eligible for replacement and what token
//! shape they have. Eligibility is deliberately narrow: only strings with at
//! least one alphabetic character are touched, so numbers, booleans, nulls,
//! identifiers like "12345", and punctuation-only strings always pass
//! through unchanged.

use serde_json::Value;

/// Token shape of an eligible string value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenShape {
    /// One whitespace-delimited token
    Single,
    /// Two or more whitespace-delimited tokens
    Multi,
}

/// Classification outcome for a scalar value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Value passes through untouched
    NotEligible,
    /// Value is replaced according to its token shape
    Eligible(TokenShape),
}

/// Classifies a scalar JSON value for replacement.
///
/// Non-string values are never eligible.
pub fn classify(value: &Value) -> Eligibility {
    match value {
        Value::String(s) => classify_str(s),
        _ => Eligibility::NotEligible,
    }
}

/// Classifies a raw string.
///
/// Token shape counts whitespace-delimited runs, so leading, trailing, and
/// repeated whitespace never produce empty tokens.
pub fn classify_str(s: &str) -> Eligibility {
    if !s.chars().any(|c| c.is_alphabetic()) {
        return Eligibility::NotEligible;
    }
    match s.split_whitespace().count() {
        0 | 1 => Eligibility::Eligible(TokenShape::Single),
        _ => Eligibility::Eligible(TokenShape::Multi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("John", Eligibility::Eligible(TokenShape::Single) ; "single token name")]
    #[test_case("John Smith", Eligibility::Eligible(TokenShape::Multi) ; "two token name")]
    #[test_case("Mary Jane Watson", Eligibility::Eligible(TokenShape::Multi) ; "three token name")]
    #[test_case("  Ann  ", Eligibility::Eligible(TokenShape::Single) ; "padded single token")]
    #[test_case("O'Brien", Eligibility::Eligible(TokenShape::Single) ; "apostrophe name")]
    #[test_case("user123", Eligibility::Eligible(TokenShape::Single) ; "alphanumeric token")]
    #[test_case("", Eligibility::NotEligible ; "empty string")]
    #[test_case("   ", Eligibility::NotEligible ; "whitespace only")]
    #[test_case("12345", Eligibility::NotEligible ; "digits only")]
    #[test_case("!!!", Eligibility::NotEligible ; "punctuation only")]
    #[test_case("12 34", Eligibility::NotEligible ; "spaced digits")]
    fn test_classify_str(input: &str, expected: Eligibility) {
        assert_eq!(classify_str(input), expected);
    }

    #[test]
    fn test_non_strings_are_not_eligible() {
        assert_eq!(classify(&json!(42)), Eligibility::NotEligible);
        assert_eq!(classify(&json!(3.5)), Eligibility::NotEligible);
        assert_eq!(classify(&json!(true)), Eligibility::NotEligible);
        assert_eq!(classify(&json!(null)), Eligibility::NotEligible);
        assert_eq!(classify(&json!([1, 2])), Eligibility::NotEligible);
        assert_eq!(classify(&json!({"a": 1})), Eligibility::NotEligible);
    }

    #[test]
    fn test_string_values_classify_like_raw_strings() {
        assert_eq!(
            classify(&json!("John")),
            Eligibility::Eligible(TokenShape::Single)
        );
        assert_eq!(
            classify(&json!("John Smith")),
            Eligibility::Eligible(TokenShape::Multi)
        );
        assert_eq!(classify(&json!("9000")), Eligibility::NotEligible);
    }

    #[test]
    fn test_unicode_letters_are_alphabetic() {
        assert_eq!(
            classify_str("なまえ"),
            Eligibility::Eligible(TokenShape::Single)
        );
        assert_eq!(
            classify_str("Márta Kovács"),
            Eligibility::Eligible(TokenShape::Multi)
        );
    }
}
