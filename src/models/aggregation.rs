//! Aggregation edge model
//!
//! A directed containment relationship from a contained ("source") class to
//! its container ("target") class, annotated with multiplicity bounds on each
//! side.

use serde::{Deserialize, Serialize};

/// Aggregation edge between two classes.
///
/// `source` and `target` are class names and are not guaranteed to exist in
/// the class set; every lookup against the class mapping must tolerate
/// dangling references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregationEdge {
    /// Contained class
    pub source: String,
    /// Containing class
    pub target: String,
    /// Multiplicity of the source under the target, as `min..max`
    #[serde(rename = "sourceMultiplicity")]
    pub source_multiplicity: String,
    #[serde(rename = "targetMultiplicity")]
    pub target_multiplicity: String,
}

/// Split a multiplicity string of the form `min..max` into its bounds.
///
/// The substring before the *first* `..` is the lower bound and the substring
/// after the *last* `..` is the upper bound; the upper bound may be an
/// unbounded marker such as `*`. A string without any `..` separator yields
/// identical bounds (`"5"` becomes `("5", "5")`).
///
/// Both the containment fold and the metadata projection resolve bounds
/// through this function.
pub fn split_multiplicity(raw: &str) -> (String, String) {
    match (raw.find(".."), raw.rfind("..")) {
        (Some(first), Some(last)) => (raw[..first].to_string(), raw[last + 2..].to_string()),
        _ => (raw.to_string(), raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bounded_range() {
        assert_eq!(
            split_multiplicity("0..5"),
            ("0".to_string(), "5".to_string())
        );
    }

    #[test]
    fn test_split_unbounded_marker() {
        assert_eq!(
            split_multiplicity("1..*"),
            ("1".to_string(), "*".to_string())
        );
    }

    #[test]
    fn test_split_no_separator_is_exact() {
        assert_eq!(split_multiplicity("5"), ("5".to_string(), "5".to_string()));
    }

    #[test]
    fn test_split_takes_first_and_last_separator() {
        assert_eq!(
            split_multiplicity("1..2..3"),
            ("1".to_string(), "3".to_string())
        );
    }

    #[test]
    fn test_split_empty_string() {
        assert_eq!(split_multiplicity(""), (String::new(), String::new()));
    }
}
