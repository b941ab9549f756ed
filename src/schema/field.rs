//! Field definitions for the clinical measurement schema
//!
//! This module defines the core field definition structures used as the
//! single source of truth for the thirteen measurement fields.

use std::fmt;

use itertools::Itertools;

/// Advisory value domain for a clinical field
///
/// Domains are shown to the operator as input hints and checked only to
/// emit warnings. Out-of-domain values are still passed to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureDomain {
    /// Continuous range, inclusive on both ends
    Range(f64, f64),
    /// Binary flag (0 or 1)
    Binary,
    /// Small set of integer codes
    Codes(&'static [i32]),
}

impl FeatureDomain {
    /// Check whether a value lies inside the advisory domain
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        match self {
            Self::Range(min, max) => value >= *min && value <= *max,
            Self::Binary => value == 0.0 || value == 1.0,
            Self::Codes(codes) => codes.iter().any(|c| f64::from(*c) == value),
        }
    }
}

impl fmt::Display for FeatureDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(min, max) => write!(f, "{min}-{max}"),
            Self::Binary => write!(f, "0 or 1"),
            Self::Codes(codes) => write!(f, "{}", codes.iter().join(", ")),
        }
    }
}

/// A unified definition of one clinical measurement field
///
/// Provides the field's position-independent identity: machine name,
/// operator-facing label, the range hint shown next to the input, and the
/// advisory domain.
#[derive(Debug, Clone, Copy)]
pub struct FeatureDefinition {
    /// Short field name used in machine-facing contexts
    pub name: &'static str,
    /// Human-facing label for prompts and error messages
    pub label: &'static str,
    /// Advisory range hint shown to the operator
    pub hint: &'static str,
    /// Advisory value domain
    pub domain: FeatureDomain,
}

impl fmt::Display for FeatureDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_domain() {
        let domain = FeatureDomain::Range(29.0, 77.0);
        assert!(domain.contains(29.0));
        assert!(domain.contains(77.0));
        assert!(!domain.contains(28.9));
        assert!(!domain.contains(-5.0));
    }

    #[test]
    fn test_binary_domain() {
        let domain = FeatureDomain::Binary;
        assert!(domain.contains(0.0));
        assert!(domain.contains(1.0));
        assert!(!domain.contains(2.0));
    }

    #[test]
    fn test_codes_domain() {
        let domain = FeatureDomain::Codes(&[3, 6, 7]);
        assert!(domain.contains(3.0));
        assert!(domain.contains(7.0));
        assert!(!domain.contains(5.0));
        assert_eq!(domain.to_string(), "3, 6, 7");
    }
}
