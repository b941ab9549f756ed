//! The clinical measurement schema.
//!
//! Single source of truth for the thirteen fields a feature vector carries:
//! their order, labels, operator-facing range hints, and advisory domains.
//! Field order is fixed; every other part of the crate indexes into it.

pub mod field;

pub use field::{FeatureDefinition, FeatureDomain};

use rustc_hash::FxHashMap;

/// Number of clinical measurements in a feature vector
pub const FEATURE_COUNT: usize = 13;

/// Ordered definitions of the thirteen clinical fields
static FIELDS: [FeatureDefinition; FEATURE_COUNT] = [
    FeatureDefinition {
        name: "age",
        label: "Age",
        hint: "29-77",
        domain: FeatureDomain::Range(29.0, 77.0),
    },
    FeatureDefinition {
        name: "sex",
        label: "Sex",
        hint: "1:M, 0:F",
        domain: FeatureDomain::Binary,
    },
    FeatureDefinition {
        name: "cp",
        label: "Chest Pain",
        hint: "1-4",
        domain: FeatureDomain::Range(1.0, 4.0),
    },
    FeatureDefinition {
        name: "trestbps",
        label: "Rest Blood Pressure",
        hint: "94-200",
        domain: FeatureDomain::Range(94.0, 200.0),
    },
    FeatureDefinition {
        name: "chol",
        label: "Cholestoral",
        hint: "126-564",
        domain: FeatureDomain::Range(126.0, 564.0),
    },
    FeatureDefinition {
        name: "fbs",
        label: "Fasting Blood Sugar",
        hint: "1:Y, 0:N",
        domain: FeatureDomain::Binary,
    },
    FeatureDefinition {
        name: "restecg",
        label: "Rest ECG",
        hint: "0-2",
        domain: FeatureDomain::Range(0.0, 2.0),
    },
    FeatureDefinition {
        name: "thalach",
        label: "Max Heart Rate",
        hint: "71-202",
        domain: FeatureDomain::Range(71.0, 202.0),
    },
    FeatureDefinition {
        name: "exang",
        label: "Exercise Angina",
        hint: "1:Y, 0:N",
        domain: FeatureDomain::Binary,
    },
    FeatureDefinition {
        name: "oldpeak",
        label: "Oldpeak",
        hint: "0.0-6.2",
        domain: FeatureDomain::Range(0.0, 6.2),
    },
    FeatureDefinition {
        name: "slope",
        label: "ST Slope",
        hint: "1-3",
        domain: FeatureDomain::Range(1.0, 3.0),
    },
    FeatureDefinition {
        name: "ca",
        label: "Vessels (CA)",
        hint: "0-3",
        domain: FeatureDomain::Range(0.0, 3.0),
    },
    FeatureDefinition {
        name: "thal",
        label: "Thal Result",
        hint: "3, 6, 7",
        domain: FeatureDomain::Codes(&[3, 6, 7]),
    },
];

/// Ordered schema for the thirteen clinical measurement fields
///
/// Provides position-based access in vector order and O(1) lookup of a
/// field's position by its short name.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    index: FxHashMap<&'static str, usize>,
}

impl FeatureSchema {
    /// Build the schema with its name index
    #[must_use]
    pub fn new() -> Self {
        let index = FIELDS.iter().enumerate().map(|(i, f)| (f.name, i)).collect();
        Self { index }
    }

    /// All field definitions in vector order
    #[must_use]
    pub fn fields(&self) -> &'static [FeatureDefinition; FEATURE_COUNT] {
        &FIELDS
    }

    /// Definition at a given vector position
    #[must_use]
    pub fn field(&self, position: usize) -> Option<&'static FeatureDefinition> {
        FIELDS.get(position)
    }

    /// Position of a field by its short name
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Definitions of the fields whose values fall outside their advisory domain
    ///
    /// Advisory only. Callers log these, they never reject on them.
    #[must_use]
    pub fn out_of_domain(&self, values: &[f64; FEATURE_COUNT]) -> Vec<&'static FeatureDefinition> {
        FIELDS
            .iter()
            .zip(values.iter())
            .filter(|(def, value)| !def.domain.contains(**value))
            .map(|(def, _)| def)
            .collect()
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::new()
    }
}
