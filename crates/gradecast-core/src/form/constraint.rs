use serde::{Deserialize, Serialize};

use crate::error::{GradecastError, Result};
use crate::field_map::FieldMap;
use crate::format::format_number;

/// Valid numeric range `[min, max]` for one field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConstraint")]
pub struct FieldConstraint {
    min: f64,
    max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    step: Option<f64>,
}

#[derive(Deserialize)]
struct RawConstraint {
    min: f64,
    max: f64,
    #[serde(default)]
    step: Option<f64>,
}

impl TryFrom<RawConstraint> for FieldConstraint {
    type Error = String;

    fn try_from(raw: RawConstraint) -> std::result::Result<Self, Self::Error> {
        if raw.min.is_nan() || raw.max.is_nan() || raw.min > raw.max {
            return Err(format!("min {} exceeds max {}", raw.min, raw.max));
        }
        Ok(Self {
            min: raw.min,
            max: raw.max,
            step: raw.step,
        })
    }
}

impl FieldConstraint {
    pub fn new(field: &str, min: f64, max: f64) -> Result<Self> {
        Self::try_from(RawConstraint {
            min,
            max,
            step: None,
        })
        .map_err(|_| GradecastError::Constraint {
            field: field.to_string(),
            min,
            max,
        })
    }

    /// Literal bounds known to be ordered.
    pub(crate) fn from_bounds(min: f64, max: f64, step: f64) -> Self {
        debug_assert!(min <= max);
        Self {
            min,
            max,
            step: Some(step),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> Option<f64> {
        self.step
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// `"0 to 100"`
    pub fn describe(&self) -> String {
        format!("{} to {}", format_number(self.min), format_number(self.max))
    }
}

/// Explicit per-field lookup handed to the validator.
pub type ConstraintTable = FieldMap<FieldConstraint>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = FieldConstraint::new("lab_credits", 20.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            GradecastError::Constraint {
                field: "lab_credits".to_string(),
                min: 20.0,
                max: 0.0
            }
        );
    }

    #[test]
    fn test_bounds_inclusive() {
        let c = FieldConstraint::new("x", 0.0, 100.0).unwrap();
        assert!(c.contains(0.0));
        assert!(c.contains(100.0));
        assert!(!c.contains(-0.1));
        assert!(!c.contains(100.5));
    }

    #[test]
    fn test_deserialize_with_step() {
        let c: FieldConstraint =
            serde_json::from_str(r#"{"min": 0, "max": 24, "step": 0.1}"#).unwrap();
        assert_eq!(c.step(), Some(0.1));
        assert_eq!(c.describe(), "0 to 24");
    }

    #[test]
    fn test_deserialize_rejects_inverted() {
        let parsed = serde_json::from_str::<FieldConstraint>(r#"{"min": 5, "max": 1}"#);
        assert!(parsed.is_err());
    }
}
