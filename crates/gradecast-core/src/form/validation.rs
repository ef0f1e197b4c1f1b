use serde::{Deserialize, Serialize};
use tracing::debug;

use super::constraint::ConstraintTable;
use crate::field_map::FieldMap;
use crate::format::{format_number, parse_number};

pub const NOT_A_NUMBER: &str = "Please enter a valid number";
pub const ALL_VALID: &str = "All inputs are within valid ranges!";
pub const SOME_INVALID: &str =
    "Some inputs are outside valid ranges. Please check highlighted fields.";

/// Outcome of checking one field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid { diagnostic: String },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { diagnostic } => Some(diagnostic),
        }
    }

    /// Whether the field carries the out-of-range marker.
    pub fn is_highlighted(&self) -> bool {
        !self.is_valid()
    }
}

/// Range checks against an explicit constraint table.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    constraints: &'a ConstraintTable,
}

impl<'a> Validator<'a> {
    pub fn new(constraints: &'a ConstraintTable) -> Self {
        Self { constraints }
    }

    /// Empty input passes; required-ness is left to submission.
    /// Fields without a constraint only get the numeric check.
    pub fn validate_field(&self, name: &str, raw: &str) -> ValidationResult {
        if raw.is_empty() {
            return ValidationResult::Valid;
        }

        let Some(value) = parse_number(raw) else {
            debug!(field = name, raw, "Rejected non-numeric input");
            return ValidationResult::Invalid {
                diagnostic: NOT_A_NUMBER.to_string(),
            };
        };

        let Some(constraint) = self.constraints.get(name) else {
            return ValidationResult::Valid;
        };

        if constraint.contains(value) {
            return ValidationResult::Valid;
        }

        debug!(field = name, value, "Value outside constraint");
        ValidationResult::Invalid {
            diagnostic: format!(
                "Value must be between {} and {}",
                format_number(constraint.min()),
                format_number(constraint.max())
            ),
        }
    }

    /// Check every field; never stops at the first failure.
    pub fn validate_all<'f, I>(&self, fields: I) -> ValidationReport
    where
        I: IntoIterator<Item = (&'f str, &'f str)>,
    {
        let results = fields
            .into_iter()
            .map(|(name, raw)| (name.to_string(), self.validate_field(name, raw)))
            .collect();
        ValidationReport { results }
    }
}

/// Results for every checked field, in form order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    pub results: FieldMap<ValidationResult>,
}

impl ValidationReport {
    pub fn all_valid(&self) -> bool {
        self.results.values().all(ValidationResult::is_valid)
    }

    pub fn failing_fields(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|(_, r)| !r.is_valid())
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Message for the explicit "validate inputs" action.
    pub fn summary(&self) -> InputCheck {
        let all_valid = self.all_valid();
        InputCheck {
            all_valid,
            message: if all_valid { ALL_VALID } else { SOME_INVALID }.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputCheck {
    pub all_valid: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::constraint::FieldConstraint;

    fn table() -> ConstraintTable {
        [
            ("score", FieldConstraint::new("score", 0.0, 100.0).unwrap()),
            ("sleep", FieldConstraint::new("sleep", 0.5, 12.5).unwrap()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_out_of_range_message() {
        let table = table();
        let v = Validator::new(&table);
        let result = v.validate_field("score", "150");
        assert_eq!(result.diagnostic(), Some("Value must be between 0 and 100"));
        assert!(result.is_highlighted());
    }

    #[test]
    fn test_fractional_bounds_in_message() {
        let table = table();
        let v = Validator::new(&table);
        assert_eq!(
            v.validate_field("sleep", "13").diagnostic(),
            Some("Value must be between 0.5 and 12.5")
        );
    }

    #[test]
    fn test_empty_is_valid() {
        let table = table();
        let v = Validator::new(&table);
        assert_eq!(v.validate_field("score", ""), ValidationResult::Valid);
    }

    #[test]
    fn test_non_numeric() {
        let table = table();
        let v = Validator::new(&table);
        assert_eq!(v.validate_field("score", "ten").diagnostic(), Some(NOT_A_NUMBER));
        assert_eq!(v.validate_field("unknown", "ten").diagnostic(), Some(NOT_A_NUMBER));
    }

    #[test]
    fn test_unconstrained_field_skips_range() {
        let table = table();
        let v = Validator::new(&table);
        assert!(v.validate_field("unknown", "-9999").is_valid());
    }

    #[test]
    fn test_boundaries_pass() {
        let table = table();
        let v = Validator::new(&table);
        assert!(v.validate_field("score", "0").is_valid());
        assert!(v.validate_field("score", "100").is_valid());
        assert!(!v.validate_field("score", "-1").is_valid());
    }

    #[test]
    fn test_validate_all_reports_every_failure() {
        let table = table();
        let v = Validator::new(&table);
        let report = v.validate_all([("score", "150"), ("sleep", "20"), ("other", "1")]);
        assert!(!report.all_valid());
        assert_eq!(report.failing_fields(), vec!["score", "sleep"]);
        assert_eq!(report.results.len(), 3);
    }

    #[test]
    fn test_summary_messages() {
        let table = table();
        let v = Validator::new(&table);
        assert_eq!(v.validate_all([("score", "5")]).summary().message, ALL_VALID);
        assert_eq!(v.validate_all([("score", "500")]).summary().message, SOME_INVALID);
    }
}
