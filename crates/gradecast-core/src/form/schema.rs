use serde::{Deserialize, Serialize};

use super::constraint::{ConstraintTable, FieldConstraint};
use crate::format::humanize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free numeric input, range-validated on the client.
    Number,
    /// 0/1 choice rendered as a select; not range-validated on the client.
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub constraint: Option<FieldConstraint>,
}

impl FieldSpec {
    pub fn number(name: &str, constraint: FieldConstraint) -> Self {
        Self {
            name: name.to_string(),
            label: humanize(name),
            kind: FieldKind::Number,
            constraint: Some(constraint),
        }
    }

    pub fn toggle(name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: humanize(name),
            kind: FieldKind::Toggle,
            constraint: None,
        }
    }

    pub fn is_number(&self) -> bool {
        self.kind == FieldKind::Number
    }
}

/// Ordered description of the form's inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The student performance feature set published by the prediction service.
    pub fn student_performance() -> Self {
        let range = FieldConstraint::from_bounds;

        Self::new(vec![
            FieldSpec::number("attendance_percentage", range(0.0, 100.0, 1.0)),
            FieldSpec::number("sleep_time_hours", range(0.0, 24.0, 0.1)),
            FieldSpec::number("study_hours_per_week", range(0.0, 50.0, 1.0)),
            FieldSpec::number("total_credits", range(0.0, 40.0, 1.0)),
            FieldSpec::number("high_credit_modules", range(0.0, 10.0, 1.0)),
            FieldSpec::number("low_credit_modules", range(0.0, 10.0, 1.0)),
            FieldSpec::number("repeat_module_credits", range(0.0, 20.0, 1.0)),
            FieldSpec::number("lab_credits", range(0.0, 20.0, 1.0)),
            FieldSpec::toggle("part_time_job"),
            FieldSpec::toggle("internet_access"),
        ])
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn numeric_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.is_number())
    }

    pub fn constraints(&self) -> ConstraintTable {
        self.fields
            .iter()
            .filter_map(|f| f.constraint.map(|c| (f.name.clone(), c)))
            .collect()
    }
}
