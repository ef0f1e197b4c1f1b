use tracing::debug;

use super::constraint::ConstraintTable;
use super::schema::FormSchema;
use super::validation::{ValidationReport, ValidationResult, Validator};
use crate::field_map::FieldMap;
use crate::format::display_value;
use crate::prediction::SampleValues;

/// Live form values plus the last validation result of each numeric field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    schema: FormSchema,
    constraints: ConstraintTable,
    values: FieldMap<String>,
    results: FieldMap<ValidationResult>,
}

impl FormState {
    pub fn new(schema: FormSchema) -> Self {
        let constraints = schema.constraints();
        let values = schema
            .fields
            .iter()
            .map(|f| (f.name.clone(), String::new()))
            .collect();
        Self {
            schema,
            constraints,
            values,
            results: FieldMap::new(),
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn constraints(&self) -> &ConstraintTable {
        &self.constraints
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn values(&self) -> &FieldMap<String> {
        &self.values
    }

    /// Returns false for names the schema does not know.
    pub fn set_value(&mut self, name: &str, raw: impl Into<String>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = raw.into();
                true
            }
            None => false,
        }
    }

    /// Last stored result; `None` when the field was never checked.
    pub fn result(&self, name: &str) -> Option<&ValidationResult> {
        self.results.get(name)
    }

    pub fn results(&self) -> &FieldMap<ValidationResult> {
        &self.results
    }

    /// Re-check one numeric field, replacing its previous result.
    pub fn validate_field(&mut self, name: &str) -> Option<&ValidationResult> {
        let spec = self.schema.field(name)?;
        if !spec.is_number() {
            return None;
        }
        let raw = self.values.get(name).map(String::as_str).unwrap_or_default();
        let result = Validator::new(&self.constraints).validate_field(name, raw);
        self.results.insert(name, result);
        self.results.get(name)
    }

    /// Re-check every numeric field.
    pub fn validate_all(&mut self) -> ValidationReport {
        let validator = Validator::new(&self.constraints);
        let report = validator.validate_all(self.schema.numeric_fields().map(|f| {
            let raw = self.values.get(&f.name).map(String::as_str).unwrap_or_default();
            (f.name.as_str(), raw)
        }));
        for (name, result) in report.results.iter() {
            self.results.insert(name, result.clone());
        }
        report
    }

    pub fn clear_diagnostics(&mut self) {
        self.results = FieldMap::new();
    }

    pub fn reset(&mut self) {
        for name in self.schema.fields.iter().map(|f| f.name.clone()) {
            self.values.insert(name, String::new());
        }
        self.clear_diagnostics();
    }

    /// Write sample values by field name and re-check only the numeric fields written.
    pub fn apply_sample(&mut self, sample: &SampleValues) -> Vec<String> {
        let mut written = Vec::new();
        for (name, value) in sample.iter() {
            if !self.set_value(name, display_value(value)) {
                debug!(field = name, "Sample field not in form, skipping");
                continue;
            }
            self.validate_field(name);
            written.push(name.to_string());
        }
        written
    }

    /// Every field in schema order, ready to post.
    pub fn submission(&self, seq: u64) -> FormSubmission {
        FormSubmission {
            seq,
            fields: self
                .values
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }
}

/// A form post awaiting a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub seq: u64,
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> FormState {
        FormState::new(FormSchema::student_performance())
    }

    #[test]
    fn test_revalidation_replaces_result() {
        let mut form = form();
        form.set_value("attendance_percentage", "150");
        form.validate_field("attendance_percentage");
        form.validate_field("attendance_percentage");
        assert_eq!(form.results().len(), 1);
        assert_eq!(
            form.result("attendance_percentage").and_then(|r| r.diagnostic()),
            Some("Value must be between 0 and 100")
        );

        form.set_value("attendance_percentage", "90");
        assert!(form.validate_field("attendance_percentage").unwrap().is_valid());
    }

    #[test]
    fn test_toggle_not_validated() {
        let mut form = form();
        form.set_value("internet_access", "7");
        assert!(form.validate_field("internet_access").is_none());
        assert!(form.validate_all().all_valid());
    }

    #[test]
    fn test_validate_all_marks_every_failing_field() {
        let mut form = form();
        form.set_value("attendance_percentage", "101");
        form.set_value("lab_credits", "abc");
        let report = form.validate_all();
        assert!(!report.all_valid());
        assert!(form.result("attendance_percentage").unwrap().is_highlighted());
        assert!(form.result("lab_credits").unwrap().is_highlighted());
        assert!(form.result("total_credits").unwrap().is_valid());
    }

    #[test]
    fn test_apply_sample_writes_known_fields_only() {
        let mut form = form();
        let sample: SampleValues = serde_json::from_value(json!({
            "attendance_percentage": 78,
            "sleep_time_hours": 6.5,
            "internet_access": 1,
            "shoe_size": 42
        }))
        .unwrap();

        let written = form.apply_sample(&sample);
        assert_eq!(
            written,
            vec!["attendance_percentage", "sleep_time_hours", "internet_access"]
        );
        assert_eq!(form.value("sleep_time_hours"), Some("6.5"));
        assert_eq!(form.value("internet_access"), Some("1"));
        assert!(form.result("attendance_percentage").is_some());
        assert!(form.result("internet_access").is_none());
        assert!(form.result("total_credits").is_none());
    }

    #[test]
    fn test_reset_clears_values_and_results() {
        let mut form = form();
        form.set_value("lab_credits", "99");
        form.validate_all();
        form.reset();
        assert_eq!(form.value("lab_credits"), Some(""));
        assert!(form.results().is_empty());
    }

    #[test]
    fn test_submission_encoding() {
        let schema = FormSchema::new(vec![
            crate::form::FieldSpec::toggle("part_time_job"),
            crate::form::FieldSpec::toggle("note"),
        ]);
        let mut form = FormState::new(schema);
        form.set_value("part_time_job", "1");
        form.set_value("note", "a b&c");
        let body = form.submission(3).encode();
        assert_eq!(body, "part_time_job=1&note=a%20b%26c");
    }
}
