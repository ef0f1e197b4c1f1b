//! Property-based invariants for field validation and result rendering.
//!
//! 1. A numeric value passes iff it lies inside `[min, max]`
//! 2. The empty string always passes
//! 3. Alphabetic input always fails with the number diagnostic
//! 4. Re-validating an unchanged field is idempotent and keeps one result
//! 5. `validate_all` fails iff some field fails, and reports every failure
//! 6. Rendering yields one bar per probability, in order

use gradecast_core::form::NOT_A_NUMBER;
use gradecast_core::{
    render, ConstraintTable, FieldConstraint, FieldSpec, FieldMap, FormSchema, FormState,
    PredictionResponse, Validator,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn bounds_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-1000.0f64..1000.0, 0.0f64..500.0).prop_map(|(min, span)| (min, min + span))
}

fn table(min: f64, max: f64) -> ConstraintTable {
    [("field", FieldConstraint::new("field", min, max).unwrap())]
        .into_iter()
        .collect()
}

fn schema(count: usize, min: f64, max: f64) -> FormSchema {
    FormSchema::new(
        (0..count)
            .map(|i| {
                FieldSpec::number(
                    &format!("field_{}", i),
                    FieldConstraint::new("field", min, max).unwrap(),
                )
            })
            .collect(),
    )
}

proptest! {
    #[test]
    fn numeric_passes_iff_in_range((min, max) in bounds_strategy(), value in -2000.0f64..2000.0) {
        let table = table(min, max);
        let result = Validator::new(&table).validate_field("field", &value.to_string());
        prop_assert_eq!(result.is_valid(), min <= value && value <= max);
    }

    #[test]
    fn empty_always_passes((min, max) in bounds_strategy()) {
        let table = table(min, max);
        prop_assert!(Validator::new(&table).validate_field("field", "").is_valid());
    }

    #[test]
    fn alphabetic_always_fails((min, max) in bounds_strategy(), raw in "[a-zA-Z]{1,12}") {
        let table = table(min, max);
        let result = Validator::new(&table).validate_field("field", &raw);
        prop_assert_eq!(result.diagnostic(), Some(NOT_A_NUMBER));
    }

    #[test]
    fn revalidation_is_idempotent((min, max) in bounds_strategy(), value in -2000.0f64..2000.0) {
        let mut form = FormState::new(schema(1, min, max));
        form.set_value("field_0", value.to_string());
        let first = form.validate_field("field_0").cloned();
        let second = form.validate_field("field_0").cloned();
        prop_assert_eq!(first, second);
        prop_assert_eq!(form.results().len(), 1);
    }

    #[test]
    fn validate_all_reports_every_failure(values in prop::collection::vec(-50.0f64..150.0, 1..12)) {
        let mut form = FormState::new(schema(values.len(), 0.0, 100.0));
        for (i, v) in values.iter().enumerate() {
            form.set_value(&format!("field_{}", i), v.to_string());
        }
        let report = form.validate_all();

        let expected: Vec<String> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| !(0.0..=100.0).contains(*v))
            .map(|(i, _)| format!("field_{}", i))
            .collect();

        prop_assert_eq!(report.all_valid(), expected.is_empty());
        prop_assert_eq!(report.failing_fields(), expected);
        prop_assert_eq!(report.results.len(), values.len());
    }

    #[test]
    fn render_keeps_every_bar_in_order(percents in prop::collection::vec(0u32..=100, 0..8)) {
        let probabilities: FieldMap<String> = percents
            .iter()
            .enumerate()
            .map(|(i, p)| (format!("Class{}", i), format!("{}%", p)))
            .collect();
        let response = PredictionResponse {
            prediction: "Class0".to_string(),
            probabilities,
            features_used: FieldMap::new(),
            valid_ranges: None,
        };

        let view = render(&response);
        prop_assert_eq!(view.bars.len(), percents.len());
        for (i, (bar, p)) in view.bars.iter().zip(&percents).enumerate() {
            prop_assert_eq!(&bar.category, &format!("Class{}", i));
            prop_assert_eq!(bar.width, *p as f64);
        }
    }
}
