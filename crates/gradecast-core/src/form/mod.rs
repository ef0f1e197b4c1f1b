mod constraint;
mod schema;
mod state;
mod validation;

pub use constraint::{ConstraintTable, FieldConstraint};
pub use schema::{FieldKind, FieldSpec, FormSchema};
pub use state::{FormState, FormSubmission};
pub use validation::{
    InputCheck, ValidationReport, ValidationResult, Validator, ALL_VALID, NOT_A_NUMBER,
    SOME_INVALID,
};
