// Domain modules
pub mod config;
pub mod controller;
pub mod error;
pub mod field_map;
pub mod form;
pub mod format;
pub mod insights;
pub mod prediction;

pub use config::{DisplayConfig, GradecastConfig, ServerConfig, DEFAULT_HOST};
pub use controller::{Controller, ViewState};
pub use error::{GradecastError, Result};
pub use field_map::FieldMap;
pub use form::{
    ConstraintTable, FieldConstraint, FieldKind, FieldSpec, FormSchema, FormState, FormSubmission,
    InputCheck, ValidationReport, ValidationResult, Validator,
};
pub use insights::{
    render_dataset_stats, render_gpa_bands, DatasetStats, FeatureStats, GpaBand, GpaBandRow,
    GpaBands, StatsRow,
};
pub use prediction::{
    decode_prediction, render, render_ranges, Badge, ClassList, FeatureRow, PredictionOutcome,
    PredictionResponse, ProbabilityBar, RangeRow, RangeSummary, ResultView, SampleValues,
    ServerError,
};
