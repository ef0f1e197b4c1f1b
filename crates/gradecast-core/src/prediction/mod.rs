mod render;
mod types;

pub use render::{
    render, render_ranges, style_key, Badge, FeatureRow, ProbabilityBar, RangeRow, ResultView,
};
pub use types::{
    decode_prediction, ClassList, PredictionOutcome, PredictionResponse, RangeSummary,
    SampleValues, ServerError, PREDICTION_FAILED,
};
