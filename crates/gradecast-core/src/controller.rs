//! Prediction form controller.
//!
//! Owns the form, the single view-state slot, and the startup snapshots
//! (range summary, class list). It performs no I/O: front ends ask it for a
//! submission, send it however they like, and hand the outcome back.

use tracing::{debug, info, warn};

use crate::error::{GradecastError, Result};
use crate::form::{FormSchema, FormState, FormSubmission, InputCheck, ValidationResult};
use crate::prediction::{
    render, render_ranges, ClassList, PredictionOutcome, PredictionResponse, RangeRow,
    RangeSummary, ResultView, SampleValues,
};

/// Mutually exclusive display mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Result(PredictionResponse),
    Error(GradecastError),
}

impl ViewState {
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Result(_) => "result",
            ViewState::Error(_) => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn result_view(&self) -> Option<ResultView> {
        match self {
            ViewState::Result(response) => Some(render(response)),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&GradecastError> {
        match self {
            ViewState::Error(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
    form: FormState,
    view: ViewState,
    ranges: Option<RangeSummary>,
    classes: Vec<String>,
    last_seq: u64,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(FormSchema::student_performance())
    }
}

impl Controller {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            form: FormState::new(schema),
            view: ViewState::Idle,
            ranges: None,
            classes: Vec::new(),
            last_seq: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn ranges(&self) -> Option<&RangeSummary> {
        self.ranges.as_ref()
    }

    /// Rows for the read-only range summary; empty until ranges load.
    pub fn range_rows(&self) -> Vec<RangeRow> {
        self.ranges.as_ref().map(render_ranges).unwrap_or_default()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Input-change event: store the value and re-check that field.
    pub fn input(&mut self, name: &str, raw: impl Into<String>) -> Option<&ValidationResult> {
        if !self.form.set_value(name, raw) {
            debug!(field = name, "Input for unknown field ignored");
            return None;
        }
        self.form.validate_field(name)
    }

    /// Blur event: re-check without changing the value.
    pub fn blur(&mut self, name: &str) -> Option<&ValidationResult> {
        self.form.validate_field(name)
    }

    /// Start a prediction. Invalid inputs surface one banner error and yield
    /// no submission, so nothing is sent.
    pub fn submit(&mut self) -> Option<FormSubmission> {
        let report = self.form.validate_all();
        if !report.all_valid() {
            let fields = report.failing_fields();
            warn!(?fields, "Submission blocked by validation errors");
            self.view = ViewState::Error(GradecastError::InvalidInputs { fields });
            return None;
        }

        self.last_seq += 1;
        self.view = ViewState::Loading;
        info!(seq = self.last_seq, "Submitting prediction request");
        Some(self.form.submission(self.last_seq))
    }

    /// Apply a prediction outcome. Overlapping requests are not sequenced:
    /// whichever response arrives last owns the view.
    pub fn complete(&mut self, seq: u64, outcome: PredictionOutcome) -> &ViewState {
        if seq < self.last_seq {
            debug!(seq, latest = self.last_seq, "Applying response from an older submission");
        }

        self.view = match outcome {
            Ok(response) => {
                info!(seq, prediction = %response.prediction, "Prediction received");
                ViewState::Result(response)
            }
            Err(e) => {
                warn!(seq, error = %e, "Prediction failed");
                ViewState::Error(e)
            }
        };
        &self.view
    }

    /// Explicit reset: back to `Idle` with a blank, unflagged form.
    pub fn reset(&mut self) {
        self.form.reset();
        self.view = ViewState::Idle;
    }

    /// "Validate inputs" action.
    pub fn check_inputs(&mut self) -> InputCheck {
        self.form.validate_all().summary()
    }

    /// Fill the form from a fetched sample. Returns the fields written.
    pub fn apply_sample(&mut self, sample: Result<SampleValues>) -> Vec<String> {
        match sample {
            Ok(values) => {
                let written = self.form.apply_sample(&values);
                debug!(count = written.len(), "Sample values applied");
                written
            }
            Err(e) => {
                let reason = match e {
                    GradecastError::Network(reason) => reason,
                    other => other.to_string(),
                };
                warn!(%reason, "Sample fetch failed");
                self.view = ViewState::Error(GradecastError::SampleUnavailable(reason));
                Vec::new()
            }
        }
    }

    /// Startup range fetch. Failure leaves the summary empty and shows nothing.
    pub fn apply_ranges(&mut self, ranges: Result<RangeSummary>) {
        match ranges {
            Ok(ranges) => {
                debug!(count = ranges.len(), "Range summary loaded");
                self.ranges = Some(ranges);
            }
            Err(e) => warn!(error = %e, "Failed to load ranges"),
        }
    }

    /// Startup class fetch, kept for logging only.
    pub fn apply_classes(&mut self, classes: Result<ClassList>) {
        self.classes = match classes {
            Ok(list) => list.classes,
            Err(e) => {
                warn!(error = %e, "Failed to load classes");
                Vec::new()
            }
        };
        if !self.classes.is_empty() {
            info!(classes = ?self.classes, "Available prediction classes");
        }
    }
}
