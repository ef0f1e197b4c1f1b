//! Drives a [`Controller`] against a live prediction service.
//!
//! The controller owns all view state; the session only performs the
//! requests each user action needs and feeds the outcomes back.

use gradecast_core::{
    Controller, DatasetStats, FormSchema, GpaBands, GradecastError, InputCheck, Result, ViewState,
};
use tracing::{debug, info};

use crate::PredictorClient;

pub struct Session {
    client: PredictorClient,
    controller: Controller,
}

impl Session {
    pub fn new(client: PredictorClient, schema: FormSchema) -> Self {
        Self {
            client,
            controller: Controller::new(schema),
        }
    }

    pub fn client(&self) -> &PredictorClient {
        &self.client
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn view(&self) -> &ViewState {
        self.controller.view()
    }

    /// Prime the session: range summary first, then the class list.
    /// Neither failure is fatal.
    pub fn start(&mut self) {
        info!(host = self.client.host(), "Gradecast session starting");

        let ranges = self.client.fetch_ranges().map_err(GradecastError::from);
        self.controller.apply_ranges(ranges);

        debug!("Session ready for input");

        let classes = self.client.fetch_classes().map_err(GradecastError::from);
        self.controller.apply_classes(classes);
    }

    /// Fetch a sample and write it into the form. Returns the fields written.
    pub fn fill_sample(&mut self) -> Vec<String> {
        let sample = self.client.fetch_sample().map_err(GradecastError::from);
        self.controller.apply_sample(sample)
    }

    pub fn input(&mut self, name: &str, raw: impl Into<String>) -> bool {
        self.controller.input(name, raw).is_some()
    }

    pub fn check_inputs(&mut self) -> InputCheck {
        self.controller.check_inputs()
    }

    /// Validate, post when valid, and return the resulting view.
    pub fn submit(&mut self) -> &ViewState {
        let Some(submission) = self.controller.submit() else {
            return self.controller.view();
        };
        let outcome = self.client.predict(&submission);
        self.controller.complete(submission.seq, outcome)
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }

    pub fn gpa_bands(&self) -> Result<GpaBands> {
        Ok(self.client.fetch_gpa_bands()?)
    }

    pub fn dataset_stats(&self) -> Result<DatasetStats> {
        Ok(self.client.fetch_dataset_stats()?)
    }
}
