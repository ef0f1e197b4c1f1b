mod client;
mod session;

pub use client::{ClientError, PredictorClient};
pub use session::Session;

// Re-export core types so front ends only need this crate
pub use gradecast_core::{
    Controller, FormSchema, GradecastConfig, GradecastError, ResultView, ServerConfig, ViewState,
};
