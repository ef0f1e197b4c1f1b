pub mod insights;
pub mod predict;
