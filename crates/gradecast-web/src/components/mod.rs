pub mod header;
pub mod nav;
pub mod prediction_form;
pub mod range_summary;
pub mod result_panel;
