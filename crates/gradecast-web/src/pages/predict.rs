use gradecast_core::Controller;
use leptos::logging;
use leptos::prelude::*;

use crate::api;
use crate::components::{
    prediction_form::PredictionForm, range_summary::RangeSummary, result_panel::ResultPanel,
};

#[component]
pub fn PredictPage() -> impl IntoView {
    let controller = RwSignal::new(Controller::default());

    // Ranges first, then classes; neither failure reaches the view
    Effect::new(move || {
        wasm_bindgen_futures::spawn_local(async move {
            let ranges = api::fetch_ranges().await;
            if let Err(e) = &ranges {
                logging::warn!("Failed to load ranges: {}", e);
            }
            controller.update(|c| c.apply_ranges(ranges));

            let classes = api::fetch_classes().await;
            match &classes {
                Ok(list) => logging::log!("Available classes: {:?}", list.classes),
                Err(e) => logging::warn!("Failed to load classes: {}", e),
            }
            controller.update(|c| c.apply_classes(classes));
        });
    });

    view! {
        <div class="page predict-page">
            <section class="form-section">
                <h2>"Student Details"</h2>
                <PredictionForm controller />
            </section>
            <section class="result-section">
                <ResultPanel controller />
                <RangeSummary controller />
            </section>
        </div>
    }
}
