use gradecast_core::Controller;
use leptos::prelude::*;

#[component]
pub fn RangeSummary(controller: RwSignal<Controller>) -> impl IntoView {
    let rows = move || controller.with(|c| c.range_rows());

    view! {
        <div class="range-summary">
            <h3>"Valid Ranges"</h3>
            {move || {
                rows()
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="range-item">
                                <strong>{row.name}</strong>
                                " "
                                {row.range}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
