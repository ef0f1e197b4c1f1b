use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Gradecast"</h1>
            <span class="subtitle">"Student Performance Predictor"</span>
        </header>
    }
}
