use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavTabs() -> impl IntoView {
    view! {
        <nav class="nav-tabs">
            <A href="/" attr:class="nav-tab">"Predict"</A>
            <A href="/insights" attr:class="nav-tab">"Insights"</A>
        </nav>
    }
}
