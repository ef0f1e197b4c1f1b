use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::header::Header;
use crate::components::nav::NavTabs;
use crate::pages::{insights::InsightsPage, predict::PredictPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Header />
                <NavTabs />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=PredictPage />
                        <Route path=path!("/insights") view=InsightsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
