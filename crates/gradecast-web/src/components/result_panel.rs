use gradecast_core::{Controller, GradecastError, ResultView, ViewState};
use leptos::prelude::*;

/// Shows exactly one of loading, result, or error for the current view.
#[component]
pub fn ResultPanel(controller: RwSignal<Controller>) -> impl IntoView {
    move || {
        controller.with(|c| match c.view() {
            ViewState::Idle => ().into_any(),
            ViewState::Loading => view! {
                <div class="loading">
                    <div class="spinner"></div>
                    <p>"Analyzing student data..."</p>
                </div>
            }
            .into_any(),
            ViewState::Result(_) => match c.view().result_view() {
                Some(result) => view! { <ResultCard result /> }.into_any(),
                None => ().into_any(),
            },
            ViewState::Error(e) => view! { <ErrorBanner error=e.clone() /> }.into_any(),
        })
    }
}

#[component]
fn ResultCard(result: ResultView) -> impl IntoView {
    let badge_class = format!("prediction-badge {}", result.badge.style);

    view! {
        <div class="result">
            <h3>"Predicted Performance"</h3>
            <div class=badge_class>{result.badge.text}</div>

            <div class="probability-chart">
                {result
                    .bars
                    .into_iter()
                    .map(|bar| {
                        let fill_class = format!("probability-fill {}", bar.style);
                        let width = format!("{}%", bar.width);
                        view! {
                            <div class="probability-bar-container">
                                <div class="probability-label">{bar.category}</div>
                                <div class="probability-bar">
                                    <div class=fill_class style:width=width></div>
                                </div>
                                <div class="probability-value">{bar.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="feature-summary">
                {result
                    .features
                    .into_iter()
                    .map(|f| {
                        view! {
                            <div class="feature-item">
                                <span class="feature-name">{f.name}</span>
                                <span class="feature-value">{f.value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ErrorBanner(error: GradecastError) -> impl IntoView {
    let details = error.details().to_vec();

    view! {
        <div class="error">
            <p class="error-text">{error.to_string()}</p>
            {(!details.is_empty())
                .then(|| {
                    view! {
                        <ul class="error-details">
                            {details.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                        </ul>
                    }
                })}
        </div>
    }
}
