use gradecast_core::{render_dataset_stats, render_gpa_bands, GpaBandRow, StatsRow};
use leptos::prelude::*;

use crate::api;

#[component]
pub fn InsightsPage() -> impl IntoView {
    let (bands, set_bands) = signal(Vec::<GpaBandRow>::new());
    let (stats, set_stats) = signal(Vec::<StatsRow>::new());
    let (error, set_error) = signal(None::<String>);

    Effect::new(move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_gpa_bands().await {
                Ok(b) => set_bands.set(render_gpa_bands(&b)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            match api::fetch_dataset_stats().await {
                Ok(s) => set_stats.set(render_dataset_stats(&s)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    view! {
        <div class="page insights-page">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <h2>"Performance Categories"</h2>
            <div class="gpa-bands">
                {move || {
                    bands
                        .get()
                        .into_iter()
                        .map(|row| {
                            let class = format!("gpa-band {}", row.style);
                            view! {
                                <div class=class>
                                    <strong>{row.category}</strong>
                                    <span class="gpa-range">{row.range}</span>
                                    <p>{row.description}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <h2>"Dataset Statistics"</h2>
            <table class="stats-table">
                <thead>
                    <tr>
                        <th>"Feature"</th>
                        <th>"Min"</th>
                        <th>"Max"</th>
                        <th>"Mean"</th>
                        <th>"Median"</th>
                        <th>"Std"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        stats
                            .get()
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <tr>
                                        <td>{r.name}</td>
                                        <td>{r.min}</td>
                                        <td>{r.max}</td>
                                        <td>{r.mean}</td>
                                        <td>{r.median}</td>
                                        <td>{r.std}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
