use gradecast_core::format::format_number;
use gradecast_core::{Controller, FieldSpec};
use leptos::logging;
use leptos::prelude::*;

use crate::api;

#[component]
pub fn PredictionForm(controller: RwSignal<Controller>) -> impl IntoView {
    let fields = controller.with_untracked(|c| c.form().schema().fields.clone());
    let (check_message, set_check_message) = signal(None::<String>);
    let loading = move || controller.with(|c| c.view().is_loading());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_check_message.set(None);

        let mut submission = None;
        controller.update(|c| submission = c.submit());
        let Some(submission) = submission else { return };

        wasm_bindgen_futures::spawn_local(async move {
            let seq = submission.seq;
            let outcome = api::predict(submission).await;
            controller.update(|c| {
                c.complete(seq, outcome);
            });
        });
    };

    let fill_sample = move |_| {
        set_check_message.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let sample = api::fetch_sample().await;
            controller.update(|c| {
                let written = c.apply_sample(sample);
                logging::log!("Filled {} fields from sample", written.len());
            });
        });
    };

    let validate_inputs = move |_| {
        let mut message = String::new();
        controller.update(|c| message = c.check_inputs().message);
        set_check_message.set(Some(message));
    };

    let reset = move |_| {
        set_check_message.set(None);
        controller.update(|c| c.reset());
    };

    view! {
        <form class="prediction-form" on:submit=on_submit>
            <div class="form-grid">
                {fields
                    .into_iter()
                    .map(|field| {
                        if field.is_number() {
                            view! { <NumberField controller field /> }.into_any()
                        } else {
                            view! { <ToggleField controller field /> }.into_any()
                        }
                    })
                    .collect_view()}
            </div>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=loading>
                    {move || if loading() { "Predicting..." } else { "Predict Performance" }}
                </button>
                <button type="button" class="btn" on:click=fill_sample>"Fill Sample Data"</button>
                <button type="button" class="btn" on:click=validate_inputs>"Validate Inputs"</button>
                <button type="button" class="btn" on:click=reset>"Reset"</button>
            </div>

            {move || check_message.get().map(|m| view! { <div class="input-check">{m}</div> })}
        </form>
    }
}

#[component]
fn NumberField(controller: RwSignal<Controller>, field: FieldSpec) -> impl IntoView {
    let name = StoredValue::new(field.name.clone());
    let (min, max, step) = match &field.constraint {
        Some(c) => (
            format_number(c.min()),
            format_number(c.max()),
            c.step().map(format_number).unwrap_or_else(|| "any".to_string()),
        ),
        None => (String::new(), String::new(), "any".to_string()),
    };

    let value = move || {
        controller.with(|c| {
            name.with_value(|n| c.form().value(n).unwrap_or_default().to_string())
        })
    };
    let diagnostic = move || {
        controller.with(|c| {
            name.with_value(|n| {
                c.form()
                    .result(n)
                    .and_then(|r| r.diagnostic())
                    .map(str::to_string)
            })
        })
    };
    let highlighted = move || diagnostic().is_some();

    let on_input = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        controller.update(|c| {
            name.with_value(|n| {
                c.input(n, raw);
            })
        });
    };
    let on_blur = move |_| {
        controller.update(|c| {
            name.with_value(|n| {
                c.blur(n);
            })
        });
    };

    view! {
        <div class="form-field">
            <label for=field.name.clone()>{field.label.clone()}</label>
            <input
                type="number"
                id=field.name.clone()
                name=field.name.clone()
                min=min
                max=max
                step=step
                class:range-highlight=highlighted
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
            {move || diagnostic().map(|d| view! { <div class="input-error show">{d}</div> })}
        </div>
    }
}

#[component]
fn ToggleField(controller: RwSignal<Controller>, field: FieldSpec) -> impl IntoView {
    let name = StoredValue::new(field.name.clone());
    let value = move || {
        controller.with(|c| {
            name.with_value(|n| c.form().value(n).unwrap_or_default().to_string())
        })
    };
    let on_change = move |ev: web_sys::Event| {
        let raw = event_target_value(&ev);
        controller.update(|c| {
            name.with_value(|n| {
                c.input(n, raw);
            })
        });
    };

    view! {
        <div class="form-field">
            <label for=field.name.clone()>{field.label.clone()}</label>
            <select id=field.name.clone() name=field.name.clone() prop:value=value on:change=on_change>
                <option value="">"Select"</option>
                <option value="0">"No"</option>
                <option value="1">"Yes"</option>
            </select>
        </div>
    }
}
