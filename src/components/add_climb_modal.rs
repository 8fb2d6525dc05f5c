//! Modal dialog for logging a climb into the logbook.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::{ClimbType, CreateClimbRequest};
use crate::state::climbs::ClimbsState;
use crate::util::date;

/// Climb entry form. On submit the climb is created and the list
/// refetched; a failure stays inline so the entered values survive.
#[component]
pub fn AddClimbModal(user_id: Memo<Option<i64>>, on_close: Callback<()>) -> impl IntoView {
    let climbs = expect_context::<RwSignal<ClimbsState>>();

    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let climb_type = RwSignal::new("indoor".to_owned());
    let climb_date = RwSignal::new(date::today());
    let grade = RwSignal::new(String::new());
    let style = RwSignal::new(String::new());
    let completed = RwSignal::new(false);
    let attempts = RwSignal::new("1".to_owned());
    let falls = RwSignal::new("0".to_owned());
    let rating = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let grade_value = grade.get();
        if grade_value.trim().is_empty() {
            error.set(Some("Grade is required".to_owned()));
            return;
        }

        let request = CreateClimbRequest {
            climb_type: parse_climb_type(&climb_type.get()),
            climb_date: date::to_midday_utc(&climb_date.get()),
            grade: grade_value.trim().to_owned(),
            style: non_empty(style.get()),
            route_id: None,
            gym_id: None,
            completed: completed.get(),
            attempts: attempts.get().parse().unwrap_or(1),
            falls: falls.get().parse().unwrap_or(0),
            rating: rating.get().parse().ok(),
            notes: non_empty(notes.get()),
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(user_id) = user_id.get_untracked() else {
                return;
            };
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::state::climbs::create(climbs, user_id, &request).await;
                submitting.set(false);
                match result {
                    Ok(()) => on_close.run(()),
                    Err(message) => error.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, user_id, climbs);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Log a Climb"</h2>
                <form on:submit=submit>
                    {move || error.get().map(|message| view! { <ErrorBanner message=message/> })}

                    <label class="dialog__label">
                        "Type"
                        <select
                            class="dialog__input"
                            on:change=move |ev| climb_type.set(event_target_value(&ev))
                        >
                            <option value="indoor" selected=move || climb_type.get() == "indoor">
                                "Indoor"
                            </option>
                            <option value="outdoor" selected=move || climb_type.get() == "outdoor">
                                "Outdoor"
                            </option>
                        </select>
                    </label>

                    <label class="dialog__label">
                        "Date"
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || climb_date.get()
                            on:input=move |ev| climb_date.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Grade"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="V4, 5.11a, 6b+..."
                            prop:value=move || grade.get()
                            on:input=move |ev| grade.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Style (optional)"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Crimpy, overhang, slab..."
                            prop:value=move || style.get()
                            on:input=move |ev| style.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label dialog__label--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || completed.get()
                            on:change=move |ev| completed.set(event_target_checked(&ev))
                        />
                        "Sent it"
                    </label>

                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Attempts"
                            <input
                                class="dialog__input"
                                type="number"
                                min="1"
                                prop:value=move || attempts.get()
                                on:input=move |ev| attempts.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Falls"
                            <input
                                class="dialog__input"
                                type="number"
                                min="0"
                                prop:value=move || falls.get()
                                on:input=move |ev| falls.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <label class="dialog__label">
                        "Rating (optional)"
                        <select
                            class="dialog__input"
                            on:change=move |ev| rating.set(event_target_value(&ev))
                        >
                            <option value="">"No rating"</option>
                            <option value="1">"1 star"</option>
                            <option value="2">"2 stars"</option>
                            <option value="3">"3 stars"</option>
                            <option value="4">"4 stars"</option>
                            <option value="5">"5 stars"</option>
                        </select>
                    </label>

                    <label class="dialog__label">
                        "Notes (optional)"
                        <textarea
                            class="dialog__input"
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            prop:disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Saving..." } else { "Add Climb" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn parse_climb_type(value: &str) -> ClimbType {
    if value == "outdoor" {
        ClimbType::Outdoor
    } else {
        ClimbType::Indoor
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
