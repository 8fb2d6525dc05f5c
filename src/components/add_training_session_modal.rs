//! Modal dialog for logging a training session, with dynamic rows of
//! nested boulder and rope-climb records.

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::{
    BoulderOutcome, BoulderRequest, CreateTrainingSessionRequest, RopeClimbOutcome,
    RopeClimbRequest, RopeClimbType,
};
use crate::state::gyms::GymsState;
use crate::state::training::TrainingState;
use crate::util::date;

/// One editable boulder row. Rows get a client-side key so re-renders
/// keep edits attached to the right record.
#[derive(Clone, Debug, PartialEq)]
struct BoulderForm {
    key: Uuid,
    grade: String,
    color_tag: String,
    outcome: String,
    notes: String,
}

impl BoulderForm {
    fn new() -> Self {
        Self {
            key: Uuid::new_v4(),
            grade: String::new(),
            color_tag: String::new(),
            outcome: "Fell".to_owned(),
            notes: String::new(),
        }
    }
}

/// One editable rope-climb row.
#[derive(Clone, Debug, PartialEq)]
struct RopeClimbForm {
    key: Uuid,
    climb_type: String,
    grade: String,
    outcome: String,
    notes: String,
}

impl RopeClimbForm {
    fn new() -> Self {
        Self {
            key: Uuid::new_v4(),
            climb_type: "TR".to_owned(),
            grade: String::new(),
            outcome: "Fell".to_owned(),
            notes: String::new(),
        }
    }
}

/// Training session entry form: gym, date, description, and any number of
/// boulder/rope-climb rows. Rows without a grade are dropped on submit.
#[component]
pub fn AddTrainingSessionModal(on_close: Callback<()>) -> impl IntoView {
    let training = expect_context::<RwSignal<TrainingState>>();
    let gyms = expect_context::<RwSignal<GymsState>>();

    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let gym_id = RwSignal::new(String::new());
    let session_date = RwSignal::new(date::today());
    let description = RwSignal::new(String::new());
    let boulders = RwSignal::new(Vec::<BoulderForm>::new());
    let rope_climbs = RwSignal::new(Vec::<RopeClimbForm>::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let Ok(gym_id_value) = gym_id.get().parse::<i64>() else {
            error.set(Some("Select a gym".to_owned()));
            return;
        };
        let date_value = session_date.get();
        if date_value.is_empty() {
            error.set(Some("Session date is required".to_owned()));
            return;
        }

        let request = CreateTrainingSessionRequest {
            gym_id: gym_id_value,
            session_date: date::to_midday_utc(&date_value),
            description: non_empty(description.get()),
            partner_ids: None,
            boulders: boulders
                .get()
                .into_iter()
                .filter(|b| !b.grade.trim().is_empty())
                .map(|b| BoulderRequest {
                    grade: b.grade.trim().to_owned(),
                    color_tag: non_empty(b.color_tag),
                    outcome: parse_boulder_outcome(&b.outcome),
                    notes: non_empty(b.notes),
                })
                .collect(),
            rope_climbs: rope_climbs
                .get()
                .into_iter()
                .filter(|r| !r.grade.trim().is_empty())
                .map(|r| RopeClimbRequest {
                    climb_type: parse_rope_type(&r.climb_type),
                    grade: r.grade.trim().to_owned(),
                    outcome: parse_rope_outcome(&r.outcome),
                    notes: non_empty(r.notes),
                })
                .collect(),
        };

        #[cfg(feature = "hydrate")]
        {
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = crate::state::training::create(training, &request).await;
                submitting.set(false);
                match result {
                    Ok(()) => on_close.run(()),
                    Err(message) => error.set(Some(message)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, training);
    };

    let gym_options = move || {
        gyms.get()
            .items
            .into_iter()
            .map(|gym| {
                let id = gym.id.to_string();
                let selected = gym_id.get() == id;
                view! {
                    <option value=id.clone() selected=selected>
                        {format!("{} ({})", gym.name, gym.city)}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };

    let boulder_rows = move || {
        boulders
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                view! {
                    <div class="dialog__subrecord">
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Grade (V3...)"
                            prop:value=row.grade.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                boulders.update(|v| {
                                    if let Some(b) = v.get_mut(i) {
                                        b.grade = value;
                                    }
                                });
                            }
                        />
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Color tag"
                            prop:value=row.color_tag.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                boulders.update(|v| {
                                    if let Some(b) = v.get_mut(i) {
                                        b.color_tag = value;
                                    }
                                });
                            }
                        />
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                boulders.update(|v| {
                                    if let Some(b) = v.get_mut(i) {
                                        b.outcome = value;
                                    }
                                });
                            }
                        >
                            {boulder_outcome_options(&row.outcome)}
                        </select>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Notes"
                            prop:value=row.notes.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                boulders.update(|v| {
                                    if let Some(b) = v.get_mut(i) {
                                        b.notes = value;
                                    }
                                });
                            }
                        />
                        <button
                            type="button"
                            class="btn btn--ghost"
                            on:click=move |_| {
                                boulders.update(|v| {
                                    if i < v.len() {
                                        v.remove(i);
                                    }
                                });
                            }
                        >
                            "Remove"
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let rope_rows = move || {
        rope_climbs
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                view! {
                    <div class="dialog__subrecord">
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                rope_climbs.update(|v| {
                                    if let Some(r) = v.get_mut(i) {
                                        r.climb_type = value;
                                    }
                                });
                            }
                        >
                            <option value="TR" selected=row.climb_type == "TR">
                                "Top rope"
                            </option>
                            <option value="Lead" selected=row.climb_type == "Lead">
                                "Lead"
                            </option>
                        </select>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Grade (5.11a...)"
                            prop:value=row.grade.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                rope_climbs.update(|v| {
                                    if let Some(r) = v.get_mut(i) {
                                        r.grade = value;
                                    }
                                });
                            }
                        />
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                rope_climbs.update(|v| {
                                    if let Some(r) = v.get_mut(i) {
                                        r.outcome = value;
                                    }
                                });
                            }
                        >
                            {rope_outcome_options(&row.outcome)}
                        </select>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Notes"
                            prop:value=row.notes.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                rope_climbs.update(|v| {
                                    if let Some(r) = v.get_mut(i) {
                                        r.notes = value;
                                    }
                                });
                            }
                        />
                        <button
                            type="button"
                            class="btn btn--ghost"
                            on:click=move |_| {
                                rope_climbs.update(|v| {
                                    if i < v.len() {
                                        v.remove(i);
                                    }
                                });
                            }
                        >
                            "Remove"
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Log a Training Session"</h2>
                <form on:submit=submit>
                    {move || error.get().map(|message| view! { <ErrorBanner message=message/> })}

                    <label class="dialog__label">
                        "Gym"
                        <select
                            class="dialog__input"
                            on:change=move |ev| gym_id.set(event_target_value(&ev))
                        >
                            <option value="">"Select a gym..."</option>
                            {gym_options}
                        </select>
                    </label>

                    <label class="dialog__label">
                        "Date"
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || session_date.get()
                            on:input=move |ev| session_date.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="dialog__label">
                        "Description (optional)"
                        <textarea
                            class="dialog__input"
                            placeholder="Power endurance, campus board..."
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="dialog__section">
                        <div class="dialog__section-header">
                            <h3>"Boulders"</h3>
                            <button
                                type="button"
                                class="btn"
                                on:click=move |_| boulders.update(|v| v.push(BoulderForm::new()))
                            >
                                "+ Boulder"
                            </button>
                        </div>
                        {boulder_rows}
                    </div>

                    <div class="dialog__section">
                        <div class="dialog__section-header">
                            <h3>"Rope Climbs"</h3>
                            <button
                                type="button"
                                class="btn"
                                on:click=move |_| {
                                    rope_climbs.update(|v| v.push(RopeClimbForm::new()));
                                }
                            >
                                "+ Rope Climb"
                            </button>
                        </div>
                        {rope_rows}
                    </div>

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            prop:disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Saving..." } else { "Log Session" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn boulder_outcome_options(current: &str) -> Vec<impl IntoView + use<>> {
    ["Fell", "Flash", "Onsite", "Redpoint"]
        .into_iter()
        .map(|outcome| {
            let selected = outcome == current;
            view! {
                <option value=outcome selected=selected>
                    {outcome}
                </option>
            }
        })
        .collect()
}

fn rope_outcome_options(current: &str) -> Vec<impl IntoView + use<>> {
    ["Fell", "Hung", "Flash", "Onsite", "Redpoint"]
        .into_iter()
        .map(|outcome| {
            let selected = outcome == current;
            view! {
                <option value=outcome selected=selected>
                    {outcome}
                </option>
            }
        })
        .collect()
}

fn parse_boulder_outcome(value: &str) -> BoulderOutcome {
    match value {
        "Flash" => BoulderOutcome::Flash,
        "Onsite" => BoulderOutcome::Onsite,
        "Redpoint" => BoulderOutcome::Redpoint,
        _ => BoulderOutcome::Fell,
    }
}

fn parse_rope_type(value: &str) -> RopeClimbType {
    if value == "Lead" {
        RopeClimbType::Lead
    } else {
        RopeClimbType::TopRope
    }
}

fn parse_rope_outcome(value: &str) -> RopeClimbOutcome {
    match value {
        "Hung" => RopeClimbOutcome::Hung,
        "Flash" => RopeClimbOutcome::Flash,
        "Onsite" => RopeClimbOutcome::Onsite,
        "Redpoint" => RopeClimbOutcome::Redpoint,
        _ => RopeClimbOutcome::Fell,
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
