//! Training page: session list with nested boulder/rope-climb records and
//! the add-session modal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::add_training_session_modal::AddTrainingSessionModal;
use crate::components::layout::AuthenticatedLayout;
use crate::net::types::{RopeClimbType, TrainingSession};
use crate::state::auth::AuthState;
use crate::state::gyms::GymsState;
use crate::state::training::TrainingState;

/// Training session history. Sessions are scoped server-side by the
/// cookie session, so fetching starts as soon as the page mounts.
#[component]
pub fn TrainingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let training = expect_context::<RwSignal<TrainingState>>();
    let gyms = expect_context::<RwSignal<GymsState>>();
    let navigate = use_navigate();

    let show_add = RwSignal::new(false);

    // Redirect to signin if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user().is_none() {
            navigate("/signin", NavigateOptions::default());
        }
    });

    // Sessions plus the gym directory for the modal's picker.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(crate::state::training::fetch(training));
            leptos::task::spawn_local(crate::state::gyms::fetch(gyms));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (training, gyms);
    });

    let on_close = Callback::new(move |()| show_add.set(false));

    let session_list = move || {
        let state = training.get();
        if state.loading {
            return view! { <p class="muted">"Loading..."</p> }.into_any();
        }
        if let Some(message) = state.error {
            return view! { <p class="error-line">{message}</p> }.into_any();
        }
        if state.items.is_empty() {
            return view! {
                <div class="empty-state">
                    <p>"No training sessions logged yet. Start tracking your gym sessions!"</p>
                    <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                        "Log Your First Session"
                    </button>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="session-list">
                {state.items.into_iter().map(session_card).collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    view! {
        <AuthenticatedLayout>
            <div class="training-page">
                <header class="training-page__header">
                    <h1>"Training Sessions"</h1>
                    <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                        "+ Log Session"
                    </button>
                </header>

                {session_list}

                <Show when=move || show_add.get()>
                    <AddTrainingSessionModal on_close=on_close/>
                </Show>
            </div>
        </AuthenticatedLayout>
    }
}

fn session_card(session: TrainingSession) -> impl IntoView {
    let gym_name = session
        .gym
        .as_ref()
        .map_or_else(|| "Unknown Gym".to_owned(), |g| g.name.clone());
    let gym_city = session.gym.as_ref().and_then(|g| g.city.clone());
    let day = session
        .session_date
        .split('T')
        .next()
        .unwrap_or_default()
        .to_owned();
    let totals = format!("{} climbs, {} sends", session.total_climbs, session.total_sends);

    let partners = (!session.partners.is_empty()).then(|| {
        let names = session
            .partners
            .iter()
            .map(|p| p.username.clone())
            .collect::<Vec<_>>()
            .join(", ");
        view! { <p class="session-card__partners">{format!("With {names}")}</p> }
    });

    let boulders = (!session.boulders.is_empty()).then(|| {
        let count = session.boulders.len();
        let rows = session
            .boulders
            .iter()
            .map(|b| {
                let label = format!("{} ({:?})", b.grade, b.outcome);
                view! { <li>{label}</li> }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="session-card__records">
                <h4>{format!("Boulders ({count})")}</h4>
                <ul>{rows}</ul>
            </div>
        }
    });

    let rope_climbs = (!session.rope_climbs.is_empty()).then(|| {
        let count = session.rope_climbs.len();
        let rows = session
            .rope_climbs
            .iter()
            .map(|r| {
                let kind = match r.climb_type {
                    RopeClimbType::TopRope => "TR",
                    RopeClimbType::Lead => "Lead",
                };
                let label = format!("{} {} ({:?})", kind, r.grade, r.outcome);
                view! { <li>{label}</li> }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="session-card__records">
                <h4>{format!("Rope Climbs ({count})")}</h4>
                <ul>{rows}</ul>
            </div>
        }
    });

    view! {
        <div class="session-card">
            <div class="session-card__header">
                <div>
                    <h3>{gym_name}</h3>
                    <p class="session-card__date">{day}</p>
                    {gym_city.map(|city| view! { <p class="session-card__city">{city}</p> })}
                </div>
                <span class="session-card__totals">{totals}</span>
            </div>
            {session
                .description
                .map(|text| view! { <p class="session-card__description">{text}</p> })}
            {partners}
            {boulders}
            {rope_climbs}
        </div>
    }
}
