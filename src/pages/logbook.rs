//! Logbook page: the climb list with the add-climb modal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::add_climb_modal::AddClimbModal;
use crate::components::layout::AuthenticatedLayout;
use crate::net::types::{Climb, ClimbType, User};
use crate::state::auth::AuthState;
use crate::state::climbs::ClimbsState;

/// Climb list for the signed-in user, newest first as served. A failed
/// fetch shows an error line in place of the list.
#[component]
pub fn LogbookPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let climbs = expect_context::<RwSignal<ClimbsState>>();
    let navigate = use_navigate();

    let show_add = RwSignal::new(false);

    // Redirect to signin if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user().is_none() {
            navigate("/signin", NavigateOptions::default());
        }
    });

    let user_id = Memo::new(move |_| auth.get().user().and_then(User::numeric_id));
    Effect::new(move || {
        let id = user_id.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::state::climbs::fetch(climbs, id));
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, climbs);
    });

    let on_close = Callback::new(move |()| show_add.set(false));

    let climb_list = move || {
        let state = climbs.get();
        if state.loading {
            return view! { <p class="muted">"Loading..."</p> }.into_any();
        }
        if let Some(message) = state.error {
            return view! { <p class="error-line">{message}</p> }.into_any();
        }
        if state.items.is_empty() {
            return view! {
                <div class="empty-state">
                    <p>"No climbs logged yet. Get after it!"</p>
                    <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                        "Log Your First Climb"
                    </button>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="climb-list">
                {state.items.into_iter().map(climb_row).collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    view! {
        <AuthenticatedLayout>
            <div class="logbook-page">
                <header class="logbook-page__header">
                    <h1>"Logbook"</h1>
                    <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                        "+ Log Climb"
                    </button>
                </header>

                {climb_list}

                <Show when=move || show_add.get()>
                    <AddClimbModal user_id=user_id on_close=on_close/>
                </Show>
            </div>
        </AuthenticatedLayout>
    }
}

fn climb_row(climb: Climb) -> impl IntoView {
    let type_label = match climb.climb_type {
        ClimbType::Indoor => "Indoor",
        ClimbType::Outdoor => "Outdoor",
    };
    let day = climb
        .climb_date
        .split('T')
        .next()
        .unwrap_or_default()
        .to_owned();
    let result = if climb.completed { "Sent" } else { "Attempted" };
    let counts = format!("{} attempts, {} falls", climb.attempts, climb.falls);

    view! {
        <div class="climb-row">
            <div class="climb-row__main">
                <span class="climb-row__grade">{climb.grade}</span>
                <span class="climb-row__type">{type_label}</span>
                <span class=if climb.completed {
                    "climb-row__result climb-row__result--sent"
                } else {
                    "climb-row__result"
                }>{result}</span>
            </div>
            <div class="climb-row__meta">
                <span>{day}</span>
                <span>{counts}</span>
                {climb.style.map(|style| view! { <span>{style}</span> })}
            </div>
            {climb.notes.map(|notes| view! { <p class="climb-row__notes">{notes}</p> })}
        </div>
    }
}
