//! Dashboard page: summary statistics over the user's logbook.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::AuthenticatedLayout;
use crate::components::stat_card::StatCard;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::climbs::ClimbsState;
use crate::stats;

/// Summary stats for the signed-in user. Redirects to `/signin` once the
/// session check resolves unauthenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let climbs = expect_context::<RwSignal<ClimbsState>>();
    let navigate = use_navigate();

    // Redirect to signin if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user().is_none() {
            navigate("/signin", NavigateOptions::default());
        }
    });

    // Refetch whenever the scoping user id changes; no id yet resolves to
    // an empty, non-loading list.
    let user_id = Memo::new(move |_| auth.get().user().and_then(User::numeric_id));
    Effect::new(move || {
        let id = user_id.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::state::climbs::fetch(climbs, id));
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, climbs);
    });

    let total = Signal::derive(move || climbs.get().items.len().to_string());
    let sends = Signal::derive(move || stats::completed_count(&climbs.get().items).to_string());
    let active_days =
        Signal::derive(move || stats::unique_active_days(&climbs.get().items).to_string());

    view! {
        <AuthenticatedLayout>
            <div class="dashboard-page">
                <h1>"Dashboard"</h1>
                <p class="dashboard-page__greeting">
                    {move || {
                        auth.get()
                            .user()
                            .map(|u| format!("Welcome back, {}!", u.display_name()))
                            .unwrap_or_default()
                    }}
                </p>

                <Show
                    when=move || !climbs.get().loading
                    fallback=|| view! { <p class="muted">"Loading..."</p> }
                >
                    {move || {
                        climbs
                            .get()
                            .error
                            .map(|message| view! { <p class="error-line">{message}</p> })
                    }}
                    <div class="dashboard-page__stats">
                        <StatCard label="Total Climbs" value=total/>
                        <StatCard label="Sends" value=sends/>
                        <StatCard label="Active Days" value=active_days/>
                    </div>
                </Show>

                <div class="dashboard-page__links">
                    <a class="btn btn--primary" href="/logbook">
                        "Open Logbook"
                    </a>
                    <a class="btn" href="/training">
                        "Training Sessions"
                    </a>
                </div>
            </div>
        </AuthenticatedLayout>
    }
}
