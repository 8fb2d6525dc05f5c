//! Landing page with sign-in and registration entry points.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Public landing page. Signed-in visitors get a direct dashboard link
/// instead of the sign-in buttons.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <header class="home-page__hero">
                <h1>"Cragtrack"</h1>
                <p>"Log your climbs. Track your training. See your progress."</p>
            </header>

            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| {
                    view! {
                        <div class="home-page__actions">
                            <a class="btn btn--primary" href="/signin">
                                "Sign In"
                            </a>
                            <a class="btn" href="/register">
                                "Create Account"
                            </a>
                        </div>
                    }
                }
            >
                <div class="home-page__actions">
                    <a class="btn btn--primary" href="/dashboard">
                        "Go to Dashboard"
                    </a>
                </div>
            </Show>

            <section class="home-page__features">
                <div class="feature-card">
                    <h3>"Logbook"</h3>
                    <p>"Every send and every attempt, indoor and out."</p>
                </div>
                <div class="feature-card">
                    <h3>"Training"</h3>
                    <p>"Gym sessions with boulders, rope climbs, and partners."</p>
                </div>
                <div class="feature-card">
                    <h3>"Progress"</h3>
                    <p>"Sends, active days, and trends at a glance."</p>
                </div>
            </section>
        </div>
    }
}
