//! Authenticated page chrome: top navigation with the signed-in user's
//! display name and a logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Navigation shell wrapped around every signed-in page.
#[component]
pub fn AuthenticatedLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let display_name = move || {
        auth.get()
            .user()
            .map(crate::net::types::User::display_name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::auth::logout(auth).await;
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    };

    view! {
        <div class="app-shell">
            <nav class="app-nav">
                <a class="app-nav__brand" href="/dashboard">"Cragtrack"</a>
                <div class="app-nav__links">
                    <a href="/dashboard">"Dashboard"</a>
                    <a href="/logbook">"Logbook"</a>
                    <a href="/training">"Training"</a>
                    <a href="/profile">"Profile"</a>
                </div>
                <div class="app-nav__session">
                    <span class="app-nav__user">{display_name}</span>
                    <button class="btn btn--accent" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </nav>
            <main class="app-main">{children()}</main>
        </div>
    }
}
