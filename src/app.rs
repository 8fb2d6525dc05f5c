//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, home::HomePage, logbook::LogbookPage, profile::ProfilePage,
    register::RegisterPage, signin::SignInPage, training::TrainingPage,
};
use crate::state::auth::AuthState;
use crate::state::climbs::ClimbsState;
use crate::state::gyms::GymsState;
use crate::state::training::TrainingState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the session manager and resource stores, provides them
/// through context, and verifies the cookie session once on mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let climbs = RwSignal::new(ClimbsState::default());
    let gyms = RwSignal::new(GymsState::default());
    let training = RwSignal::new(TrainingState::default());

    provide_context(auth);
    provide_context(climbs);
    provide_context(gyms);
    provide_context(training);

    // One-time session verification; a failure here is the expected
    // "no cookie" case and leaves no error behind.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::state::auth::init(auth));
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/cragtrack.css"/>
        <Title text="Cragtrack"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("logbook") view=LogbookPage/>
                <Route path=StaticSegment("training") view=TrainingPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
