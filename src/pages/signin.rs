//! Sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::LoginCredentials;
use crate::state::auth::AuthState;

/// Email/password sign-in form. A request failure stays inline; success
/// navigates to the dashboard.
#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginCredentials {
            email: email.get(),
            password: password.get(),
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if crate::state::auth::login(auth, &credentials).await.is_ok() {
                    navigate("/dashboard", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, &navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <a class="auth-page__brand" href="/">
                    "Cragtrack"
                </a>
                <p class="auth-page__subtitle">"Sign in to your account"</p>

                <form on:submit=submit>
                    {move || {
                        auth.get().error.map(|err| view! { <ErrorBanner message=err.message/> })
                    }}

                    <label class="auth-page__label">
                        "Email address"
                        <input
                            class="auth-page__input"
                            type="email"
                            required
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-page__label">
                        "Password"
                        <input
                            class="auth-page__input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <button
                        type="submit"
                        class="btn btn--primary btn--block"
                        prop:disabled=move || auth.get().loading
                    >
                        {move || if auth.get().loading { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-page__switch">
                    "New to Cragtrack? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
