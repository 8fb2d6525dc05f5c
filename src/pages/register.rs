//! Registration page with client-side password validation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::RegisterCredentials;
use crate::state::auth::AuthState;
use crate::util::validate;

/// Account creation form. Password rules are checked before any network
/// call; a validation failure shows its own message and never issues a
/// request.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let validation_error = RwSignal::new(None::<&'static str>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.update(AuthState::clear_error);
        validation_error.set(None);

        if let Err(message) = validate::validate_password(&password.get(), &confirm_password.get())
        {
            validation_error.set(Some(message));
            return;
        }

        let credentials = RegisterCredentials {
            email: email.get(),
            password: password.get(),
            username: username.get(),
            first_name: non_empty(first_name.get()),
            last_name: non_empty(last_name.get()),
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if crate::state::auth::register(auth, &credentials).await.is_ok() {
                    navigate("/dashboard", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, &navigate);
    };

    // Either surface, never both: validation first, then request errors.
    let banner = move || {
        if let Some(message) = validation_error.get() {
            return Some(view! { <ErrorBanner message=message.to_owned()/> });
        }
        auth.get()
            .error
            .map(|err| view! { <ErrorBanner message=err.message/> })
    };

    let loading = move || auth.get().loading;

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <a class="auth-page__brand" href="/">
                    "Cragtrack"
                </a>
                <p class="auth-page__subtitle">"Create your account"</p>

                <form on:submit=submit>
                    {banner}

                    <label class="auth-page__label">
                        "Username"
                        <input
                            class="auth-page__input"
                            type="text"
                            required
                            placeholder="Your username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-page__label">
                        "First Name (optional)"
                        <input
                            class="auth-page__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-page__label">
                        "Last Name (optional)"
                        <input
                            class="auth-page__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>

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
                            placeholder="At least 8 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-page__label">
                        "Confirm Password"
                        <input
                            class="auth-page__input"
                            type="password"
                            required
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>

                    <button type="submit" class="btn btn--primary btn--block" prop:disabled=loading>
                        {move || if loading() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="auth-page__switch">
                    "Already have an account? " <a href="/signin">"Sign in instead"</a>
                </p>
            </div>
        </div>
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}
