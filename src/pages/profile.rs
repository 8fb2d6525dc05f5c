//! Profile page: edit account fields and upload a profile picture.

use leptos::html;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::layout::AuthenticatedLayout;
use crate::net::types::UpdateUserFields;
use crate::state::auth::AuthState;

/// Account settings form, prefilled from the current session. Only fields
/// the user actually changed are sent; attaching a picture switches the
/// request to multipart.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let saved = RwSignal::new(false);
    let picture_input = NodeRef::<html::Input>::new();

    // Redirect to signin if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user().is_none() {
            navigate("/signin", NavigateOptions::default());
        }
    });

    // Prefill once the session resolves; later session updates (a
    // successful save) re-run this and keep the form in sync.
    Effect::new(move || {
        if let Some(user) = auth.get().user() {
            username.set(user.username.clone());
            email.set(user.email.clone());
            first_name.set(user.first_name.clone().unwrap_or_default());
            last_name.set(user.last_name.clone().unwrap_or_default());
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        saved.set(false);

        let current = auth.get_untracked();
        let Some(user) = current.user() else {
            return;
        };

        let fields = UpdateUserFields {
            email: changed(&email.get(), &user.email),
            username: changed(&username.get(), &user.username),
            first_name: changed(
                &first_name.get(),
                user.first_name.as_deref().unwrap_or_default(),
            ),
            last_name: changed(
                &last_name.get(),
                user.last_name.as_deref().unwrap_or_default(),
            ),
        };

        #[cfg(feature = "hydrate")]
        {
            let picture = picture_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            leptos::task::spawn_local(async move {
                if crate::state::auth::update_user(auth, &fields, picture).await.is_ok() {
                    saved.set(true);
                    if let Some(input) = picture_input.get_untracked() {
                        input.set_value("");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = fields;
    };

    let current_picture = move || {
        auth.get()
            .user()
            .and_then(|user| user.profile_picture.clone())
            .map(|url| {
                view! { <img class="profile-page__picture" src=url alt="Profile picture"/> }
            })
    };

    view! {
        <AuthenticatedLayout>
            <div class="profile-page">
                <h1>"Profile"</h1>

                <form class="profile-page__form" on:submit=submit>
                    {move || {
                        auth.get().error.map(|err| view! { <ErrorBanner message=err.message/> })
                    }}
                    <Show when=move || saved.get()>
                        <p class="profile-page__saved">"Profile updated."</p>
                    </Show>

                    {current_picture}

                    <label class="auth-page__label">
                        "Username"
                        <input
                            class="auth-page__input"
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-page__label">
                        "Email address"
                        <input
                            class="auth-page__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-page__label">
                        "First Name"
                        <input
                            class="auth-page__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-page__label">
                        "Last Name"
                        <input
                            class="auth-page__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-page__label">
                        "Profile Picture"
                        <input
                            class="auth-page__input"
                            type="file"
                            accept="image/*"
                            node_ref=picture_input
                        />
                    </label>

                    <button
                        type="submit"
                        class="btn btn--primary"
                        prop:disabled=move || auth.get().loading
                    >
                        {move || if auth.get().loading { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </div>
        </AuthenticatedLayout>
    }
}

/// A field is sent only when it differs from what the session holds.
fn changed(current: &str, original: &str) -> Option<String> {
    if current == original {
        None
    } else {
        Some(current.to_owned())
    }
}
