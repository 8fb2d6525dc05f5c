//! Inline error banner shown above forms and in place of list data.

use leptos::prelude::*;

/// A short human-readable failure line.
#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <p class="error-banner__message">{message}</p>
        </div>
    }
}
