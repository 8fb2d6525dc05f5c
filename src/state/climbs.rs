//! Logbook store: the authenticated user's climbs.
//!
//! Fetches carry a generation token so a response from a superseded fetch
//! is discarded instead of clobbering newer state (the store may also
//! outlive the view that started the request).

#[cfg(test)]
#[path = "climbs_test.rs"]
mod climbs_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::types::{Climb, CreateClimbRequest};
use crate::services;

/// Climb list state scoped to the logbook and dashboard views.
#[derive(Clone, Debug, PartialEq)]
pub struct ClimbsState {
    pub items: Vec<Climb>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl Default for ClimbsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
        }
    }
}

impl ClimbsState {
    /// Start a fetch; returns the token the completion must present.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// No scoping user id yet: resolve to an empty, non-loading list.
    /// Not an error; the session may simply still be verifying.
    pub fn skip_fetch(&mut self) {
        self.loading = false;
    }

    pub fn fetch_succeeded(&mut self, token: u64, items: Vec<Climb>) {
        if token != self.generation {
            return;
        }
        self.items = items;
        self.loading = false;
    }

    pub fn fetch_failed(&mut self, token: u64, message: String) {
        if token != self.generation {
            return;
        }
        self.items = Vec::new();
        self.error = Some(message);
        self.loading = false;
    }
}

/// Fetch the climb list for `user_id`; `None` short-circuits.
pub async fn fetch(climbs: RwSignal<ClimbsState>, user_id: Option<i64>) {
    let Some(user_id) = user_id else {
        climbs.update(ClimbsState::skip_fetch);
        return;
    };
    let mut token = 0;
    climbs.update(|s| token = s.begin_fetch());
    match services::climbs::get_climbs(user_id, None, None).await {
        Ok(response) => climbs.update(|s| s.fetch_succeeded(token, response.climbs)),
        Err(err) => climbs.update(|s| s.fetch_failed(token, err.to_string())),
    }
}

/// Log a climb, then refetch the whole list so the view reflects the
/// server's ordering (no optimistic insert). The error also propagates so
/// the form can show it inline without losing user input.
pub async fn create(
    climbs: RwSignal<ClimbsState>,
    user_id: i64,
    request: &CreateClimbRequest,
) -> Result<(), String> {
    climbs.update(|s| s.error = None);
    match services::climbs::create_climb(request).await {
        Ok(_) => {
            fetch(climbs, Some(user_id)).await;
            Ok(())
        }
        Err(err) => {
            let message = err.to_string();
            climbs.update(|s| s.error = Some(message.clone()));
            Err(message)
        }
    }
}
