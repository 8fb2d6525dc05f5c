//! Training session store: list plus create-then-refetch.

#[cfg(test)]
#[path = "training_test.rs"]
mod training_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::types::{CreateTrainingSessionRequest, TrainingSession};
use crate::services;

#[derive(Clone, Debug, PartialEq)]
pub struct TrainingState {
    pub items: Vec<TrainingSession>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl Default for TrainingState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
        }
    }
}

impl TrainingState {
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub fn fetch_succeeded(&mut self, token: u64, items: Vec<TrainingSession>) {
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

/// Fetch the session list; sessions are scoped by the cookie session, so
/// no key is needed.
pub async fn fetch(training: RwSignal<TrainingState>) {
    let mut token = 0;
    training.update(|s| token = s.begin_fetch());
    match services::training::get_training_sessions(None, None).await {
        Ok(response) => training.update(|s| s.fetch_succeeded(token, response.training_sessions)),
        Err(err) => training.update(|s| s.fetch_failed(token, err.to_string())),
    }
}

/// Log a session, then refetch the list. The error propagates so the
/// modal can show it inline without losing form input.
pub async fn create(
    training: RwSignal<TrainingState>,
    request: &CreateTrainingSessionRequest,
) -> Result<(), String> {
    training.update(|s| s.error = None);
    match services::training::create_training_session(request).await {
        Ok(_) => {
            fetch(training).await;
            Ok(())
        }
        Err(err) => {
            let message = err.to_string();
            training.update(|s| s.error = Some(message.clone()));
            Err(message)
        }
    }
}
