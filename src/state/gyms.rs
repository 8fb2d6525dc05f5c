//! Gym directory store, feeding the training-session form's gym picker.

#[cfg(test)]
#[path = "gyms_test.rs"]
mod gyms_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::types::Gym;
use crate::services;

#[derive(Clone, Debug, PartialEq)]
pub struct GymsState {
    pub items: Vec<Gym>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl Default for GymsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            generation: 0,
        }
    }
}

impl GymsState {
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub fn fetch_succeeded(&mut self, token: u64, items: Vec<Gym>) {
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

/// Fetch the gym directory (no scoping key; gyms are global).
pub async fn fetch(gyms: RwSignal<GymsState>) {
    let mut token = 0;
    gyms.update(|s| token = s.begin_fetch());
    match services::gyms::get_gyms().await {
        Ok(response) => gyms.update(|s| s.fetch_succeeded(token, response.gyms)),
        Err(err) => gyms.update(|s| s.fetch_failed(token, err.to_string())),
    }
}
