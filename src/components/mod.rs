//! Reusable view components shared across pages.

pub mod add_climb_modal;
pub mod add_training_session_modal;
pub mod error_banner;
pub mod layout;
pub mod stat_card;
