//! Application pages, one module per route.

pub mod dashboard;
pub mod home;
pub mod logbook;
pub mod profile;
pub mod register;
pub mod signin;
pub mod training;
