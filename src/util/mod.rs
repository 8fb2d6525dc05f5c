//! Small shared helpers: date normalization and form validation.

pub mod date;
pub mod validate;
