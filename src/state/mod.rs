//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `climbs`, `gyms`, `training`) so
//! individual components depend on small focused models. Each module pairs
//! a plain state struct carrying pure transition methods (unit testable
//! off-wasm) with async actions that run a service call and apply the
//! matching transitions to the context `RwSignal`.
//!
//! The UI drives at most one mutating auth operation at a time; overlapping
//! calls are not serialized and the last writer wins on the shared
//! loading/error slots. Acceptable for a UI-only session cache.

pub mod auth;
pub mod climbs;
pub mod gyms;
pub mod training;
