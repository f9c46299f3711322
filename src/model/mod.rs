//! Domain and wire models.
//!
//! `audit` holds the serde types for the group API's audit-log endpoint exactly
//! as they arrive on the wire; `event` holds the typed domain events derived
//! from them. Wire types are read-only inputs and never constructed locally
//! outside of tests.

pub mod audit;
pub mod event;
