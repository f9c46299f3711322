//! Service layer for business logic and orchestration.
//!
//! - **`roblox`** - HTTP client for the group audit-log and thumbnail APIs
//! - **`tracker`** - the rank tracker: classification of audit records into
//!   domain events, Discord notification formatting, and the perpetual poll
//!   loop that ties source, dedup store and sink together

pub mod roblox;
pub mod tracker;
