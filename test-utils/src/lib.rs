//! Groupwatch Test Utils
//!
//! Shared testing utilities for the groupwatch bot. The factories build wire
//! payloads for the group API as `serde_json::Value`s, simulating what the
//! audit-log endpoint would return; tests deserialize them into the crate's
//! wire types. Building through JSON keeps this crate independent of the
//! application crate and exercises the same deserialization path production
//! traffic takes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory::audit_log::{page, AuditLogEntryFactory};
//!
//! let record = AuditLogEntryFactory::new()
//!     .target(42, "Subject")
//!     .old_role(5, "Recruit")
//!     .new_role(9, "Officer")
//!     .build();
//! let page = page(vec![record], Some("cursor"));
//! ```

pub mod factory;
