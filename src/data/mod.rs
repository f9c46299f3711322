//! Durable state layer.
//!
//! This module contains repository structs for the small JSON files the bot
//! persists between restarts: the processed-event set consumed by the rank
//! tracker, the nuking feature flag, and the action-logs channel routing.
//! Every file is rewritten in full on change; volumes are small enough that
//! the O(n) rewrite cost is irrelevant.

pub mod action_logs;
pub mod nuke_state;
pub mod seen;

pub use action_logs::ActionLogConfigRepository;
pub use nuke_state::NukeStateRepository;
pub use seen::{FileSeenStore, SeenStore};
