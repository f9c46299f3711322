//! Rank tracker: mirrors group audit-log activity into a Discord channel.
//!
//! The tracker runs one perpetual loop per tracked (group, channel) pair; this
//! process starts exactly one. Each cycle walks the audit log from the start
//! of the currently-available window, following pagination cursors within the
//! cycle, and relies on the durable seen-set to suppress events delivered in
//! earlier cycles or earlier process lifetimes. Cursors are never persisted.

pub mod classify;
pub mod notify;
pub mod poll;

pub use notify::{DiscordNotifier, EventSink};
pub use poll::RankTracker;
