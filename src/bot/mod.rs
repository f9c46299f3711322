//! Discord bot integration.
//!
//! This module provides the bot's gateway connection and its slash-command
//! surface. The bot is initialized during startup and runs in a separate
//! tokio task; its HTTP client is shared with the rank tracker so
//! notifications go out over the same connection pool.
//!
//! # Gateway Intents
//!
//! Only the `GUILDS` intent is required: the command surface works entirely
//! through interactions, and the tracker pushes messages outward rather than
//! reacting to guild traffic.

pub mod command;
pub mod handler;
pub mod start;
