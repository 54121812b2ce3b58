//! The puzzle engine
//!
//! This module owns all mutable game state and the rules that act on it:
//! - [`session`]: [`session::QuestSession`], the single state owner; every
//!   user action (connect, dereference, inspect, reset) is a method on it
//! - [`errors`]: recoverable, user-facing [`errors::ActionError`]s
//! - [`codelog`]: the pseudo-C echo of each action
//! - [`timers`]: delayed auto-clear of the transient highlight/error flags
//!
//! Everything is single-threaded and synchronous; the only deferred work is
//! the flag auto-clear queue, drained from the UI poll loop.

pub mod codelog;
pub mod errors;
pub mod session;
pub mod timers;
