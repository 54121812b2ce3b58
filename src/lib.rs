//! # Introduction
//!
//! PointerQuest is an interactive teaching simulation of pointer semantics:
//! a 4 x 4 grid of memory cells the player manipulates directly. Aiming one
//! cell at another declares a pointer; dereferencing follows it one hop;
//! every action is echoed back as the C statement it corresponds to.
//!
//! ## Architecture
//!
//! ```text
//! input event → QuestSession mutation → Goal check → cells + code log → TUI
//! ```
//!
//! 1. [`memory`] — the address space: tagged [`memory::cell::Cell`]s in a
//!    fixed [`memory::grid::MemoryGrid`].
//! 2. [`engine`] — [`engine::session::QuestSession`] owns all mutable state
//!    and implements connect, dereference, and inspect.
//! 3. [`level`] — static level table plus the per-level win predicates.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Semantics in brief
//!
//! Addresses are symbolic labels, not machine pointers. Connecting into
//! empty memory auto-initializes it with a random value in `1..=99`.
//! Dereference is read-only and never follows a chain past one hop. Locked
//! cells reject direct connection and must be reached through another
//! pointer. Win conditions are pure predicates over the grid, checked after
//! every successful connect.

pub mod engine;
pub mod level;
pub mod memory;
pub mod ui;
