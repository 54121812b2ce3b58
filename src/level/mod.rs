//! Level definitions and win checking
//!
//! - [`catalog`]: the static table of levels (layouts, titles, intros)
//! - [`goal`]: the win predicates evaluated against grid state
//!
//! Levels are loaded once and never change at runtime. A level's whole
//! identity is its descriptor: the engine carries no per-level code.

pub mod catalog;
pub mod goal;
