//! Memory model for the pointer puzzle
//!
//! This module provides the core memory abstractions:
//! - [`cell`]: the addressable unit ([`cell::Cell`]) and its role tag
//! - [`grid`]: the fixed 16-cell address space ([`grid::MemoryGrid`])
//!
//! # Address scheme
//!
//! Addresses are symbolic teaching labels, not machine pointers. Every grid
//! assigns them deterministically: `0x7000`, `0x7004`, ... one `int` (4
//! bytes) apart, matching what a debugger would show for an `int[16]`.
//!
//! # Cell state machine
//!
//! ```text
//! Empty ──auto-init──▶ Value
//!   │                    │
//!   └──────connect───────┴──▶ Pointer
//! ```
//!
//! Cells never transition back to `Empty`; there is no delete operation.

pub mod cell;
pub mod grid;
