//! Action error types for the puzzle engine
//!
//! This module defines [`ActionError`], which represents every way a user
//! action (connect, dereference, inspect, level start) can be rejected.
//!
//! Unlike a real runtime, no error here is fatal: each one is reported back
//! to the player as a replaced code-log line plus a transient error flag on
//! the offending cell, and the grid is left exactly as it was.

use crate::memory::cell::Address;
use std::fmt;

/// Recoverable, user-facing action failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// A cell may not point at itself
    SelfReference { address: Address },

    /// The destination cell is locked against direct connection
    AccessDenied { address: Address },

    /// Dereference target is not a pointer, or its target does not resolve
    InvalidPointer { address: Address },

    /// The address does not exist in the active grid
    UnknownAddress { address: Address },

    /// No level with this identifier
    UnknownLevel { id: u32 },
}

impl ActionError {
    /// The cell to flag as errored, when one exists
    pub fn offending_address(&self) -> Option<&Address> {
        match self {
            ActionError::SelfReference { address } => Some(address),
            ActionError::AccessDenied { address } => Some(address),
            ActionError::InvalidPointer { address } => Some(address),
            ActionError::UnknownAddress { .. } => None,
            ActionError::UnknownLevel { .. } => None,
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::SelfReference { address } => {
                write!(f, "Self-reference: {} cannot point to itself", address)
            }
            ActionError::AccessDenied { address } => {
                write!(f, "Access denied: memory at {} is locked", address)
            }
            ActionError::InvalidPointer { address } => {
                write!(f, "Invalid pointer at {}", address)
            }
            ActionError::UnknownAddress { address } => {
                write!(f, "No cell at address {}", address)
            }
            ActionError::UnknownLevel { id } => {
                write!(f, "No level with id {}", id)
            }
        }
    }
}

impl std::error::Error for ActionError {}
