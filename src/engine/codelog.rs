//! The code log: every action echoed as C pseudo-code
//!
//! The simulation teaches by showing the C statement an action corresponds
//! to. [`CodeLog`] holds the single current line (a new action replaces the
//! previous line) and the formatting helpers build the line for each
//! outcome, including the error comments.

use super::errors::ActionError;
use crate::memory::cell::Address;

/// The current pseudo-C line shown beneath the grid
#[derive(Debug, Clone)]
pub struct CodeLog {
    line: String,
}

impl CodeLog {
    pub fn new() -> Self {
        CodeLog {
            line: String::from("// The executed operation is shown as C code."),
        }
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    /// Replace the current line
    pub fn set(&mut self, line: impl Into<String>) {
        self.line = line.into();
    }

    /// Replace the current line with an error comment
    pub fn set_error(&mut self, err: &ActionError) {
        self.line = error_line(err);
    }
}

impl Default for CodeLog {
    fn default() -> Self {
        Self::new()
    }
}

fn error_line(err: &ActionError) -> String {
    match err {
        ActionError::SelfReference { .. } => {
            String::from("// Error: a pointer cannot point to itself. (Self-Reference)")
        }
        ActionError::AccessDenied { .. } => {
            String::from("// Error: this memory cannot be accessed directly. (Access Denied)")
        }
        ActionError::InvalidPointer { .. } => String::from("// Error: not a valid pointer."),
        ActionError::UnknownAddress { address } => {
            format!("// Error: no memory at address {}.", address)
        }
        ActionError::UnknownLevel { id } => format!("// Error: unknown level {}.", id),
    }
}

/// `p = &target;` after a plain connect
pub fn connect(destination: &Address) -> String {
    format!("int *p = {};", destination)
}

/// Connect into an empty cell: the auto-initialized declaration comes first
pub fn connect_auto_init(value: i32) -> String {
    format!("int target = {}; // (auto-initialized)\nint *p = &target;", value)
}

/// Dereference landed on a value cell
pub fn deref_value(value: i32) -> String {
    format!("printf(\"%d\", *p); // value: {}", value)
}

/// Dereference landed on another pointer (double indirection, not followed)
pub fn deref_pointer() -> String {
    String::from("printf(\"%p\", *p); // double pointer (the target is itself a pointer)")
}

/// Dereference landed on an empty cell
pub fn deref_empty(target: &Address) -> String {
    format!("printf(\"%p\", *p); // address: {} (uninitialized)", target)
}

/// Tap on a value cell
pub fn inspect_value(value: i32, address: &Address) -> String {
    format!("int val = {}; // value at {}", value, address)
}

/// Tap on a pointer whose target holds a value
pub fn inspect_pointer_to_value(value: i32, target: &Address) -> String {
    format!("int target = {};\nint *p = {}; // p -> target", value, target)
}

/// Tap on a pointer whose target is itself a pointer
pub fn inspect_double_pointer(target: &Address) -> String {
    format!("int **pp = {}; // double pointer", target)
}

/// Tap on a pointer whose target is empty memory
pub fn inspect_pointer_to_empty(target: &Address) -> String {
    format!("// Warning: {} is uninitialized memory.", target)
}

/// Tap on a pointer that was never aimed anywhere
pub fn inspect_unset_pointer() -> String {
    String::from("int *p; // uninitialized pointer")
}

/// Tap on empty memory
pub fn inspect_empty(address: &Address) -> String {
    format!("// Address: {}", address)
}

/// First false -> true transition of the win predicate
pub fn level_clear() -> String {
    String::from("// Congratulations! Level Clear!")
}
