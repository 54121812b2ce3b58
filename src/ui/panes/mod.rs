//! TUI pane rendering modules
//!
//! Stateless render functions for each visible pane:
//!
//! - [`grid`]: the 4 x 4 memory board with cursor and feedback flags
//! - [`code`]: the generated-C log beneath the grid
//! - [`mission`]: the active level card (title, description, solved state)
//! - [`status`]: status bar with keybindings and the last action's outcome

pub mod code;
pub mod grid;
pub mod mission;
pub mod status;

// Re-export render functions for convenience
pub use code::render_code_pane;
pub use grid::render_grid_pane;
pub use mission::render_mission_pane;
pub use status::render_status_bar;
