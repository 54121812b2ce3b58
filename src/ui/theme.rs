use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue: pointers
    pub secondary: Color, // Orange: values
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub highlight_bg: Color, // Cell just touched by an action
    pub locked: Color,       // Lock marker
    pub code: Color,         // Code log text
    pub status_bg: Color,    // Status bar background
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the cursor
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    highlight_bg: Color::Rgb(62, 62, 90),      // Lighter BG for touched cells
    locked: Color::Rgb(235, 160, 172),         // Maroon for locks
    code: Color::Rgb(166, 227, 161),           // Green for the code log
    status_bg: Color::Rgb(50, 50, 70),
};
