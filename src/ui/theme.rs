//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const GRID_LINE: Color32 = Color32::from_rgb(160, 165, 175);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(95, 175, 255);
pub const O_MARK: Color32 = Color32::from_rgb(255, 150, 80);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(200, 200, 210, 40)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel colors
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const MARK_RADIUS_RATIO: f32 = 0.32;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_STROKE_WIDTH: f32 = 6.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
