//! Theme constants for the Rabbit and Wolves GUI

use egui::Color32;

// Board colors - checkered wood
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(210, 180, 140); // Tan
pub const DARK_SQUARE: Color32 = Color32::from_rgb(139, 69, 19); // Saddle brown
pub const BOARD_FRAME: Color32 = Color32::from_rgb(70, 40, 15);

// Pieces
pub const RABBIT: Color32 = Color32::from_rgb(255, 100, 100);
pub const RABBIT_HIGHLIGHT: Color32 = Color32::from_rgb(255, 170, 170);
pub const WOLF: Color32 = Color32::from_rgb(100, 100, 255);
pub const WOLF_HIGHLIGHT: Color32 = Color32::from_rgb(170, 170, 255);
pub const PIECE_OUTLINE: Color32 = Color32::from_rgb(30, 30, 35);

// Markers
pub const SELECTED_RING: Color32 = Color32::from_rgb(255, 215, 60);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn legal_target() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 220, 120, 140)
}

pub fn hover_wolf() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 50)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const TARGET_RADIUS_RATIO: f32 = 0.15;
pub const SELECTED_RING_WIDTH: f32 = 4.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
