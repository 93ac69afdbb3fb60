// CleanSlate - ui/theme.rs
//
// Colour scheme for operation outcomes and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Colour for a successful outcome.
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94); // Green 500

/// Colour for a failed outcome.
pub const FAILURE: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Colour for advisory text (elevation hint, dry-run notice).
pub const ADVISORY: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Colour for secondary detail text (paths, durations).
pub const DETAIL: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Layout constants.
pub const ACTIONS_PANEL_WIDTH: f32 = 260.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
