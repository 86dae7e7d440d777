//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for activated accounts.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for deactivated accounts and errors.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Authority badge background.
pub const COLOR_BADGE: Color32 = Color32::from_rgb(23, 162, 184);

/// Text drawn on colored buttons and badges.
pub const COLOR_ON_FILL: Color32 = Color32::WHITE;
