//! Color theme constants for the wallet list.
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Base palette
// ============================================================================

/// Section header text
pub const COLOR_HEADER: Color = Color::White;

/// Accent color for highlights and toggles
pub const COLOR_ACCENT: Color = Color::Cyan;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Divider rules and card outlines
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Background of the row under the cursor
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 35, 60);

// ============================================================================
// Value colors
// ============================================================================

/// Positive 24h change
pub const COLOR_GAIN: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Negative 24h change
pub const COLOR_LOSS: Color = Color::Red;

/// Native balance amounts
pub const COLOR_VALUE: Color = Color::Gray;

// ============================================================================
// Edit mode
// ============================================================================

/// Pinned coin marker
pub const COLOR_PINNED: Color = Color::Yellow;

/// Hidden coin marker and text
pub const COLOR_HIDDEN: Color = Color::DarkGray;

// ============================================================================
// Status bar
// ============================================================================

/// Status bar background
pub const COLOR_STATUS_BG: Color = Color::Rgb(10, 15, 35);

/// Boundary flash when a scroll runs into the top or bottom
pub const COLOR_BOUNDARY_FLASH: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Error notices
pub const COLOR_ERROR: Color = Color::Red;
