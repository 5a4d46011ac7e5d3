//! Shared numeric constants for the canvas crate.

// ── Element geometry ────────────────────────────────────────────

/// Smallest width or height an element may have, in canvas pixels.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Default text element box.
pub const TEXT_DEFAULT_WIDTH: f64 = 160.0;
pub const TEXT_DEFAULT_HEIGHT: f64 = 40.0;

/// Default shape element box.
pub const SHAPE_DEFAULT_SIZE: f64 = 80.0;

// ── Text ────────────────────────────────────────────────────────

/// Font size given to new text elements and to every loaded text element.
pub const DEFAULT_FONT_SIZE: f64 = 20.0;

/// Range offered by the font-size control. The store does not enforce it.
pub const FONT_SIZE_MIN: f64 = 8.0;
pub const FONT_SIZE_MAX: f64 = 72.0;

// ── Colors ──────────────────────────────────────────────────────

/// Neutral dark color of new text elements.
pub const DEFAULT_TEXT_COLOR: &str = "#222222";

/// Accent color of new shape elements.
pub const DEFAULT_SHAPE_COLOR: &str = "#F59E0B";

/// Product base color of a fresh document. The backdrop tint is hidden for it.
pub const DEFAULT_BASE_COLOR: &str = "#FFFFFF";

/// Swatches offered by the color picker.
pub const COLOR_PRESETS: [&str; 17] = [
    "#FFFFFF", "#F5F5F5", "#E5E7EB", "#9CA3AF", "#374151", "#111827", "#000000", "#EF4444", "#F97316",
    "#F59E0B", "#EAB308", "#22C55E", "#14B8A6", "#3B82F6", "#8B5CF6", "#EC4899", "#F43F5E",
];

// ── Placement ───────────────────────────────────────────────────

/// Offset applied to a click point so a new text box is centered on the cursor.
pub const TEXT_PLACEMENT_OFFSET_X: f64 = 80.0;
pub const TEXT_PLACEMENT_OFFSET_Y: f64 = 20.0;

/// Offset applied to a click point so a new shape is centered on the cursor.
pub const SHAPE_PLACEMENT_OFFSET: f64 = 40.0;

// ── Gestures ────────────────────────────────────────────────────

/// Pointer travel (either axis, exclusive) after which a press counts as a drag.
pub const DRAG_THRESHOLD_PX: f64 = 2.0;

/// Side length of the square corner resize handles.
pub const HANDLE_SIZE_PX: f64 = 12.0;

// ── Scene ───────────────────────────────────────────────────────

/// Stacking index of the selected element; everything else sits at [`BASE_Z_INDEX`].
pub const SELECTED_Z_INDEX: i32 = 10;
pub const BASE_Z_INDEX: i32 = 1;

/// Backdrop tint opacity when the base color is not the default white.
pub const TINT_OPACITY: f64 = 0.6;
