//! Shared constants for page geometry and preview scaling
//!
//! This module centralizes the fixed numbers used by the settings store,
//! the geometry resolver and the preview scaler.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Convert millimeters to inches
#[inline]
pub fn mm_to_inches(mm: f32) -> f32 {
    mm / MM_PER_INCH
}

// =============================================================================
// Resolution
// =============================================================================

/// Lowest accepted export resolution
pub const MIN_DPI: u32 = 72;

/// Highest accepted export resolution
pub const MAX_DPI: u32 = 1200;

/// Resolution used for a fresh session
pub const DEFAULT_DPI: u32 = 300;

/// Upper bound for the export compression quality percentage
pub const MAX_COMPRESSION_QUALITY: u8 = 100;

// =============================================================================
// Bleed and Safe Area
// =============================================================================

/// Bleed margin implied by `BleedType::Standard` (mm)
pub const STANDARD_BLEED_MM: f32 = 3.0;

/// Default safe-area inset (mm)
pub const DEFAULT_SAFE_AREA_MM: f32 = 5.0;

// =============================================================================
// Crop Marks
// =============================================================================

/// Length of each crop-mark tick (mm, scaled with the preview)
pub const CROP_MARK_LENGTH_MM: f32 = 10.0;

/// Diagonal offset of the crop marks from the corner they mark (mm)
pub const CROP_MARK_OFFSET_MM: f32 = 5.0;

// =============================================================================
// Preview
// =============================================================================

/// Pixels subtracted from each viewport axis before fitting the page
pub const DEFAULT_PREVIEW_PADDING_PX: f32 = 40.0;

/// Default zoom cap for the compact preview
pub const DEFAULT_SCALE_CAP: f32 = 0.3;

/// Zoom cap for the full-size preview
pub const FULL_SIZE_SCALE_CAP: f32 = 1.0;

/// Smallest scale the preview will ever report.
/// Degenerate viewports clamp here instead of producing negative boxes.
pub const MIN_PREVIEW_SCALE: f32 = 1e-4;
