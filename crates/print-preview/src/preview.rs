use crate::constants::*;
use crate::geometry::resolve_dimensions;
use crate::marks::{CropMark, Rect, crop_mark_margin, crop_marks};
use crate::settings::PrintSettings;
use crate::types::PageDimensions;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Pixel area available to the preview
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Presentation policy for fitting the page into the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewConfig {
    /// Subtracted from each viewport axis before fitting
    pub padding_px: f32,
    /// Upper bound on pixels per millimeter
    pub scale_cap: f32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            padding_px: DEFAULT_PREVIEW_PADDING_PX,
            scale_cap: DEFAULT_SCALE_CAP,
        }
    }
}

impl PreviewConfig {
    /// Same padding, but allows zooming up to one pixel per millimeter
    pub fn full_size() -> Self {
        Self {
            scale_cap: FULL_SIZE_SCALE_CAP,
            ..Self::default()
        }
    }

    /// Pixels per millimeter for a page of `dims` in `viewport`.
    ///
    /// Never below [`MIN_PREVIEW_SCALE`], even for empty or negative viewports.
    pub fn scale_for(&self, dims: PageDimensions, viewport: Viewport) -> f32 {
        let fit_width = (viewport.width - self.padding_px) / dims.width_mm;
        let fit_height = (viewport.height - self.padding_px) / dims.height_mm;
        let scale = fit_width.min(fit_height).min(self.scale_cap);

        // f32::min skips NaN, so a NaN axis has to be caught before it does
        if !fit_width.is_nan() && !fit_height.is_nan() && scale.is_finite() {
            scale.max(MIN_PREVIEW_SCALE)
        } else {
            MIN_PREVIEW_SCALE
        }
    }
}

/// Render-ready preview geometry, all in pixels.
///
/// Positions are measured from the top-left of a canvas of `canvas_width` by
/// `canvas_height`, which is large enough to hold the crop marks, so every
/// coordinate is non-negative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PreviewLayout {
    pub dimensions: PageDimensions,
    pub scale: f32,
    pub bleed_mm: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Trimmed page
    pub page: Rect,
    /// Page plus bleed on every side; equal to `page` when bleed marks are hidden
    pub bleed: Rect,
    pub safe_area: Option<Rect>,
    /// Empty when crop marks are hidden
    pub crop_marks: Vec<CropMark>,
}

/// Lay out the page preview for `settings` inside `viewport`
pub fn compute_preview(
    settings: &PrintSettings,
    viewport: Viewport,
    config: &PreviewConfig,
) -> PreviewLayout {
    let dimensions = resolve_dimensions(settings);
    let scale = config.scale_for(dimensions, viewport);

    let bleed_mm = settings.effective_bleed_mm();
    let bleed_px = bleed_mm * scale;
    let page_width = dimensions.width_mm * scale;
    let page_height = dimensions.height_mm * scale;

    let margin = if settings.show_crop_marks {
        crop_mark_margin(scale)
    } else {
        0.0
    };

    let bleed = Rect {
        x: margin,
        y: margin,
        width: page_width + 2.0 * bleed_px,
        height: page_height + 2.0 * bleed_px,
    };
    let page = Rect {
        x: margin + bleed_px,
        y: margin + bleed_px,
        width: page_width,
        height: page_height,
    };

    let safe_area = settings
        .show_safe_area
        .then(|| page.inset(settings.safe_area_size * scale));

    let crop_marks = if settings.show_crop_marks {
        let target = if settings.show_bleed_marks { &bleed } else { &page };
        crop_marks(target, scale)
    } else {
        Vec::new()
    };

    PreviewLayout {
        dimensions,
        scale,
        bleed_mm,
        canvas_width: bleed.width + 2.0 * margin,
        canvas_height: bleed.height + 2.0 * margin,
        page,
        bleed,
        safe_area,
        crop_marks,
    }
}
