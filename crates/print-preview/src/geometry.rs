use crate::constants::mm_to_inches;
use crate::settings::PrintSettings;
use crate::types::*;

/// Resolve the page size in millimeters, orientation applied.
///
/// `PageSize::Custom` uses the custom width/height pair; every other size
/// comes from the standard table.
pub fn resolve_dimensions(settings: &PrintSettings) -> PageDimensions {
    let base = settings
        .page_size
        .standard_dimensions_mm()
        .unwrap_or((settings.custom_width, settings.custom_height));
    let (width_mm, height_mm) = settings.orientation.apply(base);
    PageDimensions {
        width_mm,
        height_mm,
    }
}

/// Raster size of the page in pixels at the configured DPI
pub fn pixel_dimensions(settings: &PrintSettings) -> (u32, u32) {
    let dims = resolve_dimensions(settings);
    let dpi = settings.dpi as f32;
    (
        (mm_to_inches(dims.width_mm) * dpi).round() as u32,
        (mm_to_inches(dims.height_mm) * dpi).round() as u32,
    )
}
