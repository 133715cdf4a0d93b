//! Human-readable descriptions of the current settings

use crate::geometry::resolve_dimensions;
use crate::settings::PrintSettings;
use crate::types::ColorProfile;

impl ColorProfile {
    pub fn description(self) -> &'static str {
        match self {
            // Standard
            ColorProfile::Srgb => "Standard for digital displays and consumer printing",
            ColorProfile::AdobeRgb => "Wider gamut for photography and professional printing",
            ColorProfile::Cmyk => "Generic CMYK profile for commercial printing",
            ColorProfile::ProPhoto => {
                "Very wide gamut for photography (may cause clipping on some devices)"
            }

            // FOGRA, coated
            ColorProfile::Fogra39 => "ISO Coated v2 (ECI) - Coated paper, 39% dot gain",
            ColorProfile::Fogra51 => "PSOcoated_v3 - Latest standard for premium coated paper (2013)",
            ColorProfile::Fogra28 => "ISO Web Coated - Coated paper on heatset web offset",

            // FOGRA, uncoated
            ColorProfile::Fogra47 => "PSO Uncoated ISO12647 (ECI) - Improved coated profile",
            ColorProfile::Fogra52 => "PSOuncoated_v3 - Latest standard for premium coated offset paper",
            ColorProfile::Fogra29 => "ISO Uncoated - Standard for uncoated paper",

            // Japan
            ColorProfile::Toyo => "TOYO Printing Standard - Japanese printing standard",
            ColorProfile::Japan => "Japan Color 2011 - Japanese printing standard",
            ColorProfile::JapanUncoated => "Japan Color 2011 Uncoated - Japanese uncoated paper",

            // North America
            ColorProfile::Swop => "SWOP - US web offset publication printing",
            ColorProfile::Gracol => "GRACoL - US commercial sheetfed printing on coated paper",
            ColorProfile::Snap => "SNAP - US newsprint printing",
        }
    }
}

/// Coarse quality tier for a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DpiQuality {
    /// Below 150 DPI
    Screen,
    /// 150 to 299 DPI
    Draft,
    /// 300 to 450 DPI
    Commercial,
    /// Above 450 DPI
    Detailed,
}

impl DpiQuality {
    pub fn from_dpi(dpi: u32) -> Self {
        match dpi {
            0..150 => DpiQuality::Screen,
            150..300 => DpiQuality::Draft,
            300..=450 => DpiQuality::Commercial,
            _ => DpiQuality::Detailed,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DpiQuality::Screen => "Low resolution suitable for screen viewing only",
            DpiQuality::Draft => "Medium resolution suitable for draft printing",
            DpiQuality::Commercial => "High quality suitable for commercial printing",
            DpiQuality::Detailed => "Very high resolution for detailed commercial printing",
        }
    }
}

/// One-line tag shown with the preview, e.g.
/// `Size: 210 × 297 mm    DPI: 300    Profile: CMYK`
pub fn summary_label(settings: &PrintSettings) -> String {
    let dims = resolve_dimensions(settings);
    format!(
        "Size: {} × {} mm    DPI: {}    Profile: {}",
        dims.width_mm, dims.height_mm, settings.dpi, settings.color_profile
    )
}

/// Which file formats an export would produce, or `None` if none are selected
pub fn export_summary(settings: &PrintSettings) -> Option<String> {
    match (settings.export_pdf, settings.export_jpg) {
        (true, true) => Some("PDF and JPG".to_string()),
        (true, false) => Some("PDF".to_string()),
        (false, true) => Some("JPG".to_string()),
        (false, false) => None,
    }
}
