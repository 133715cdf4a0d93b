use crate::constants::*;
use crate::types::*;
use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The full print-export configuration for one session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrintSettings {
    // Page
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub custom_width: f32,
    pub custom_height: f32,

    // Print marks
    pub show_bleed_marks: bool,
    pub bleed_type: BleedType,
    pub bleed_size: f32,
    pub show_crop_marks: bool,
    pub show_safe_area: bool,
    pub safe_area_size: f32,

    // Color
    pub color_profile: ColorProfile,
    pub dpi: u32,

    // Export intent
    pub export_type: ExportType,
    pub selected_pages: Vec<u32>,
    pub include_layers: bool,
    pub export_pdf: bool,
    pub export_jpg: bool,
    pub compression_quality: u8,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            custom_width: 210.0,
            custom_height: 297.0,
            show_bleed_marks: true,
            bleed_type: BleedType::Standard,
            bleed_size: STANDARD_BLEED_MM,
            show_crop_marks: true,
            show_safe_area: true,
            safe_area_size: DEFAULT_SAFE_AREA_MM,
            color_profile: ColorProfile::Cmyk,
            dpi: DEFAULT_DPI,
            export_type: ExportType::Full,
            selected_pages: vec![1],
            include_layers: true,
            export_pdf: true,
            export_jpg: false,
            compression_quality: 90,
        }
    }
}

impl PrintSettings {
    /// Bleed margin in effect, in millimeters.
    ///
    /// Zero when bleed marks are hidden; the standard bleed ignores `bleed_size`.
    pub fn effective_bleed_mm(&self) -> f32 {
        if !self.show_bleed_marks {
            return 0.0;
        }
        match self.bleed_type {
            BleedType::Standard => STANDARD_BLEED_MM,
            BleedType::Custom => self.bleed_size,
        }
    }

    /// Validate a whole record the same way [`SettingsUpdate::normalized`]
    /// validates a partial one: clamp `dpi` and `compression_quality`, reject
    /// non-positive page dimensions, negative margins and a zero page number.
    pub fn normalized(self) -> Result<Self> {
        let mut settings = PrintSettings::default();
        SettingsUpdate::from(self).normalized()?.apply_to(&mut settings);
        Ok(settings)
    }

    /// Safe-area inset in effect, in millimeters. Zero when the safe area is hidden.
    pub fn effective_safe_area_mm(&self) -> f32 {
        if self.show_safe_area {
            self.safe_area_size
        } else {
            0.0
        }
    }
}

/// A partial update: every `Some` field replaces the matching field of
/// [`PrintSettings`], every `None` field is left alone.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SettingsUpdate {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub page_size: Option<PageSize>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub orientation: Option<Orientation>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub custom_width: Option<f32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub custom_height: Option<f32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub show_bleed_marks: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub bleed_type: Option<BleedType>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub bleed_size: Option<f32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub show_crop_marks: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub show_safe_area: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub safe_area_size: Option<f32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub color_profile: Option<ColorProfile>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dpi: Option<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub export_type: Option<ExportType>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub selected_pages: Option<Vec<u32>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub include_layers: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub export_pdf: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub export_jpg: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub compression_quality: Option<u8>,
}

impl From<PrintSettings> for SettingsUpdate {
    fn from(settings: PrintSettings) -> Self {
        Self {
            page_size: Some(settings.page_size),
            orientation: Some(settings.orientation),
            custom_width: Some(settings.custom_width),
            custom_height: Some(settings.custom_height),
            show_bleed_marks: Some(settings.show_bleed_marks),
            bleed_type: Some(settings.bleed_type),
            bleed_size: Some(settings.bleed_size),
            show_crop_marks: Some(settings.show_crop_marks),
            show_safe_area: Some(settings.show_safe_area),
            safe_area_size: Some(settings.safe_area_size),
            color_profile: Some(settings.color_profile),
            dpi: Some(settings.dpi),
            export_type: Some(settings.export_type),
            selected_pages: Some(settings.selected_pages),
            include_layers: Some(settings.include_layers),
            export_pdf: Some(settings.export_pdf),
            export_jpg: Some(settings.export_jpg),
            compression_quality: Some(settings.compression_quality),
        }
    }
}

impl SettingsUpdate {
    /// Load a partial update from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let update = serde_json::from_slice(&bytes)?;
        Ok(update)
    }

    /// Parse a partial update from a JSON string
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Validate the update and clamp the fields that have a clamping policy.
    ///
    /// Out-of-range `dpi` and `compression_quality` are clamped; non-positive
    /// page dimensions, negative margins and a zero page number are rejected.
    pub fn normalized(mut self) -> Result<Self> {
        for (field, value) in [
            ("custom_width", self.custom_width),
            ("custom_height", self.custom_height),
        ] {
            if let Some(value) = value
                && !(value.is_finite() && value > 0.0)
            {
                return Err(SettingsError::InvalidDimension { field, value });
            }
        }

        for (field, value) in [
            ("bleed_size", self.bleed_size),
            ("safe_area_size", self.safe_area_size),
        ] {
            if let Some(value) = value
                && !(value.is_finite() && value >= 0.0)
            {
                return Err(SettingsError::InvalidMargin { field, value });
            }
        }

        if let Some(pages) = &self.selected_pages
            && pages.contains(&0)
        {
            return Err(SettingsError::InvalidPageSelection);
        }

        if let Some(dpi) = self.dpi {
            let clamped = dpi.clamp(MIN_DPI, MAX_DPI);
            if clamped != dpi {
                warn!("DPI {} out of range, clamped to {}", dpi, clamped);
                self.dpi = Some(clamped);
            }
        }

        if let Some(quality) = self.compression_quality
            && quality > MAX_COMPRESSION_QUALITY
        {
            warn!(
                "Compression quality {} out of range, clamped to {}",
                quality, MAX_COMPRESSION_QUALITY
            );
            self.compression_quality = Some(MAX_COMPRESSION_QUALITY);
        }

        Ok(self)
    }

    /// Merge every named field into `settings`. Assumes a normalized update.
    pub(crate) fn apply_to(self, settings: &mut PrintSettings) {
        fn merge<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        merge(&mut settings.page_size, self.page_size);
        merge(&mut settings.orientation, self.orientation);
        merge(&mut settings.custom_width, self.custom_width);
        merge(&mut settings.custom_height, self.custom_height);
        merge(&mut settings.show_bleed_marks, self.show_bleed_marks);
        merge(&mut settings.bleed_type, self.bleed_type);
        merge(&mut settings.bleed_size, self.bleed_size);
        merge(&mut settings.show_crop_marks, self.show_crop_marks);
        merge(&mut settings.show_safe_area, self.show_safe_area);
        merge(&mut settings.safe_area_size, self.safe_area_size);
        merge(&mut settings.color_profile, self.color_profile);
        merge(&mut settings.dpi, self.dpi);
        merge(&mut settings.export_type, self.export_type);
        merge(&mut settings.selected_pages, self.selected_pages);
        merge(&mut settings.include_layers, self.include_layers);
        merge(&mut settings.export_pdf, self.export_pdf);
        merge(&mut settings.export_jpg, self.export_jpg);
        merge(&mut settings.compression_quality, self.compression_quality);
    }
}
