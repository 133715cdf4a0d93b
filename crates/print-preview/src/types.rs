use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid {field}: {value} (must be a positive number of millimeters)")]
    InvalidDimension { field: &'static str, value: f32 },
    #[error("Invalid {field}: {value} (must be a non-negative number of millimeters)")]
    InvalidMargin { field: &'static str, value: f32 },
    #[error("Invalid page selection: page numbers start at 1")]
    InvalidPageSelection,
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("No preset with id {0}")]
    UnknownPreset(u64),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Page size selection.
///
/// `Custom` defers to the `custom_width`/`custom_height` pair on the settings
/// record; every other variant comes from the fixed table in
/// [`PageSize::standard_dimensions_mm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageSize {
    #[default]
    A4,
    A3,
    Letter,
    Legal,
    Tabloid,
    Custom,
}

impl PageSize {
    pub const STANDARD: [PageSize; 5] = [
        PageSize::A4,
        PageSize::A3,
        PageSize::Letter,
        PageSize::Legal,
        PageSize::Tabloid,
    ];

    /// Portrait base dimensions (width, height) in millimeters.
    ///
    /// Returns `None` for `Custom`, whose dimensions live on the settings record.
    pub fn standard_dimensions_mm(self) -> Option<(f32, f32)> {
        match self {
            PageSize::A4 => Some((210.0, 297.0)),
            PageSize::A3 => Some((297.0, 420.0)),
            PageSize::Letter => Some((215.9, 279.4)),
            PageSize::Legal => Some((215.9, 355.6)),
            PageSize::Tabloid => Some((279.4, 431.8)),
            PageSize::Custom => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSize::A4 => "a4",
            PageSize::A3 => "a3",
            PageSize::Letter => "letter",
            PageSize::Legal => "legal",
            PageSize::Tabloid => "tabloid",
            PageSize::Custom => "custom",
        }
    }
}

impl FromStr for PageSize {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "a3" => Ok(PageSize::A3),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            "tabloid" => Ok(PageSize::Tabloid),
            "custom" => Ok(PageSize::Custom),
            _ => Err(SettingsError::UnknownVariant {
                kind: "page size",
                value: s.to_string(),
            }),
        }
    }
}

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Portrait: height > width for every standard size
    #[default]
    Portrait,
    /// Landscape: width and height swapped
    Landscape,
}

impl Orientation {
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    /// Apply this orientation to a portrait (width, height) pair.
    pub fn apply(self, (w, h): (f32, f32)) -> (f32, f32) {
        match self {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

impl FromStr for Orientation {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(SettingsError::UnknownVariant {
                kind: "orientation",
                value: s.to_string(),
            }),
        }
    }
}

/// How the bleed margin is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BleedType {
    /// Fixed 3mm bleed
    #[default]
    Standard,
    /// Use the `bleed_size` field
    Custom,
}

/// Which pages an export covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExportType {
    #[default]
    Full,
    Pages,
    Selection,
}

/// Named ICC color profiles. Purely a label: no color transform is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorProfile {
    #[cfg_attr(feature = "serde", serde(rename = "sRGB"))]
    Srgb,
    #[cfg_attr(feature = "serde", serde(rename = "AdobeRGB"))]
    AdobeRgb,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "CMYK"))]
    Cmyk,
    ProPhoto,
    #[cfg_attr(feature = "serde", serde(rename = "FOGRA39"))]
    Fogra39,
    #[cfg_attr(feature = "serde", serde(rename = "FOGRA51"))]
    Fogra51,
    #[cfg_attr(feature = "serde", serde(rename = "FOGRA28"))]
    Fogra28,
    #[cfg_attr(feature = "serde", serde(rename = "FOGRA47"))]
    Fogra47,
    #[cfg_attr(feature = "serde", serde(rename = "FOGRA52"))]
    Fogra52,
    #[cfg_attr(feature = "serde", serde(rename = "FOGRA29"))]
    Fogra29,
    #[cfg_attr(feature = "serde", serde(rename = "TOYO"))]
    Toyo,
    #[cfg_attr(feature = "serde", serde(rename = "JAPAN"))]
    Japan,
    #[cfg_attr(feature = "serde", serde(rename = "JAPAN_UNCOATED"))]
    JapanUncoated,
    #[cfg_attr(feature = "serde", serde(rename = "SWOP"))]
    Swop,
    #[cfg_attr(feature = "serde", serde(rename = "GRACoL"))]
    Gracol,
    #[cfg_attr(feature = "serde", serde(rename = "SNAP"))]
    Snap,
}

impl ColorProfile {
    pub const ALL: [ColorProfile; 16] = [
        ColorProfile::Srgb,
        ColorProfile::AdobeRgb,
        ColorProfile::Cmyk,
        ColorProfile::ProPhoto,
        ColorProfile::Fogra39,
        ColorProfile::Fogra51,
        ColorProfile::Fogra28,
        ColorProfile::Fogra47,
        ColorProfile::Fogra52,
        ColorProfile::Fogra29,
        ColorProfile::Toyo,
        ColorProfile::Japan,
        ColorProfile::JapanUncoated,
        ColorProfile::Swop,
        ColorProfile::Gracol,
        ColorProfile::Snap,
    ];

    /// The profile's identifier as shown to users and written in settings files
    pub fn label(self) -> &'static str {
        match self {
            ColorProfile::Srgb => "sRGB",
            ColorProfile::AdobeRgb => "AdobeRGB",
            ColorProfile::Cmyk => "CMYK",
            ColorProfile::ProPhoto => "ProPhoto",
            ColorProfile::Fogra39 => "FOGRA39",
            ColorProfile::Fogra51 => "FOGRA51",
            ColorProfile::Fogra28 => "FOGRA28",
            ColorProfile::Fogra47 => "FOGRA47",
            ColorProfile::Fogra52 => "FOGRA52",
            ColorProfile::Fogra29 => "FOGRA29",
            ColorProfile::Toyo => "TOYO",
            ColorProfile::Japan => "JAPAN",
            ColorProfile::JapanUncoated => "JAPAN_UNCOATED",
            ColorProfile::Swop => "SWOP",
            ColorProfile::Gracol => "GRACoL",
            ColorProfile::Snap => "SNAP",
        }
    }
}

impl fmt::Display for ColorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorProfile {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        ColorProfile::ALL
            .into_iter()
            .find(|profile| profile.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| SettingsError::UnknownVariant {
                kind: "color profile",
                value: s.to_string(),
            })
    }
}

/// Resolved page size in millimeters, orientation already applied
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageDimensions {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageDimensions {
    pub fn as_tuple(self) -> (f32, f32) {
        (self.width_mm, self.height_mm)
    }
}
