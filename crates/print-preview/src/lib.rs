pub mod constants;
mod describe;
mod geometry;
pub mod marks;
mod preview;
mod settings;
mod store;
mod types;

pub use describe::{DpiQuality, export_summary, summary_label};
pub use geometry::{pixel_dimensions, resolve_dimensions};
pub use marks::{CropMark, Rect};
pub use preview::{PreviewConfig, PreviewLayout, Viewport, compute_preview};
pub use settings::*;
pub use store::{Preset, PresetId, SettingsStore};
pub use types::*;
