mod logger;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use print_preview::{
    ColorProfile, DpiQuality, PreviewConfig, PrintSettings, SettingsStore, SettingsUpdate,
    Viewport,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pprev", about = "Print settings and page preview geometry", version)]
struct Cli {
    /// JSON file with settings to apply before any command-line options
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log settings changes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved page size in millimeters and pixels
    Dimensions {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Lay out the scaled page preview for a viewport
    Preview {
        #[command(flatten)]
        page: PageArgs,

        #[command(flatten)]
        marks: MarkArgs,

        /// Available preview width in pixels
        #[arg(long, default_value = "800")]
        viewport_width: f32,

        /// Available preview height in pixels
        #[arg(long, default_value = "600")]
        viewport_height: f32,

        /// Maximum pixels per millimeter
        #[arg(long, conflicts_with = "full_size")]
        scale_cap: Option<f32>,

        /// Allow zooming up to one pixel per millimeter
        #[arg(long)]
        full_size: bool,

        /// Pixels subtracted from each viewport axis
        #[arg(long)]
        padding: Option<f32>,

        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available color profiles
    Profiles,
}

#[derive(Args)]
struct PageArgs {
    /// Page size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Page orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Custom page width in mm (implies --paper custom)
    #[arg(long)]
    custom_width: Option<f32>,

    /// Custom page height in mm (implies --paper custom)
    #[arg(long)]
    custom_height: Option<f32>,

    /// Export resolution (72-1200)
    #[arg(long)]
    dpi: Option<u32>,

    /// Color profile name, e.g. CMYK or FOGRA39
    #[arg(long)]
    profile: Option<String>,
}

#[derive(Args)]
struct MarkArgs {
    /// Show the bleed area
    #[arg(long)]
    bleed_marks: Option<bool>,

    /// Bleed type
    #[arg(long, value_enum)]
    bleed: Option<BleedArg>,

    /// Custom bleed in mm (implies --bleed custom)
    #[arg(long)]
    bleed_size: Option<f32>,

    /// Show crop marks
    #[arg(long)]
    crop_marks: Option<bool>,

    /// Show the safe area
    #[arg(long)]
    safe_area: Option<bool>,

    /// Safe-area inset in mm
    #[arg(long)]
    safe_area_size: Option<f32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    A3,
    Letter,
    Legal,
    Tabloid,
    Custom,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum BleedArg {
    Standard,
    Custom,
}

impl From<PaperArg> for print_preview::PageSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::A3 => Self::A3,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
            PaperArg::Custom => Self::Custom,
        }
    }
}

impl From<OrientationArg> for print_preview::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<BleedArg> for print_preview::BleedType {
    fn from(arg: BleedArg) -> Self {
        match arg {
            BleedArg::Standard => Self::Standard,
            BleedArg::Custom => Self::Custom,
        }
    }
}

impl PageArgs {
    fn into_update(self) -> Result<SettingsUpdate> {
        let custom = self.custom_width.is_some() || self.custom_height.is_some();
        let page_size = match self.paper {
            Some(paper) => Some(paper.into()),
            None if custom => Some(print_preview::PageSize::Custom),
            None => None,
        };
        let color_profile = self
            .profile
            .as_deref()
            .map(str::parse::<ColorProfile>)
            .transpose()?;

        Ok(SettingsUpdate {
            page_size,
            orientation: self.orientation.map(Into::into),
            custom_width: self.custom_width,
            custom_height: self.custom_height,
            dpi: self.dpi,
            color_profile,
            ..Default::default()
        })
    }
}

impl MarkArgs {
    fn into_update(self) -> SettingsUpdate {
        let bleed_type = match self.bleed {
            Some(bleed) => Some(bleed.into()),
            None if self.bleed_size.is_some() => Some(print_preview::BleedType::Custom),
            None => None,
        };

        SettingsUpdate {
            show_bleed_marks: self.bleed_marks,
            bleed_type,
            bleed_size: self.bleed_size,
            show_crop_marks: self.crop_marks,
            show_safe_area: self.safe_area,
            safe_area_size: self.safe_area_size,
            ..Default::default()
        }
    }
}

async fn open_session(settings_file: Option<&PathBuf>) -> Result<SettingsStore> {
    let mut store = SettingsStore::new();
    if let Some(path) = settings_file {
        let update = SettingsUpdate::load(path)
            .await
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        debug!("Loaded settings file {}", path.display());
        store.update(update)?;
    }
    Ok(store)
}

fn print_dimensions(settings: &PrintSettings) {
    let dims = print_preview::resolve_dimensions(settings);
    let (px_width, px_height) = print_preview::pixel_dimensions(settings);
    println!(
        "Page: {} ({})",
        settings.page_size.name(),
        settings.orientation.name()
    );
    println!("  Size: {} × {} mm", dims.width_mm, dims.height_mm);
    println!(
        "  Pixels at {} DPI: {} × {}",
        settings.dpi, px_width, px_height
    );
    println!("  Quality: {}", DpiQuality::from_dpi(settings.dpi).description());
    println!(
        "  Profile: {} ({})",
        settings.color_profile,
        settings.color_profile.description()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Dimensions { page } => {
            let mut store = open_session(cli.settings.as_ref()).await?;
            store.update(page.into_update()?)?;
            print_dimensions(store.settings());
        }

        Commands::Preview {
            page,
            marks,
            viewport_width,
            viewport_height,
            scale_cap,
            full_size,
            padding,
            json,
        } => {
            let mut store = open_session(cli.settings.as_ref()).await?;
            store.update(page.into_update()?)?;
            store.update(marks.into_update())?;

            let mut config = if full_size {
                PreviewConfig::full_size()
            } else {
                PreviewConfig::default()
            };
            if let Some(cap) = scale_cap {
                config.scale_cap = cap;
            }
            if let Some(padding) = padding {
                config.padding_px = padding;
            }

            let settings = store.settings();
            let layout = print_preview::compute_preview(
                settings,
                Viewport::new(viewport_width, viewport_height),
                &config,
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
                return Ok(());
            }

            println!("{}", print_preview::summary_label(settings));
            println!("Preview:");
            println!("  Scale: {:.4} px/mm", layout.scale);
            println!(
                "  Canvas: {:.1} × {:.1} px",
                layout.canvas_width, layout.canvas_height
            );
            println!(
                "  Page: {:.1} × {:.1} px at ({:.1}, {:.1})",
                layout.page.width, layout.page.height, layout.page.x, layout.page.y
            );
            if settings.show_bleed_marks {
                println!(
                    "  Bleed ({} mm): {:.1} × {:.1} px at ({:.1}, {:.1})",
                    layout.bleed_mm,
                    layout.bleed.width,
                    layout.bleed.height,
                    layout.bleed.x,
                    layout.bleed.y
                );
            }
            if let Some(safe) = layout.safe_area {
                println!(
                    "  Safe area: {:.1} × {:.1} px at ({:.1}, {:.1})",
                    safe.width, safe.height, safe.x, safe.y
                );
            }
            for mark in &layout.crop_marks {
                println!(
                    "  Crop mark {:?}: anchor ({:.1}, {:.1}), tick {:.1} px",
                    mark.corner,
                    mark.horizontal.start.x,
                    mark.horizontal.start.y,
                    mark.horizontal.length()
                );
            }
            match print_preview::export_summary(settings) {
                Some(formats) => println!("Export: {}", formats),
                None => println!("Export: no formats selected"),
            }
        }

        Commands::Profiles => {
            for profile in ColorProfile::ALL {
                println!("{:<16} {}", profile.label(), profile.description());
            }
        }
    }

    Ok(())
}
