use std::path::PathBuf;

use clap::Parser;

/// Generates the macOS app icon set from a single source image
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    after_help = "Example: icon_generator cashburn_icon_1024.png"
)]
pub struct Cli {
    /// Path to the image every icon size is resized from
    #[arg(value_name = "SOURCE_ICON")]
    pub source_icon: PathBuf,
}
