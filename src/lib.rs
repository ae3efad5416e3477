use std::path::Path;

use anyhow::Result;

use crate::args::Args;
use crate::error::Error;
use crate::generator::{GeneratedIcon, IconGenerator, Progress};
use crate::manifest::Manifest;
use crate::resource::output::file::DirectoryIconWriter;
use crate::resource::source::file::FileSystemSourceImageLoader;

pub mod args;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod raster;
pub mod resource;

pub fn run(args: Args) -> Result<()> {
    env_logger::init();

    if !args.source.exists() {
        return Err(Error::MissingSource { path: args.source }.into());
    }

    println!("Loading source image: {}", args.source.display());

    generate_with_progress(&args.source, &args.output_dir, |progress| match progress {
        Progress::SourceLoaded { dimensions } => {
            log::info!("Source image is {}x{}", dimensions.0, dimensions.1)
        }
        Progress::OutputReady { location } => {
            println!("Generating icons in: {}", location.display())
        }
        Progress::IconGenerated { icon } => println!(
            "  ✓ Generated {} ({}x{})",
            icon.entry.filename, icon.entry.edge, icon.entry.edge
        ),
    })?;

    println!("\n✅ All icons generated successfully!");
    println!("\nNext steps:");
    println!("1. Open Xcode");
    println!("2. Navigate to {}", args.output_dir.display());
    println!("3. Drag the generated icons into the AppIcon set");

    Ok(())
}

/// Writes the macOS app icon set for `source_path` into `output_dir`.
pub fn generate(source_path: &Path, output_dir: &Path) -> Result<Vec<GeneratedIcon>> {
    generate_with_progress(source_path, output_dir, |_| {})
}

pub fn generate_with_progress<F>(
    source_path: &Path,
    output_dir: &Path,
    report: F,
) -> Result<Vec<GeneratedIcon>>
where
    F: FnMut(Progress<'_>),
{
    IconGenerator::new(
        FileSystemSourceImageLoader::new(source_path),
        DirectoryIconWriter::new(output_dir),
        Manifest::macos_app_icon(),
    )
    .generate(report)
}
