use std::path::{Path, PathBuf};

use anyhow::Result;
use image::codecs::png::PngEncoder;

use crate::error::Error;
use crate::manifest::{Manifest, ManifestEntry};
use crate::resource::output::IconWriter;
use crate::resource::source::SourceImageLoader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub entry: ManifestEntry,
    pub path: PathBuf,
}

pub enum Progress<'a> {
    SourceLoaded { dimensions: (u32, u32) },
    OutputReady { location: &'a Path },
    IconGenerated { icon: &'a GeneratedIcon },
}

pub struct IconGenerator<L: SourceImageLoader, W: IconWriter> {
    loader: L,
    writer: W,
    manifest: Manifest,
}

impl<L: SourceImageLoader, W: IconWriter> IconGenerator<L, W> {
    pub fn new(loader: L, writer: W, manifest: Manifest) -> Self {
        Self {
            loader,
            writer,
            manifest,
        }
    }

    /// Decodes the source and writes one PNG per manifest entry, in manifest
    /// order.
    ///
    /// The output location is only prepared once the source has decoded, so a
    /// bad source leaves the file system untouched. The first failing entry
    /// aborts the run; icons written before it stay in place and are listed in
    /// the returned [`Error::Write`].
    pub fn generate<F>(&mut self, mut report: F) -> Result<Vec<GeneratedIcon>>
    where
        F: FnMut(Progress<'_>),
    {
        let source = self.loader.load_source_image()?;
        report(Progress::SourceLoaded {
            dimensions: source.dimensions(),
        });

        self.writer
            .prepare()
            .map_err(|source| Error::CreateOutputDir {
                path: self.writer.location().to_path_buf(),
                source,
            })?;
        report(Progress::OutputReady {
            location: self.writer.location(),
        });

        let mut icons: Vec<GeneratedIcon> = Vec::with_capacity(self.manifest.entries().len());

        for entry in self.manifest.entries() {
            let resized = source.resize_square(entry.edge);
            let png_data = encode_png(&resized).map_err(|source| Error::Encode {
                filename: entry.filename.to_string(),
                source,
            })?;

            log::debug!(
                "Encoded {} ({}x{}, {} bytes)",
                entry.filename,
                entry.edge,
                entry.edge,
                png_data.len()
            );

            let path = self
                .writer
                .write_icon(entry.filename, &png_data)
                .map_err(|source| Error::Write {
                    path: self.writer.location().join(entry.filename),
                    source,
                    written: icons.iter().map(|icon| icon.path.clone()).collect(),
                })?;

            let icon = GeneratedIcon {
                entry: *entry,
                path,
            };
            report(Progress::IconGenerated { icon: &icon });
            icons.push(icon);
        }

        log::info!(
            "Generated {} icons in {}",
            icons.len(),
            self.writer.location().display()
        );

        Ok(icons)
    }
}

fn encode_png(image: &image::RgbaImage) -> image::ImageResult<Vec<u8>> {
    let mut png_data = Vec::new();
    image.write_with_encoder(PngEncoder::new(&mut png_data))?;
    Ok(png_data)
}
