use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::Error;
use crate::raster::SourceImage;
use crate::resource::source::SourceImageLoader;

pub struct FileSystemSourceImageLoader {
    pub path: PathBuf,
}

impl FileSystemSourceImageLoader {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn decode(&self) -> image::ImageResult<image::DynamicImage> {
        image::ImageReader::open(&self.path)?
            .with_guessed_format()?
            .decode()
    }
}

impl SourceImageLoader for FileSystemSourceImageLoader {
    fn load_source_image(&self) -> Result<SourceImage> {
        let decoded = match self.decode() {
            Ok(decoded) => decoded,
            Err(image::ImageError::IoError(error))
                if error.kind() == std::io::ErrorKind::NotFound =>
            {
                return Err(Error::MissingSource {
                    path: self.path.clone(),
                }
                .into())
            }
            Err(source) => {
                return Err(Error::Decode {
                    path: self.path.clone(),
                    source,
                }
                .into())
            }
        };

        log::debug!(
            "Decoded {} as {}x{} {:?}",
            self.path.display(),
            decoded.width(),
            decoded.height(),
            decoded.color()
        );

        Ok(SourceImage::from_dynamic_image(decoded))
    }
}
