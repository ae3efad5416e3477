use anyhow::Result;

use crate::raster::SourceImage;

pub mod file;

pub trait SourceImageLoader {
    fn load_source_image(&self) -> Result<SourceImage>;
}
