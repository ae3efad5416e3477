use image::imageops::FilterType;

/// A decoded source raster, normalized to 8-bit RGBA and held read-only.
pub struct SourceImage {
    data: image::RgbaImage,
}

impl SourceImage {
    pub fn from_rgba_image(rgba_image: image::RgbaImage) -> Self {
        Self { data: rgba_image }
    }

    /// Converts any decoded pixel layout to RGBA. Inputs without an alpha
    /// channel come out fully opaque.
    pub fn from_dynamic_image(dynamic_image: image::DynamicImage) -> Self {
        let data = match dynamic_image {
            image::DynamicImage::ImageRgba8(rgba_image) => rgba_image,
            other => other.to_rgba8(),
        };

        Self::from_rgba_image(data)
    }

    #[cfg(test)]
    pub fn data(&self) -> &image::RgbaImage {
        &self.data
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.data.dimensions()
    }

    /// Stretches the source onto an `edge` x `edge` square, scaling each axis
    /// on its own.
    pub fn resize_square(&self, edge: u32) -> image::RgbaImage {
        image::imageops::resize(&self.data, edge, edge, FilterType::Lanczos3)
    }
}
