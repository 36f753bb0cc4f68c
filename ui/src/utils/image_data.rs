//! Decoding of generated QR images for the preview.

use qrdemo_business::DataUri;

/// Decoded RGBA pixels ready to upload as an egui texture.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGBA bytes, 4 per pixel
    pub bytes: Vec<u8>,
}

impl ImageData {
    pub fn new(width: usize, height: usize, bytes: Vec<u8>) -> Self {
        Self {
            width,
            height,
            bytes,
        }
    }

    /// Decodes a PNG or JPEG data URI returned by the generator.
    ///
    /// SVG is reported as an error: the preview has no vector rasterizer.
    pub fn from_data_uri(uri: &str) -> Result<Self, String> {
        let parsed = DataUri::parse(uri).map_err(|err| err.to_string())?;
        if parsed.mime.contains("svg") {
            return Err("SVG preview is not available, use Download".to_owned());
        }
        let bytes = parsed.decode().map_err(|err| err.to_string())?;
        Self::decode(&bytes)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, String> {
        let img = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::debug!("Decoded preview image: {width}x{height}");
        Ok(Self::new(width as usize, height as usize, rgba.into_raw()))
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied([self.width, self.height], &self.bytes)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ::image::ImageEncoder;
    use ::image::codecs::png::PngEncoder;

    /// A 2x1 PNG (black, white) encoded as a data URI.
    pub(crate) fn tiny_png_data_uri() -> String {
        use base64::Engine as _;

        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(
                &[0, 0, 0, 255, 255, 255, 255, 255],
                2,
                1,
                ::image::ColorType::Rgba8.into(),
            )
            .unwrap();
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&png)
        )
    }

    #[test]
    fn test_decode_png_data_uri() {
        let img = ImageData::from_data_uri(&tiny_png_data_uri()).unwrap();
        assert_eq!((img.width, img.height), (2, 1));
        assert_eq!(img.bytes.len(), 8);
        assert_eq!(img.to_color_image().size, [2, 1]);
    }

    #[test]
    fn test_svg_is_not_rasterized() {
        let err = ImageData::from_data_uri("data:image/svg+xml;base64,PHN2Zy8+").unwrap_err();
        assert!(err.contains("SVG"));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        assert!(ImageData::decode(b"not an image").is_err());
    }
}
