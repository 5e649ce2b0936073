use std::io::Write;

use tracing::debug;

use crate::render_pipeline::common::error::{RenderError, Result};
use crate::render_pipeline::enhance::RgbImageData;
use crate::render_pipeline::png::types::{PngCompression, RenderConfig};
use crate::render_pipeline::png::writer::PngWriter;

pub struct StandardPngWriter;

impl PngWriter for StandardPngWriter {
    fn write_png(
        &self,
        image: &RgbImageData,
        output: &mut dyn Write,
        config: &RenderConfig,
    ) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width, image.height);

        let expected = image.width * image.height * 3;
        if image.data.len() != expected {
            return Err(RenderError::EncodeError(format!(
                "pixel buffer has {} bytes, expected {}",
                image.data.len(),
                expected
            )));
        }

        let compression = match config.compression {
            PngCompression::Fast => png::Compression::Fast,
            PngCompression::Default => png::Compression::Default,
            PngCompression::Best => png::Compression::Best,
        };

        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(
                std::io::Cursor::new(&mut buffer),
                image.width as u32,
                image.height as u32,
            );
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(compression);

            let mut writer = encoder
                .write_header()
                .map_err(|e| RenderError::EncodeError(e.to_string()))?;
            writer
                .write_image_data(&image.data)
                .map_err(|e| RenderError::EncodeError(e.to_string()))?;
            writer
                .finish()
                .map_err(|e| RenderError::EncodeError(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn encodes_valid_rgb_buffer() {
        let image = RgbImageData {
            width: 2,
            height: 2,
            data: vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 128, 128, 128],
        };

        let mut output = Cursor::new(Vec::new());
        StandardPngWriter
            .write_png(&image, &mut output, &RenderConfig::default())
            .unwrap();

        let bytes = output.into_inner();
        assert_eq!(&bytes[1..4], b"PNG");

        let decoder = png::Decoder::new(Cursor::new(bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        assert_eq!(info.width, 2);
        assert_eq!(info.height, 2);
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(&buf[..info.buffer_size()], &image.data[..]);
    }

    #[test]
    fn rejects_short_pixel_buffer() {
        let image = RgbImageData {
            width: 2,
            height: 2,
            data: vec![0u8; 5],
        };

        let mut output = Cursor::new(Vec::new());
        let result = StandardPngWriter.write_png(&image, &mut output, &RenderConfig::default());
        assert!(matches!(result, Err(RenderError::EncodeError(_))));
    }
}
