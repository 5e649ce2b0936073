use std::io::Write;

use crate::render_pipeline::common::error::Result;
use crate::render_pipeline::enhance::RgbImageData;
use crate::render_pipeline::png::types::RenderConfig;

pub trait PngWriter {
    fn write_png(
        &self,
        image: &RgbImageData,
        output: &mut dyn Write,
        config: &RenderConfig,
    ) -> Result<()>;
}
