use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::render_pipeline::{
    common::error::{RenderError, Result},
    enhance::compose_rgb,
    png::{PngWriter, RenderConfig, StandardPngWriter},
    raster::{RasterReader, TiffRasterReader},
};

pub struct RasterToPngPipeline<R: RasterReader, W: PngWriter> {
    reader: R,
    writer: W,
    config: RenderConfig,
}

impl RasterToPngPipeline<TiffRasterReader, StandardPngWriter> {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            reader: TiffRasterReader,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: RasterReader, W: PngWriter> RasterToPngPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: RenderConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension
            && (width > max || height > max)
        {
            return Err(RenderError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting raster to PNG rendering");

        let raster = {
            let _span = tracing::info_span!("decode_raster").entered();
            self.reader.read_raster(input_data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = raster.width,
                height = raster.height
            )
            .entered();
            self.validate_dimensions(raster.width, raster.height)?;
        }

        let image = {
            let _span = tracing::info_span!("compose_rgb", bands = raster.band_count()).entered();
            compose_rgb(&raster, self.config.enhancement)?
        };

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_png(&image, output, &self.config)?;
        }

        info!(
            width = raster.width,
            height = raster.height,
            bands = raster.band_count(),
            "Rendering complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Rendering file"
        );

        // Read the whole file up front so the source handle is released
        // before any decoding happens
        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                RenderError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                RenderError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(&input_data, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }
}
