use crate::render_pipeline::common::error::Result;
use crate::render_pipeline::raster::types::RasterData;

pub trait RasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<RasterData>;
}
