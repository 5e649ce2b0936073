use rasterviz_rs::logger;
use rasterviz_rs::render_pipeline::{Enhancement, RasterToPngPipeline, RenderConfig};

use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <input.tif> <output.png> [percentile|gamma]", args[0]);
        std::process::exit(2);
    }
    let input = &args[1];
    let output = &args[2];
    let enhancement: Enhancement = match args.get(3) {
        Some(name) => name.parse()?,
        None => Enhancement::default(),
    };

    let config = RenderConfig::builder().enhancement(enhancement).build();
    let pipeline = RasterToPngPipeline::new(config);

    info!("Raster to PNG pipeline initialized");
    info!("Enhancement: {:?}", pipeline.config().enhancement);
    info!("PNG compression: {:?}", pipeline.config().compression);

    match pipeline.convert_file(input, output) {
        Ok(_) => {
            info!("Conversion successful!");
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            Err(e.into())
        }
    }
}
