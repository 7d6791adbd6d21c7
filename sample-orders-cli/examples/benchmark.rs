use std::error::Error;
use std::time::Instant;

use log::warn;

use sample_orders::generator::{GenerationConfig, Generator};
use sample_orders::output::{read_dataset, write_dataset, OutputPaths};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let dir = tempfile::tempdir()?;
    let paths = OutputPaths::new(dir.path(), "benchmark");
    let config = GenerationConfig {
        order_count: 100_000,
        seed: Some(0),
        ..GenerationConfig::default()
    };

    let start = Instant::now();
    let dataset = Generator::from_config(config)?.generate()?;
    warn!(
        "Generating {} orders and {} products took: {:.2?}",
        dataset.orders().len(),
        dataset.products().len(),
        start.elapsed()
    );

    let start_writing = Instant::now();
    write_dataset(&dataset, &paths)?;
    warn!("Writing took: {:.2?}", start_writing.elapsed());

    let start_reading = Instant::now();
    read_dataset(&paths)?.validate()?;
    warn!("Reading back and validating took: {:.2?}", start_reading.elapsed());

    warn!("Total took: {:.2?}", start.elapsed());

    Ok(())
}
