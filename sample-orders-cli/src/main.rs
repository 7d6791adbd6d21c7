use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use log::info;

use sample_orders::address::Locale;
use sample_orders::generator::{GenerationConfig, Generator};
use sample_orders::output::{read_dataset, write_dataset, OutputPaths};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of orders to generate
    #[clap(short = 'n', long, default_value_t = 100)]
    pub(crate) orders: u32,
    /// Expected number of products; informational, each order draws 1 to 5 products
    #[clap(long)]
    pub(crate) products: Option<u32>,
    /// Id of the first order
    #[clap(long, default_value_t = 1000)]
    pub(crate) start_order_id: u32,
    /// Id of the first product
    #[clap(long, default_value_t = 1000)]
    pub(crate) start_product_id: u32,
    /// Date of the first order, YYYY-MM-DD
    #[clap(long, default_value = "2023-01-01")]
    pub(crate) start_date: NaiveDate,
    /// Days between two consecutive orders
    #[clap(long, default_value_t = 3)]
    pub(crate) day_stride: u32,
    /// Address locale, `en` or `fr`
    #[clap(long, default_value = "fr")]
    pub(crate) locale: Locale,
    /// Seed for reproducible output
    #[clap(long)]
    pub(crate) seed: Option<u64>,
    /// Directory the CSV files are written to
    #[clap(short, long, default_value = ".")]
    pub(crate) output_dir: PathBuf,
    /// Tag in the file names, `orders_<tag>.csv` and `products_<tag>.csv`
    #[clap(short, long, default_value = "dragdrop")]
    pub(crate) tag: String,
    /// Read the written files back and check their integrity
    #[clap(long)]
    pub(crate) verify: bool,
}

impl From<&Cli> for GenerationConfig {
    fn from(cli: &Cli) -> Self {
        GenerationConfig {
            order_count: cli.orders,
            product_count_hint: cli.products,
            start_order_id: cli.start_order_id,
            start_product_id: cli.start_product_id,
            base_date: cli.start_date,
            day_stride: cli.day_stride,
            locale: cli.locale,
            seed: cli.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let paths = OutputPaths::new(&cli.output_dir, &cli.tag);

    let mut generator = Generator::from_config(GenerationConfig::from(&cli))?;
    let dataset = generator.generate()?;
    write_dataset(&dataset, &paths)?;

    if cli.verify {
        let written = read_dataset(&paths)?;
        written.validate()?;
        if written != dataset {
            return Err("Written files do not match the generated records".into());
        }
        info!("Verified {} and {}", paths.orders.display(), paths.products.display());
    }

    Ok(())
}
