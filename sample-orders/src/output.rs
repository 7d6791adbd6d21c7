use std::convert::TryFrom;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::info;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::dataset::Dataset;
use crate::error::GenError;
use crate::record::{Order, OrderRecord, Product, ORDER_HEADERS, PRODUCT_HEADERS};

pub const DEFAULT_TAG: &str = "dragdrop";

/// Locations of the two CSV files of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub orders: PathBuf,
    pub products: PathBuf,
}

impl OutputPaths {
    /// `dir/orders_<tag>.csv` and `dir/products_<tag>.csv`
    pub fn new(dir: impl AsRef<Path>, tag: &str) -> Self {
        let dir = dir.as_ref();
        OutputPaths {
            orders: dir.join(format!("orders_{tag}.csv")),
            products: dir.join(format!("products_{tag}.csv")),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        OutputPaths::new(".", DEFAULT_TAG)
    }
}

/// Writes both files of `dataset`.
///
/// Each file goes to a temporary file next to its destination, and neither
/// destination is touched until both have been written out, so a failure
/// leaves any previous output in place.
///
/// # Errors
/// Errors when a destination directory is not writable, when writing runs out
/// of space, or when a finished file cannot be renamed into place.
pub fn write_dataset(dataset: &Dataset, paths: &OutputPaths) -> Result<(), GenError> {
    let orders = write_records(&paths.orders, &ORDER_HEADERS, dataset.orders())?;
    let products = write_records(&paths.products, &PRODUCT_HEADERS, dataset.products())?;

    orders.persist(&paths.orders)?;
    products.persist(&paths.products)?;
    info!(
        "Wrote {} orders to {} and {} products to {}",
        dataset.orders().len(),
        paths.orders.display(),
        dataset.products().len(),
        paths.products.display()
    );
    Ok(())
}

fn write_records<T: Serialize>(
    destination: &Path,
    headers: &[&str],
    records: &[T],
) -> Result<NamedTempFile, GenError> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(NamedTempFile::new_in(dir)?);

    writer.write_record(headers)?;
    for record in records {
        writer.serialize(record)?;
    }
    let mut file = writer
        .into_inner()
        .map_err(|e| GenError::IoError(e.into_error()))?;
    file.flush()?;
    file.as_file().sync_all()?;
    Ok(file)
}

/// Reads back the two files written by [`write_dataset`].
///
/// # Errors
/// Errors when a file is missing, is not valid CSV, or holds a row that does
/// not parse into its record type.
pub fn read_dataset(paths: &OutputPaths) -> Result<Dataset, GenError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(&paths.orders)?;
    let orders = reader
        .deserialize::<OrderRecord>()
        .map(|record| Order::try_from(record?))
        .collect::<Result<Vec<_>, _>>()?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(&paths.products)?;
    let products = reader
        .deserialize::<Product>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset::new(orders, products))
}
