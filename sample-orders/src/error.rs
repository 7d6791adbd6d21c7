use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error: {0}")]
    IoError(#[from] io::Error),
    #[error("Could not move the generated file into place: {0}")]
    PersistError(#[from] tempfile::PersistError),
    #[error("{0} ids would overflow a 32-bit identifier")]
    IdOverflow(&'static str),
    #[error("The day stride between orders must be at least one day")]
    InvalidDayStride,
    #[error("Order dates would fall outside the supported calendar range")]
    DateOutOfRange,
    #[error("Unknown locale `{0}`, expected `en` or `fr`")]
    UnknownLocale(String),
    #[error("Prices must be finite positive amounts")]
    InvalidPrice,
    #[error("Malformed order date `{0}`")]
    MalformedDate(String),
    #[error("Product {product_id} references unknown order {order_id}")]
    DanglingProduct { product_id: u32, order_id: u32 },
    #[error("Order {order_id} has {count} products, expected between 1 and 5")]
    ProductCount { order_id: u32, count: usize },
    #[error("{0} ids are not contiguous and strictly increasing")]
    NonIncreasingId(&'static str),
    #[error("Order {0} is not dated after the previous order")]
    NonIncreasingDate(u32),
    #[error("Product {0} is priced outside its category range")]
    PriceOutOfRange(u32),
}
