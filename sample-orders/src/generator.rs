use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::address::Locale;
use crate::catalog::{Category, OrderStatus, MAX_PRODUCTS_PER_ORDER, MIN_PRODUCTS_PER_ORDER};
use crate::dataset::Dataset;
use crate::error::GenError;
use crate::record::{Order, Price, Product};

pub const DEFAULT_ORDER_COUNT: u32 = 100;
pub const DEFAULT_START_ID: u32 = 1000;
pub const DEFAULT_DAY_STRIDE: u32 = 3;

/// Parameters of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub order_count: u32,
    /// Informational only: the number of products comes from the per-order draws.
    pub product_count_hint: Option<u32>,
    pub start_order_id: u32,
    pub start_product_id: u32,
    pub base_date: NaiveDate,
    pub day_stride: u32,
    pub locale: Locale,
    /// When set, the run is reproducible.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            order_count: DEFAULT_ORDER_COUNT,
            product_count_hint: None,
            start_order_id: DEFAULT_START_ID,
            start_product_id: DEFAULT_START_ID,
            base_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            day_stride: DEFAULT_DAY_STRIDE,
            locale: Locale::default(),
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// # Errors
    /// Errors when the run could not be generated without wrapping or colliding:
    /// 1. `day_stride` is zero
    /// 2. the order id range does not fit in a `u32`
    /// 3. the worst-case product id range does not fit in a `u32`
    /// 4. the last order's date is outside the calendar range
    pub fn validate(&self) -> Result<(), GenError> {
        if self.day_stride == 0 {
            return Err(GenError::InvalidDayStride);
        }
        if self.order_count == 0 {
            return Ok(());
        }

        let last_index = u64::from(self.order_count) - 1;
        if u64::from(self.start_order_id) + last_index > u64::from(u32::MAX) {
            return Err(GenError::IdOverflow("Order"));
        }
        let max_products = u64::from(self.order_count) * MAX_PRODUCTS_PER_ORDER as u64;
        if u64::from(self.start_product_id) + max_products - 1 > u64::from(u32::MAX) {
            return Err(GenError::IdOverflow("Product"));
        }
        // the last order may land anywhere up to the end of its day
        let last_offset = i64::try_from(last_index * u64::from(self.day_stride) + 1)
            .map_err(|_| GenError::DateOutOfRange)?;
        let days = Duration::try_days(last_offset).ok_or(GenError::DateOutOfRange)?;
        self.base_datetime()?
            .checked_add_signed(days)
            .ok_or(GenError::DateOutOfRange)?;
        Ok(())
    }

    fn base_datetime(&self) -> Result<NaiveDateTime, GenError> {
        self.base_date
            .and_hms_opt(0, 0, 0)
            .ok_or(GenError::DateOutOfRange)
    }
}

/// Builds a [`Dataset`] from a [`GenerationConfig`] and a source of randomness.
#[derive(Debug)]
pub struct Generator<R> {
    config: GenerationConfig,
    rng: R,
}

impl Generator<StdRng> {
    /// Seeds from `config.seed`, or from OS entropy when no seed is set.
    ///
    /// # Errors
    /// Errors when the configuration is invalid, see [`GenerationConfig::validate`]
    pub fn from_config(config: GenerationConfig) -> Result<Self, GenError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Generator::with_rng(config, rng)
    }
}

impl<R: Rng> Generator<R> {
    /// # Errors
    /// Errors when the configuration is invalid, see [`GenerationConfig::validate`]
    pub fn with_rng(config: GenerationConfig, rng: R) -> Result<Self, GenError> {
        config.validate()?;
        Ok(Generator { config, rng })
    }

    /// # Errors
    /// Errors when an order id or date computation overflows
    pub fn generate(&mut self) -> Result<Dataset, GenError> {
        let mut orders = Vec::with_capacity(self.config.order_count as usize);
        let mut products = Vec::new();
        let mut next_product_id = self.config.start_product_id;

        for index in 0..self.config.order_count {
            let order = self.order(index)?;
            let product_count = self
                .rng
                .gen_range(MIN_PRODUCTS_PER_ORDER..=MAX_PRODUCTS_PER_ORDER);
            debug!(
                "Order {} dated {} with {} products",
                order.order_id, order.date, product_count
            );
            for _ in 0..product_count {
                products.push(self.product(next_product_id, order.order_id)?);
                next_product_id = next_product_id.wrapping_add(1);
            }
            orders.push(order);
        }

        if let Some(hint) = self.config.product_count_hint {
            if hint as usize != products.len() {
                warn!(
                    "Generated {} products although {} were hinted, product counts are drawn per order",
                    products.len(),
                    hint
                );
            }
        }
        info!(
            "Generated {} orders and {} products",
            orders.len(),
            products.len()
        );

        Ok(Dataset::new(orders, products))
    }

    fn order(&mut self, index: u32) -> Result<Order, GenError> {
        let order_id = self
            .config
            .start_order_id
            .checked_add(index)
            .ok_or(GenError::IdOverflow("Order"))?;
        let day = i64::from(index) * i64::from(self.config.day_stride);
        let time_of_day = Duration::hours(self.rng.gen_range(0..=23))
            + Duration::minutes(self.rng.gen_range(0..=59))
            + Duration::seconds(self.rng.gen_range(0..=59));
        let date = self
            .config
            .base_datetime()?
            .checked_add_signed(Duration::try_days(day).ok_or(GenError::DateOutOfRange)?)
            .and_then(|date| date.checked_add_signed(time_of_day))
            .ok_or(GenError::DateOutOfRange)?;
        let status: OrderStatus = self.rng.gen();
        let address = self.config.locale.address(&mut self.rng);

        Ok(Order::new(order_id, address, date, status))
    }

    fn product(&mut self, product_id: u32, order_id: u32) -> Result<Product, GenError> {
        let category: Category = self.rng.gen();
        let name = category.product_name().resolve(&mut self.rng);
        let price = Price::try_from(self.rng.gen_range(category.price_tier().bounds()))?;

        Ok(Product::new(product_id, order_id, category, name, price))
    }
}
