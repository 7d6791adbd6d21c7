use std::convert::TryFrom;
use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

use crate::catalog::{Category, OrderStatus, PriceTier};
use crate::error::GenError;

pub const PRICE_DECIMAL_PLACES: u32 = 2;
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const ORDER_HEADERS: [&str; 4] = ["order_id", "address", "date", "status"];
pub const PRODUCT_HEADERS: [&str; 6] = [
    "product_id",
    "order_id",
    "category",
    "name",
    "description",
    "price",
];

/// A non-negative amount carried with exactly two decimal places.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "Decimal")]
pub struct Price(Decimal);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_id: u32,
    pub address: String,
    pub date: NaiveDateTime,
    pub status: OrderStatus,
}

/// An order row as it appears in the CSV file.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Deserialize)]
pub struct OrderRecord {
    pub order_id: u32,
    pub address: String,
    pub date: String,
    pub status: OrderStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub product_id: u32,
    pub order_id: u32,
    pub category: Category,
    pub name: String,
    pub description: String,
    pub price: Price,
}

impl TryFrom<Decimal> for Price {
    type Error = GenError;
    fn try_from(decimal: Decimal) -> Result<Self, Self::Error> {
        if decimal >= Decimal::ZERO {
            let mut rounded = decimal.round_dp_with_strategy(
                PRICE_DECIMAL_PLACES,
                RoundingStrategy::MidpointAwayFromZero,
            );
            rounded.rescale(PRICE_DECIMAL_PLACES);
            Ok(Price(rounded))
        } else {
            Err(GenError::InvalidPrice)
        }
    }
}

impl TryFrom<f64> for Price {
    type Error = GenError;
    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Price::try_from(Decimal::from_f64(amount).ok_or(GenError::InvalidPrice)?)
    }
}

impl Price {
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the price lies within the inclusive bounds of `tier`.
    #[must_use]
    pub fn within(&self, tier: PriceTier) -> bool {
        let bounds = tier.bounds();
        match (
            Decimal::from_f64(*bounds.start()),
            Decimal::from_f64(*bounds.end()),
        ) {
            (Some(low), Some(high)) => low <= self.0 && self.0 <= high,
            _ => false,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Order {
    #[must_use]
    pub fn new(order_id: u32, address: String, date: NaiveDateTime, status: OrderStatus) -> Self {
        Order {
            order_id,
            address,
            date,
            status,
        }
    }
}

impl Serialize for Order {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Order", 4)?;
        state.serialize_field("order_id", &self.order_id)?;
        state.serialize_field("address", &self.address)?;
        state.serialize_field("date", &self.date.format(DATE_FORMAT).to_string())?;
        state.serialize_field("status", &self.status)?;
        state.end()
    }
}

impl TryFrom<OrderRecord> for Order {
    type Error = GenError;
    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let date = NaiveDateTime::parse_from_str(&record.date, DATE_FORMAT)
            .map_err(|_| GenError::MalformedDate(record.date.clone()))?;
        Ok(Order::new(record.order_id, record.address, date, record.status))
    }
}

impl Product {
    #[must_use]
    pub fn new(
        product_id: u32,
        order_id: u32,
        category: Category,
        name: &str,
        price: Price,
    ) -> Self {
        Product {
            product_id,
            order_id,
            category,
            name: name.to_string(),
            description: category.description().to_string(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 4)
            .unwrap()
            .and_hms_opt(13, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_price_try_from() {
        assert!(Price::try_from(-0.01).is_err());
        assert!(Price::try_from(f64::NAN).is_err());
        assert!(Price::try_from(Decimal::ZERO).is_ok());

        assert_eq!(Price::try_from(12.346).unwrap().to_string(), "12.35");
        assert_eq!(Price::try_from(12.344_9).unwrap().to_string(), "12.34");
        assert_eq!(Price::try_from(7.0).unwrap().to_string(), "7.00");
        assert_eq!(Price::try_from(Decimal::new(2, 0)).unwrap().to_string(), "2.00");
    }

    #[test]
    fn test_price_within_tier() {
        let cheap = Price::try_from(19.99).unwrap();
        let pricey = Price::try_from(15_000.0).unwrap();
        assert!(cheap.within(PriceTier::Standard));
        assert!(cheap.within(PriceTier::Premium));
        assert!(!pricey.within(PriceTier::Standard));
        assert!(pricey.within(PriceTier::Premium));
        assert!(Price::try_from(1.0).unwrap().within(PriceTier::Standard));
        assert!(Price::try_from(20.0).unwrap().within(PriceTier::Standard));
        assert!(!Price::try_from(0.99).unwrap().within(PriceTier::Standard));
    }

    #[test]
    fn test_serialize_order() {
        let order = Order::new(
            1000,
            "12, rue de la Paix, 75002 Paris".to_string(),
            sample_date(),
            OrderStatus::Delivered,
        );
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        writer.serialize(&order).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            out,
            "1000,\"12, rue de la Paix, 75002 Paris\",2023-01-04 13:05:09,delivered\n"
        );
    }

    #[test]
    fn test_serialize_product() {
        let product = Product::new(
            1003,
            1000,
            Category::Vehicle,
            "Tank",
            Price::try_from(15_999.5).unwrap(),
        );
        assert_eq!(product.description, Category::Vehicle.description());

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        writer.serialize(&product).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            out,
            format!(
                "1003,1000,vehicle,Tank,{},15999.50\n",
                Category::Vehicle.description()
            )
        );
    }

    #[test]
    fn test_order_try_from_order_record() {
        let record = OrderRecord {
            order_id: 1000,
            address: "somewhere".to_string(),
            date: "2023-01-04 13:05:09".to_string(),
            status: OrderStatus::Cancelled,
        };
        let order = Order::try_from(record).unwrap();
        assert_eq!(order.date, sample_date());
        assert_eq!(order.status, OrderStatus::Cancelled);

        let record = OrderRecord {
            order_id: 1000,
            address: "somewhere".to_string(),
            date: "2023-01-04T13:05:09".to_string(),
            status: OrderStatus::Cancelled,
        };
        assert!(matches!(
            Order::try_from(record),
            Err(GenError::MalformedDate(_))
        ));
    }
}
