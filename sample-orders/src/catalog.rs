use std::ops::RangeInclusive;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_PRODUCTS_PER_ORDER: usize = 1;
pub const MAX_PRODUCTS_PER_ORDER: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "cancelled")]
    Cancelled,
    #[serde(rename = "delivered")]
    Delivered,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fruit,
    Vegetable,
    Beverage,
    Snack,
    Vehicle,
    Weapon,
}

/// How a category names its products: one fixed label, or a uniform pick
/// among several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductName {
    Fixed(&'static str),
    Choices(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Standard,
    Premium,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::InProgress,
        OrderStatus::Cancelled,
        OrderStatus::Delivered,
    ];
}

impl Distribution<OrderStatus> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> OrderStatus {
        OrderStatus::ALL[rng.gen_range(0..OrderStatus::ALL.len())]
    }
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Fruit,
        Category::Vegetable,
        Category::Beverage,
        Category::Snack,
        Category::Vehicle,
        Category::Weapon,
    ];

    #[must_use]
    pub fn product_name(self) -> ProductName {
        match self {
            Category::Fruit => ProductName::Fixed("Apple"),
            Category::Vegetable => ProductName::Fixed("Carrot"),
            Category::Beverage => ProductName::Fixed("Orange juice"),
            Category::Snack => ProductName::Fixed("Crisps"),
            Category::Vehicle => ProductName::Choices(&[
                "Car",
                "Train",
                "Plane",
                "Tank",
                "Rocket",
                "Spaceship",
            ]),
            Category::Weapon => ProductName::Choices(&["Missile", "Cannon", "Rocket launcher"]),
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Category::Fruit => "A crisp and juicy fruit, perfect for snacking.",
            Category::Vegetable => "A fresh vegetable for all your healthy recipes.",
            Category::Beverage => "A refreshing and natural drink.",
            Category::Snack => "A crunchy snack for every occasion.",
            Category::Vehicle => "A high-performance vehicle for all your transport needs.",
            Category::Weapon => "State-of-the-art equipment for your safety and defence.",
        }
    }

    #[must_use]
    pub fn price_tier(self) -> PriceTier {
        match self {
            Category::Vehicle | Category::Weapon => PriceTier::Premium,
            _ => PriceTier::Standard,
        }
    }
}

impl Distribution<Category> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Category {
        Category::ALL[rng.gen_range(0..Category::ALL.len())]
    }
}

impl ProductName {
    /// Lists are never empty, so this always yields a label.
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        match self {
            ProductName::Fixed(name) => name,
            ProductName::Choices(names) => names[rng.gen_range(0..names.len())],
        }
    }
}

impl PriceTier {
    #[must_use]
    pub fn bounds(self) -> RangeInclusive<f64> {
        match self {
            PriceTier::Standard => 1.0..=20.0,
            PriceTier::Premium => 1.0..=20_000.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_choice_lists_are_not_empty() {
        for category in Category::ALL {
            if let ProductName::Choices(names) = category.product_name() {
                assert!(!names.is_empty());
            }
        }
    }

    #[test]
    fn test_resolve_product_name() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(Category::Fruit.product_name().resolve(&mut rng), "Apple");
        }

        let names: HashSet<&str> = (0..500)
            .map(|_| Category::Weapon.product_name().resolve(&mut rng))
            .collect();
        assert_eq!(
            names,
            HashSet::from(["Missile", "Cannon", "Rocket launcher"])
        );
    }

    #[test]
    fn test_price_tier() {
        assert_eq!(Category::Vehicle.price_tier(), PriceTier::Premium);
        assert_eq!(Category::Weapon.price_tier(), PriceTier::Premium);
        assert_eq!(Category::Fruit.price_tier(), PriceTier::Standard);
        assert_eq!(Category::Snack.price_tier(), PriceTier::Standard);
        assert_eq!(PriceTier::Standard.bounds(), 1.0..=20.0);
        assert_eq!(PriceTier::Premium.bounds(), 1.0..=20_000.0);
    }

    #[test]
    fn test_sampling_covers_every_variant() {
        let mut rng = StdRng::seed_from_u64(42);
        let categories: HashSet<Category> = (0..1000).map(|_| rng.gen()).collect();
        assert_eq!(categories.len(), Category::ALL.len());

        let statuses: Vec<OrderStatus> = (0..1000).map(|_| rng.gen()).collect();
        for status in OrderStatus::ALL {
            assert!(statuses.contains(&status));
        }
    }

    #[test]
    fn test_csv_labels() {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        writer
            .serialize((OrderStatus::InProgress, Category::Beverage))
            .unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, "in progress,beverage\n");
    }
}
