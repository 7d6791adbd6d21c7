use std::collections::HashMap;

use crate::catalog::{MAX_PRODUCTS_PER_ORDER, MIN_PRODUCTS_PER_ORDER};
use crate::error::GenError;
use crate::record::{Order, Product};

/// Orders and their products, both in emission order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub(crate) orders: Vec<Order>,
    pub(crate) products: Vec<Product>,
}

impl Dataset {
    #[must_use]
    pub fn new(orders: Vec<Order>, products: Vec<Product>) -> Self {
        Dataset { orders, products }
    }

    #[must_use]
    pub fn orders(&self) -> &Vec<Order> {
        &self.orders
    }

    #[must_use]
    pub fn products(&self) -> &Vec<Product> {
        &self.products
    }

    pub fn products_for(&self, order_id: u32) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.order_id == order_id)
    }

    /// # Errors
    /// Returns the first violation found, checking in order:
    /// 1. order ids are contiguous and strictly increasing
    /// 2. order dates strictly increase
    /// 3. product ids are contiguous and strictly increasing
    /// 4. every product references a known order
    /// 5. every product is priced within its category's range
    /// 6. every order has between 1 and 5 products
    pub fn validate(&self) -> Result<(), GenError> {
        for pair in self.orders.windows(2) {
            if pair[0].order_id.checked_add(1) != Some(pair[1].order_id) {
                return Err(GenError::NonIncreasingId("Order"));
            }
            if pair[1].date.date() <= pair[0].date.date() {
                return Err(GenError::NonIncreasingDate(pair[1].order_id));
            }
        }
        for pair in self.products.windows(2) {
            if pair[0].product_id.checked_add(1) != Some(pair[1].product_id) {
                return Err(GenError::NonIncreasingId("Product"));
            }
        }

        let mut counts: HashMap<u32, usize> = self
            .orders
            .iter()
            .map(|order| (order.order_id, 0))
            .collect();
        for product in &self.products {
            match counts.get_mut(&product.order_id) {
                Some(count) => *count += 1,
                None => {
                    return Err(GenError::DanglingProduct {
                        product_id: product.product_id,
                        order_id: product.order_id,
                    })
                }
            }
            if !product.price.within(product.category.price_tier()) {
                return Err(GenError::PriceOutOfRange(product.product_id));
            }
        }

        // report in order id order so the error is stable across runs
        for order in &self.orders {
            let count = counts[&order.order_id];
            if !(MIN_PRODUCTS_PER_ORDER..=MAX_PRODUCTS_PER_ORDER).contains(&count) {
                return Err(GenError::ProductCount {
                    order_id: order.order_id,
                    count,
                });
            }
        }

        Ok(())
    }
}
