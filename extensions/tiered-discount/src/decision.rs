//! Resolver output, serialized in the shape the checkout expects.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountApplicationStrategy {
    First,
    Maximum,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub product_variant_id: String,
}

impl Target {
    pub fn variant(id: impl Into<String>) -> Self {
        Self {
            product_variant_id: id.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentage {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    pub percentage: Percentage,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub targets: Vec<Target>,
    pub value: Value,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountDecision {
    pub discount_application_strategy: DiscountApplicationStrategy,
    pub discounts: Vec<Discount>,
}

impl DiscountDecision {
    /// The canonical "no discount" answer.
    pub fn empty() -> Self {
        Self {
            discount_application_strategy: DiscountApplicationStrategy::First,
            discounts: Vec::new(),
        }
    }

    pub fn single(targets: Vec<Target>, percentage: String, message: String) -> Self {
        Self {
            discount_application_strategy: DiscountApplicationStrategy::Maximum,
            discounts: vec![Discount {
                targets,
                value: Value {
                    percentage: Percentage { value: percentage },
                },
                message,
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }

    pub fn discount(&self) -> Option<&Discount> {
        self.discounts.first()
    }
}
