//! Tiered cart discounts.
//!
//! A discount is configured as a list of cart-total ranges ("tiers"), each
//! mapped to a percentage. At checkout, the eligible lines of the cart are
//! summed, the tier containing that total is picked, and the shopper is told
//! what they get and how much more to spend for the next tier.
//!
//! ```
//! use tiered_discount::{resolve, CartLine, CartSnapshot, Configuration};
//!
//! let config = Configuration::from_metafield(Some(
//!     r#"{
//!         "tiers": [{"from": 0, "to": 100, "discount": 5}, {"from": 100, "to": -1, "discount": 10}],
//!         "type": "tiered",
//!         "message": "You get {{percentage}}% off!",
//!         "next_message": "Spend {{remaining}} more to get {{percentage}}% off."
//!     }"#,
//! ));
//! let cart = CartSnapshot::new(vec![CartLine::variant("gid://shopify/ProductVariant/1", true, 50.0)]);
//!
//! let decision = resolve(&config, &cart);
//! assert_eq!(
//!     decision.discount().unwrap().message,
//!     "You get 5% off! Spend 50 more to get 10% off."
//! );
//! ```

pub mod cart;
pub mod config;
pub mod decision;
pub mod editor;
pub mod error;
pub mod render;
pub mod resolver;
pub mod tier;

pub use cart::{CartLine, CartSnapshot, Merchandise};
pub use config::{Configuration, DiscountType};
pub use decision::{DiscountApplicationStrategy, DiscountDecision};
pub use editor::{TierDraft, TierEditor};
pub use error::{Result, TierError};
pub use resolver::{resolve, EmptyReason, Resolution, TierResolver};
pub use tier::{Tier, UpperBound};
