//! Discount configuration as stored in the discount's JSON metafield.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::tier::Tier;

pub const METAFIELD_NAMESPACE: &str = "$app:tiered-discount";
pub const METAFIELD_KEY: &str = "function-configuration";

pub const DEFAULT_MESSAGE: &str = "Congratulations! You get {{percentage}} % off your order!";
pub const DEFAULT_NEXT_MESSAGE: &str = "Spend {{remaining}} more and get {{percentage}} % off.";

/// Discriminator stored under `type`. Anything other than `"tiered"` disables the discount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Tiered,
    #[serde(other)]
    Unsupported,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default, deserialize_with = "tiers_or_empty")]
    pub tiers: Vec<Tier>,
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_message: Option<String>,
}

impl Default for Configuration {
    /// What an unconfigured discount evaluates with: no tiers, inactive type.
    fn default() -> Self {
        Self {
            tiers: Vec::new(),
            discount_type: DiscountType::Unsupported,
            message: None,
            next_message: None,
        }
    }
}

impl Configuration {
    pub fn tiered(tiers: Vec<Tier>) -> Self {
        Self {
            tiers,
            discount_type: DiscountType::Tiered,
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_next_message(mut self, next_message: impl Into<String>) -> Self {
        self.next_message = Some(next_message.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.discount_type == DiscountType::Tiered && !self.tiers.is_empty()
    }

    /// The tier message template, falling back to [`DEFAULT_MESSAGE`] when unset or blank.
    pub fn message_template(&self) -> &str {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => DEFAULT_MESSAGE,
        }
    }

    /// The next-tier template. Unset or blank means no next-tier clause.
    pub fn next_message_template(&self) -> Option<&str> {
        self.next_message.as_deref().filter(|message| !message.is_empty())
    }

    /// Decodes the raw metafield value. Never fails: a missing or unreadable
    /// value yields [`Configuration::default`], which resolves to no discount.
    pub fn from_metafield(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };

        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "discarding unreadable discount configuration");
                Self::default()
            }
        }
    }

    pub fn to_metafield_value(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// A `tiers` value that is not an array is treated as no tiers at all.
fn tiers_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Tier>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| Tier::deserialize(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::UpperBound;
    use serde_json::json;

    #[test]
    fn decodes_wire_shape() {
        let raw = json!({
            "tiers": [
                {"from": 0, "to": 100, "discount": 5},
                {"from": 100.01, "to": -1, "discount": 10}
            ],
            "type": "tiered",
            "message": "You get {{percentage}}% off",
            "next_message": "Spend {{remaining}} more for {{percentage}}%"
        })
        .to_string();

        let config = Configuration::from_metafield(Some(&raw));
        assert!(config.is_active());
        assert_eq!(config.tiers.len(), 2);
        assert_eq!(config.tiers[1].to, UpperBound::Unbounded);
        assert_eq!(config.message_template(), "You get {{percentage}}% off");
    }

    #[test]
    fn unknown_type_is_unsupported() {
        let config = Configuration::from_metafield(Some(r#"{"tiers": [], "type": "tiers"}"#));
        assert_eq!(config.discount_type, DiscountType::Unsupported);
        assert!(!config.is_active());
    }

    #[test]
    fn non_array_tiers_decode_as_empty() {
        let config = Configuration::from_metafield(Some(r#"{"tiers": {"from": 0}, "type": "tiered"}"#));
        assert_eq!(config.discount_type, DiscountType::Tiered);
        assert!(config.tiers.is_empty());
        assert!(!config.is_active());
    }

    #[test]
    fn missing_or_broken_metafield_falls_back_to_default() {
        assert_eq!(Configuration::from_metafield(None), Configuration::default());
        assert_eq!(Configuration::from_metafield(Some("{not json")), Configuration::default());
    }

    #[test]
    fn blank_templates_use_fallbacks() {
        let config = Configuration::tiered(vec![Tier::unbounded(0.0, 5.0)])
            .with_message("")
            .with_next_message("");
        assert_eq!(config.message_template(), DEFAULT_MESSAGE);
        assert_eq!(config.next_message_template(), None);
    }

    #[test]
    fn metafield_value_keeps_sentinel_and_type() {
        let config = Configuration::tiered(vec![Tier::unbounded(0.0, 5.0)]).with_message("hi");
        let value: Value = serde_json::from_str(&config.to_metafield_value().unwrap()).unwrap();
        assert_eq!(value["type"], "tiered");
        assert_eq!(value["tiers"][0]["to"], -1.0);
        assert!(value.get("next_message").is_none());
    }
}
