//! Headless tier list editor.
//!
//! Mirrors the admin form: a list that always holds at least one tier, where
//! new tiers start right after the previous one and are open-ended. The
//! resolver trusts whatever [`TierEditor::build`] lets through, so this is
//! where the range rules are enforced.
//!
//! ```
//! use tiered_discount::{TierDraft, TierEditor};
//!
//! let mut editor = TierEditor::new();
//! editor.update_tier(0, &TierDraft::new("0", "100", "5")).unwrap();
//! editor.add_tier().unwrap();
//! assert_eq!(editor.tiers()[1].from, 100.01);
//!
//! let config = editor.build(None, None).unwrap();
//! assert!(config.is_active());
//! ```

use tracing::debug;

use crate::config::{Configuration, DEFAULT_MESSAGE, DEFAULT_NEXT_MESSAGE};
use crate::error::{Result, TierError};
use crate::tier::{Tier, UpperBound};

/// Gap between one tier's upper bound and the next tier's lower bound.
pub const TIER_STEP: f64 = 0.01;

const NEW_TIER_DISCOUNT: f64 = 1.0;

/// Raw text field values for one tier, as typed into the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierDraft {
    pub from: String,
    pub to: String,
    pub discount: String,
}

impl TierDraft {
    pub fn new(from: impl Into<String>, to: impl Into<String>, discount: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            discount: discount.into(),
        }
    }

    pub fn parse(&self) -> Result<Tier> {
        Ok(Tier::new(
            parse_field("from", &self.from)?,
            UpperBound::from(parse_field("to", &self.to)?),
            parse_field("discount", &self.discount)?,
        ))
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| TierError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

#[derive(Clone, Debug, PartialEq)]
pub struct TierEditor {
    tiers: Vec<Tier>,
}

impl Default for TierEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TierEditor {
    /// Starts with a single open-ended tier from zero.
    pub fn new() -> Self {
        Self {
            tiers: vec![Tier::unbounded(0.0, NEW_TIER_DISCOUNT)],
        }
    }

    /// Loads an existing tier list for editing. An empty list gets the starting tier.
    pub fn from_tiers(tiers: Vec<Tier>) -> Self {
        if tiers.is_empty() {
            Self::new()
        } else {
            Self { tiers }
        }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Checks the range rules. `adding` additionally refuses a second open-ended tier.
    pub fn validate(&self, adding: bool) -> Result<()> {
        if adding && self.tiers.iter().any(|tier| tier.to.is_unbounded()) {
            return Err(TierError::UnboundedTierExists);
        }

        if let Some(index) = self.tiers.iter().position(|tier| tier.to == UpperBound::Bounded(0.0)) {
            return Err(TierError::ZeroUpperBound { index });
        }

        if let Some(index) = self
            .tiers
            .iter()
            .position(|tier| matches!(tier.to, UpperBound::Bounded(to) if to <= tier.from))
        {
            return Err(TierError::UpperNotAboveLower { index });
        }

        if let Some((index, tier)) = self
            .tiers
            .iter()
            .enumerate()
            .find(|(_, tier)| !(tier.discount > 0.0 && tier.discount <= 100.0))
        {
            return Err(TierError::DiscountOutOfRange {
                index,
                discount: tier.discount,
            });
        }

        Ok(())
    }

    /// Appends an open-ended tier starting just above the current last tier.
    pub fn add_tier(&mut self) -> Result<&Tier> {
        self.validate(true)?;

        let from = match self.tiers.last().and_then(|tier| tier.to.limit()) {
            Some(to) if to > 0.0 => next_lower_bound(to),
            _ => 0.0,
        };
        debug!(from, "adding tier");
        self.tiers.push(Tier::unbounded(from, NEW_TIER_DISCOUNT));

        Ok(&self.tiers[self.tiers.len() - 1])
    }

    /// Replaces a tier with parsed form values. Range rules are checked on build.
    pub fn update_tier(&mut self, index: usize, draft: &TierDraft) -> Result<()> {
        let tier = draft.parse()?;
        let slot = self.tiers.get_mut(index).ok_or(TierError::NoSuchTier { index })?;
        *slot = tier;
        Ok(())
    }

    pub fn remove_tier(&mut self, index: usize) -> Result<Tier> {
        if index >= self.tiers.len() {
            return Err(TierError::NoSuchTier { index });
        }
        if self.tiers.len() == 1 {
            return Err(TierError::LastTier);
        }
        Ok(self.tiers.remove(index))
    }

    /// Validates and produces the configuration to store on the discount.
    ///
    /// Unset messages get the form's default wording.
    pub fn build(&self, message: Option<&str>, next_message: Option<&str>) -> Result<Configuration> {
        self.validate(false)?;

        Ok(Configuration::tiered(self.tiers.clone())
            .with_message(message.unwrap_or(DEFAULT_MESSAGE))
            .with_next_message(next_message.unwrap_or(DEFAULT_NEXT_MESSAGE)))
    }
}

// Rounded to cents so repeated additions don't accumulate float noise.
fn next_lower_bound(to: f64) -> f64 {
    ((to + TIER_STEP) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_open_tier() {
        let editor = TierEditor::new();
        assert_eq!(editor.tiers(), &[Tier::unbounded(0.0, 1.0)]);
        assert!(editor.validate(false).is_ok());
    }

    #[test]
    fn adding_is_blocked_while_an_open_tier_exists() {
        let mut editor = TierEditor::new();
        assert!(matches!(editor.add_tier(), Err(TierError::UnboundedTierExists)));
        assert_eq!(editor.tiers().len(), 1);
    }

    #[test]
    fn new_tier_starts_one_cent_above_previous() {
        let mut editor = TierEditor::new();
        editor.update_tier(0, &TierDraft::new("0", "99.99", "5")).unwrap();
        let added = *editor.add_tier().unwrap();
        assert_eq!(added, Tier::unbounded(100.0, 1.0));
    }

    #[test]
    fn editing_may_create_second_open_tier() {
        let mut editor = TierEditor::from_tiers(vec![Tier::bounded(0.0, 100.0, 5.0), Tier::unbounded(100.01, 10.0)]);
        editor.update_tier(0, &TierDraft::new("0", "-1", "5")).unwrap();
        assert!(editor.validate(false).is_ok());
        assert!(matches!(editor.validate(true), Err(TierError::UnboundedTierExists)));
    }

    #[test]
    fn rejects_zero_upper_bound() {
        let editor = TierEditor::from_tiers(vec![Tier::bounded(0.0, 0.0, 5.0)]);
        assert!(matches!(editor.validate(false), Err(TierError::ZeroUpperBound { index: 0 })));
    }

    #[test]
    fn rejects_inverted_range() {
        let editor = TierEditor::from_tiers(vec![Tier::bounded(0.0, 50.0, 5.0), Tier::bounded(80.0, 80.0, 10.0)]);
        assert!(matches!(editor.validate(false), Err(TierError::UpperNotAboveLower { index: 1 })));
    }

    #[test]
    fn rejects_discount_outside_percent_range() {
        let editor = TierEditor::from_tiers(vec![Tier::unbounded(0.0, 150.0)]);
        assert!(matches!(
            editor.validate(false),
            Err(TierError::DiscountOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let err = TierDraft::new("ten", "100", "5").parse().unwrap_err();
        assert!(matches!(err, TierError::InvalidNumber { field: "from", .. }));
        assert!(TierDraft::new("0", "NaN", "5").parse().is_err());
        assert!(TierDraft::new(" 0 ", "-1", "5").parse().is_ok());
    }

    #[test]
    fn cannot_remove_last_tier() {
        let mut editor = TierEditor::new();
        assert!(matches!(editor.remove_tier(0), Err(TierError::LastTier)));
        assert!(matches!(editor.remove_tier(3), Err(TierError::NoSuchTier { index: 3 })));
    }

    #[test]
    fn build_fills_default_messages() {
        let config = TierEditor::new().build(None, Some("")).unwrap();
        assert_eq!(config.message.as_deref(), Some(DEFAULT_MESSAGE));
        assert_eq!(config.next_message.as_deref(), Some(""));
    }
}
