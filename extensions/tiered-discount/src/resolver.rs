//! Picks the tier a cart falls into and words the discount message.
//!
//! Tiers are assumed valid (see [`crate::editor::TierEditor`]); they are
//! sorted here but never checked. When tiers overlap, the one with the lowest
//! `from` wins.

use tracing::debug;

use crate::cart::CartSnapshot;
use crate::config::Configuration;
use crate::decision::DiscountDecision;
use crate::render::{format_amount, format_number, render};
use crate::tier::{by_lower_bound, Tier};

/// Why an evaluation produced the empty decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    /// Wrong `type`, or no tiers configured.
    ConfigurationMismatch,
    NoEligibleTarget,
    NoMatchingTier,
    /// The matching tier's discount is zero or negative.
    NonPositiveDiscount,
}

/// Outcome of one evaluation, before it is flattened into a [`DiscountDecision`].
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Applied(DiscountDecision),
    Empty(EmptyReason),
}

impl Resolution {
    pub fn into_decision(self) -> DiscountDecision {
        match self {
            Resolution::Applied(decision) => decision,
            Resolution::Empty(_) => DiscountDecision::empty(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TierResolver;

impl TierResolver {
    pub fn resolve(&self, configuration: &Configuration, cart: &CartSnapshot) -> DiscountDecision {
        let resolution = self.evaluate(configuration, cart);
        if let Resolution::Empty(reason) = &resolution {
            debug!(?reason, "no tiered discount applies");
        }
        resolution.into_decision()
    }

    pub fn evaluate(&self, configuration: &Configuration, cart: &CartSnapshot) -> Resolution {
        if !configuration.is_active() {
            return Resolution::Empty(EmptyReason::ConfigurationMismatch);
        }

        let mut tiers = configuration.tiers.clone();
        tiers.sort_by(by_lower_bound);

        let eligible = cart.eligible_lines();
        let cart_total = eligible.total;

        let Some(index) = tiers.iter().position(|tier| tier.covers(cart_total)) else {
            return Resolution::Empty(EmptyReason::NoMatchingTier);
        };
        if eligible.targets.is_empty() {
            return Resolution::Empty(EmptyReason::NoEligibleTarget);
        }

        let tier = &tiers[index];
        if tier.discount <= 0.0 {
            return Resolution::Empty(EmptyReason::NonPositiveDiscount);
        }

        let percentage = format_number(tier.discount);
        let mut message = render(configuration.message_template(), &[("percentage", percentage.as_str())]);

        if let Some(clause) = next_tier_clause(configuration, tiers.get(index + 1), cart_total) {
            message.push(' ');
            message.push_str(&clause);
        }

        debug!(
            cart_total,
            tier.from = tier.from,
            %percentage,
            targets = eligible.targets.len(),
            "tiered discount applies"
        );

        Resolution::Applied(DiscountDecision::single(eligible.targets, percentage, message))
    }
}

fn next_tier_clause(configuration: &Configuration, next: Option<&Tier>, cart_total: f64) -> Option<String> {
    let next = next?;
    let template = configuration.next_message_template()?;

    let percentage = format_number(next.discount);
    let remaining = format_amount(next.from - cart_total);
    Some(render(
        template,
        &[("percentage", percentage.as_str()), ("remaining", remaining.as_str())],
    ))
}

/// Shorthand for [`TierResolver::resolve`].
pub fn resolve(configuration: &Configuration, cart: &CartSnapshot) -> DiscountDecision {
    TierResolver.resolve(configuration, cart)
}
