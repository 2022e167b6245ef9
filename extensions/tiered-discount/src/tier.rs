use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Wire value of `to` meaning "no upper limit".
pub const UNBOUNDED_SENTINEL: f64 = -1.0;

/// Upper limit of a tier's cart-total range.
///
/// Serialized as a plain number, with `-1` standing for [`UpperBound::Unbounded`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub enum UpperBound {
    Bounded(f64),
    Unbounded,
}

impl UpperBound {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, UpperBound::Unbounded)
    }

    pub fn limit(&self) -> Option<f64> {
        match self {
            UpperBound::Bounded(limit) => Some(*limit),
            UpperBound::Unbounded => None,
        }
    }

    /// Inclusive: a total equal to the limit is still inside the range.
    pub fn admits(&self, total: f64) -> bool {
        match self {
            UpperBound::Bounded(limit) => *limit >= total,
            UpperBound::Unbounded => true,
        }
    }
}

impl From<f64> for UpperBound {
    fn from(value: f64) -> Self {
        if value == UNBOUNDED_SENTINEL {
            UpperBound::Unbounded
        } else {
            UpperBound::Bounded(value)
        }
    }
}

impl From<UpperBound> for f64 {
    fn from(bound: UpperBound) -> Self {
        bound.limit().unwrap_or(UNBOUNDED_SENTINEL)
    }
}

/// A cart-total range mapped to a discount percentage.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub from: f64,
    pub to: UpperBound,
    pub discount: f64,
}

impl Tier {
    pub fn new(from: f64, to: UpperBound, discount: f64) -> Self {
        Self { from, to, discount }
    }

    pub fn bounded(from: f64, to: f64, discount: f64) -> Self {
        Self::new(from, UpperBound::Bounded(to), discount)
    }

    pub fn unbounded(from: f64, discount: f64) -> Self {
        Self::new(from, UpperBound::Unbounded, discount)
    }

    /// `from <= total <= to`, with an unbounded `to` admitting everything above `from`.
    pub fn covers(&self, total: f64) -> bool {
        self.from <= total && self.to.admits(total)
    }
}

/// Orders tiers by their lower bound. Stable sorts keep stored order for ties.
pub fn by_lower_bound(a: &Tier, b: &Tier) -> Ordering {
    a.from.total_cmp(&b.from)
}
