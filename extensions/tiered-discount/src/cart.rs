use crate::decision::Target;

/// What a cart line is selling.
#[derive(Clone, Debug, PartialEq)]
pub enum Merchandise {
    /// `eligible` is the platform's answer to the product tag predicate.
    ProductVariant { id: String, eligible: bool },
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub merchandise: Merchandise,
    pub total_amount: f64,
}

impl CartLine {
    pub fn variant(id: impl Into<String>, eligible: bool, total_amount: f64) -> Self {
        Self {
            merchandise: Merchandise::ProductVariant {
                id: id.into(),
                eligible,
            },
            total_amount,
        }
    }

    pub fn other(total_amount: f64) -> Self {
        Self {
            merchandise: Merchandise::Other,
            total_amount,
        }
    }

    /// The variant id when this line counts toward the tiered total.
    pub fn eligible_variant(&self) -> Option<&str> {
        match &self.merchandise {
            Merchandise::ProductVariant { id, eligible: true } => Some(id),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
}

/// Eligible lines folded into a running total and the discount targets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EligibleLines {
    pub total: f64,
    pub targets: Vec<Target>,
}

impl CartSnapshot {
    pub fn new(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    pub fn eligible_lines(&self) -> EligibleLines {
        self.lines
            .iter()
            .fold(EligibleLines::default(), |mut acc, line| {
                if let Some(id) = line.eligible_variant() {
                    acc.total += line.total_amount;
                    acc.targets.push(Target::variant(id));
                }
                acc
            })
    }
}

impl FromIterator<CartLine> for CartSnapshot {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
