use thiserror::Error;

/// Errors raised while editing or building a tier configuration.
///
/// The resolver never returns these: every evaluation-time problem degrades
/// to the empty decision instead.
#[derive(Error, Debug)]
pub enum TierError {
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("There is a tier that includes unlimited for cart total upto.")]
    UnboundedTierExists,

    #[error("The cart total upto cannot be zero (tier {index}).")]
    ZeroUpperBound { index: usize },

    #[error("The cart total upto must be greater than cart total from (tier {index}).")]
    UpperNotAboveLower { index: usize },

    #[error("Discount must be greater than 0 and at most 100 (tier {index}, got {discount}).")]
    DiscountOutOfRange { index: usize, discount: f64 },

    #[error("At least one tier is required.")]
    LastTier,

    #[error("No tier at position {index}.")]
    NoSuchTier { index: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TierError>;
