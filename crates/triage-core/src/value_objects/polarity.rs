//! Word polarity - the sentiment weight a lexicon assigns to a single word

/// Sentiment weight of a single word: -1, 0, or +1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Negative,
    Neutral,
    Positive,
}

impl Polarity {
    /// Numeric contribution of this polarity to a text score
    #[inline]
    #[must_use]
    pub const fn weight(self) -> i64 {
        match self {
            Self::Negative => -1,
            Self::Neutral => 0,
            Self::Positive => 1,
        }
    }
}

/// Error for polarity values outside {-1, 0, 1}
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("polarity out of range: {0} (expected -1, 0, or 1)")]
pub struct PolarityError(pub i64);

impl TryFrom<i64> for Polarity {
    type Error = PolarityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Negative),
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Positive),
            other => Err(PolarityError(other)),
        }
    }
}

impl From<Polarity> for i64 {
    fn from(polarity: Polarity) -> Self {
        polarity.weight()
    }
}
