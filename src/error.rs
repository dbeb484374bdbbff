//! Validation errors for ledger entries.
//!
//! None of the query or aggregation operations fail: missing quotes, an
//! unreadable clock and owner overflow all degrade to documented defaults.
//! These errors only come out of explicit validation.

/// Errors returned by [`Trade::validate`](crate::Trade::validate).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// Ticker must not be empty.
    #[error("ticker must not be empty")]
    EmptyTicker,
    /// Buy price must be zero or positive.
    #[error("buy price for {ticker} must be non-negative, got {price}")]
    NegativeBuyPrice { ticker: String, price: f64 },
    /// Buy price must be a finite number.
    #[error("buy price for {ticker} is not a finite number")]
    NonFiniteBuyPrice { ticker: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", ValidationError::EmptyTicker),
            "ticker must not be empty"
        );
        let err = ValidationError::NegativeBuyPrice {
            ticker: "AAPL".into(),
            price: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "buy price for AAPL must be non-negative, got -1.5"
        );
    }

    #[test]
    fn is_error() {
        let err: Box<dyn std::error::Error> = Box::new(ValidationError::NonFiniteBuyPrice {
            ticker: "AAPL".into(),
        });
        assert!(err.to_string().contains("AAPL"));
    }
}
