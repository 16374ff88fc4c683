use thiserror::Error;

/// Violated precondition of a pricing or estimation input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{name} must be > 0, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("price series must contain >= 3 values, got {len}")]
    TooFewPrices { len: usize },
    #[error("price series must contain only positive finite values, got {value} at index {index}")]
    InvalidPrice { index: usize, value: f64 },
}

/// Checks that `value` is finite.
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        tracing::debug!(name, value, "rejecting non-finite input");
        return Err(DomainError::NonFinite { name, value });
    }
    Ok(value)
}

/// Checks that `value` is finite and strictly positive.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64, DomainError> {
    let value = ensure_finite(name, value)?;
    if value <= 0.0 {
        tracing::debug!(name, value, "rejecting non-positive input");
        return Err(DomainError::NonPositive { name, value });
    }
    Ok(value)
}
