use pricing::DomainError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of trading days in the standard year.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolatilityConfig {
    /// observation periods per year, used to scale the per-period deviation
    pub periods_per_year: f64,
    /// whether to scale by $\sqrt{periods\_per\_year}$
    pub annualize: bool,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self {
            periods_per_year: TRADING_DAYS_PER_YEAR,
            annualize: true,
        }
    }
}

/// Continuously compounded returns $\ln(P_i / P_{i-1})$ of a chronological price series.
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>, DomainError> {
    if let Some((index, &value)) = prices
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        tracing::debug!(index, value, "rejecting price series");
        return Err(DomainError::InvalidPrice { index, value });
    }
    Ok(prices.windows(2).map(|w| w[1].ln() - w[0].ln()).collect())
}

/// Unbiased sample standard deviation (denominator $n - 1$).
/// Returns `None` with fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    Some(variance.sqrt())
}

/// Historical volatility of a price series, annualized over 252 trading days if asked to.
/// At least three prices are needed so that the returns have a degree of freedom left.
pub fn historical_volatility(prices: &[f64], annualize: bool) -> Result<f64, DomainError> {
    historical_volatility_with(
        prices,
        &VolatilityConfig {
            annualize,
            ..VolatilityConfig::default()
        },
    )
}

pub fn historical_volatility_with(
    prices: &[f64],
    config: &VolatilityConfig,
) -> Result<f64, DomainError> {
    if prices.len() < 3 {
        tracing::debug!(len = prices.len(), "price series too short");
        return Err(DomainError::TooFewPrices { len: prices.len() });
    }
    let returns = log_returns(prices)?;
    let std_dev = sample_std_dev(&returns).ok_or(DomainError::TooFewPrices { len: prices.len() })?;

    if config.annualize {
        let periods = pricing::error::ensure_positive("periods_per_year", config.periods_per_year)?;
        return pricing::error::ensure_finite("volatility", std_dev * periods.sqrt());
    }
    pricing::error::ensure_finite("volatility", std_dev)
}
