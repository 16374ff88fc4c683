use crate::common::models::DerivativeParameter;
use crate::error::{ensure_finite, DomainError};
use probability::distribution::{Distribution, Gaussian};

/// Standard normal cumulative distribution function $\Phi$.
pub fn norm_cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> Result<f64, DomainError>;
    fn call(params: &Self::Params) -> Result<f64, DomainError>;
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> Result<f64, DomainError> {
        let (d1, d2) = dp.d1_d2()?;
        ensure_finite(
            "call price",
            norm_cdf(d1) * dp.asset_price - norm_cdf(d2) * dp.strike * dp.discount_factor(),
        )
    }

    fn put(dp: &DerivativeParameter) -> Result<f64, DomainError> {
        let (d1, d2) = dp.d1_d2()?;
        ensure_finite(
            "put price",
            norm_cdf(-d2) * dp.strike * dp.discount_factor() - norm_cdf(-d1) * dp.asset_price,
        )
    }
}

pub fn d1(s0: f64, k: f64, t: f64, r: f64, vol: f64) -> Result<f64, DomainError> {
    DerivativeParameter::new(s0, k, t, r, vol).d1()
}

pub fn d2(s0: f64, k: f64, t: f64, r: f64, vol: f64) -> Result<f64, DomainError> {
    DerivativeParameter::new(s0, k, t, r, vol).d2()
}

/// $S_0 \Phi(d_1) - K e^{-rT} \Phi(d_2)$
pub fn call_price(s0: f64, k: f64, t: f64, r: f64, vol: f64) -> Result<f64, DomainError> {
    BlackScholesMerton::call(&DerivativeParameter::new(s0, k, t, r, vol))
}

/// $K e^{-rT} \Phi(-d_2) - S_0 \Phi(-d_1)$
pub fn put_price(s0: f64, k: f64, t: f64, r: f64, vol: f64) -> Result<f64, DomainError> {
    BlackScholesMerton::put(&DerivativeParameter::new(s0, k, t, r, vol))
}
