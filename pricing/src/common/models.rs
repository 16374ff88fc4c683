use crate::error::{ensure_finite, ensure_positive, DomainError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DerivativeParameter {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized, continuously compounded risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's log returns
    pub vola: f64,
}

impl DerivativeParameter {
    /// Unchecked constructor; see [`DerivativeParameter::validate`].
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        }
    }

    /// Spot, strike, time and volatility must be positive, all five finite.
    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("S0", self.asset_price)?;
        ensure_positive("K", self.strike)?;
        ensure_positive("T", self.time_to_expiration)?;
        ensure_finite("r", self.rfr)?;
        ensure_positive("vol", self.vola)?;
        Ok(())
    }

    /// $\sigma \sqrt{T}$
    pub fn sigma_exp(&self) -> f64 {
        self.vola * self.time_to_expiration.sqrt()
    }

    /// $e^{-rT}$
    pub fn discount_factor(&self) -> f64 {
        (-self.rfr * self.time_to_expiration).exp()
    }

    /// Right hand side of the put-call parity, $S_0 - K e^{-rT}$.
    pub fn forward_parity(&self) -> f64 {
        self.asset_price - self.strike * self.discount_factor()
    }

    /// Both intermediate terms; d2 is derived from the very same d1.
    pub fn d1_d2(&self) -> Result<(f64, f64), DomainError> {
        self.validate()?;
        let sigma_exp = ensure_positive("vol*sqrt(T)", self.sigma_exp())?;
        let d1 = ensure_finite(
            "d1",
            (self.asset_price.ln() - self.strike.ln()
                + (self.rfr + self.vola.powi(2) / 2.0) * self.time_to_expiration)
                / sigma_exp,
        )?;
        let d2 = ensure_finite("d2", d1 - sigma_exp)?;
        Ok((d1, d2))
    }

    /// $d_1 = (\ln(S_0/K) + (r + \sigma^2/2) T) / (\sigma \sqrt{T})$
    pub fn d1(&self) -> Result<f64, DomainError> {
        self.d1_d2().map(|(d1, _)| d1)
    }

    /// $d_2 = d_1 - \sigma \sqrt{T}$
    pub fn d2(&self) -> Result<f64, DomainError> {
        self.d1_d2().map(|(_, d2)| d2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn textbook_intermediate_terms() {
        let dp = DerivativeParameter::new(50.0, 50.0, 0.5, 0.05, 0.2);
        let (d1, d2) = dp.d1_d2().unwrap();
        assert_approx_eq!(d1, 0.2475, 1e-3);
        assert_approx_eq!(d2, 0.1061, 1e-3);
        assert_approx_eq!(d1 - d2, dp.sigma_exp(), 1e-12);
    }

    #[test]
    fn d2_reuses_d1() {
        let dp = DerivativeParameter::new(310.0, 250.0, 3.5, 0.05, 0.25);
        assert_eq!(dp.d2().unwrap(), dp.d1().unwrap() - dp.sigma_exp());
    }

    #[test]
    fn zero_time_is_rejected() {
        let dp = DerivativeParameter::new(50.0, 50.0, 0.0, 0.05, 0.2);
        assert_eq!(
            dp.d1(),
            Err(DomainError::NonPositive {
                name: "T",
                value: 0.0
            })
        );
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(DerivativeParameter::new(0.0, 50.0, 0.5, 0.05, 0.2).validate().is_err());
        assert!(DerivativeParameter::new(50.0, -1.0, 0.5, 0.05, 0.2).validate().is_err());
        assert!(DerivativeParameter::new(50.0, 50.0, 0.5, 0.05, 0.0).validate().is_err());
        assert!(DerivativeParameter::new(50.0, 50.0, f64::INFINITY, 0.05, 0.2).validate().is_err());
        assert!(matches!(
            DerivativeParameter::new(50.0, 50.0, 0.5, f64::NAN, 0.2).validate(),
            Err(DomainError::NonFinite { name: "r", .. })
        ));
        // negative rates are fine
        assert!(DerivativeParameter::new(50.0, 50.0, 0.5, -0.01, 0.2).validate().is_ok());
    }

    #[test]
    fn underflowing_sigma_exp_is_rejected() {
        let dp = DerivativeParameter::new(50.0, 50.0, 1e-100, 0.0, 1e-300);
        assert!(dp.validate().is_ok());
        assert!(matches!(
            dp.d1_d2(),
            Err(DomainError::NonPositive {
                name: "vol*sqrt(T)",
                ..
            })
        ));
    }

    #[test]
    fn overflowing_terms_are_rejected() {
        let dp = DerivativeParameter::new(50.0, 50.0, 1e10, -1e300, 0.2);
        assert!(matches!(
            dp.d1(),
            Err(DomainError::NonFinite { name: "d1", .. })
        ));

        let dp = DerivativeParameter::new(50.0, 50.0, 1e300, 0.05, 1e300);
        assert!(matches!(
            dp.d2(),
            Err(DomainError::NonFinite { .. })
        ));
    }

    #[test]
    fn extreme_moneyness_stays_finite() {
        let dp = DerivativeParameter::new(1e308, 1e-300, 1.0, 0.05, 0.2);
        assert!(dp.d1().unwrap().is_finite());
    }

    #[test]
    fn discounting() {
        let dp = DerivativeParameter::new(50.0, 50.0, 0.5, 0.05, 0.2);
        assert_approx_eq!(dp.discount_factor(), (-0.025_f64).exp());
        assert_approx_eq!(dp.forward_parity(), 50.0 - 50.0 * (-0.025_f64).exp());
    }
}
