//! Closed-form Black-Scholes-Merton prices for European options on stocks.
//!
//! ```
//! use pricing::{call_price, put_price};
//!
//! let call = call_price(50.0, 50.0, 0.5, 0.05, 0.2)?;
//! let put = put_price(50.0, 50.0, 0.5, 0.05, 0.2)?;
//! assert!((call - put - (50.0 - 50.0 * (-0.025_f64).exp())).abs() < 1e-9);
//! # Ok::<(), pricing::DomainError>(())
//! ```

pub mod analytic;
pub mod common;
pub mod error;

pub use analytic::black_scholes::{
    call_price, d1, d2, norm_cdf, put_price, BlackScholesMerton, OptionPrice,
};
pub use common::models::DerivativeParameter;
pub use error::DomainError;
