pub mod volatility;

pub use volatility::{
    historical_volatility, historical_volatility_with, log_returns, sample_std_dev,
    VolatilityConfig, TRADING_DAYS_PER_YEAR,
};
