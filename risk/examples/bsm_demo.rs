// RUST_LOG=debug cargo run -p risk --example bsm_demo

use pricing::{call_price, d1, d2, put_price, DomainError};
use risk::historical_volatility;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DomainError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (s0, k, t, r) = (50.0, 50.0, 0.5, 0.05);
    let prices = [50.0, 50.8, 49.9, 51.2, 50.6, 51.9, 52.4, 51.7];
    let vol = 0.2;

    println!("Call price: {}", call_price(s0, k, t, r, vol)?);
    println!("Put price: {}", put_price(s0, k, t, r, vol)?);
    println!("Calculated d1: {}", d1(s0, k, t, r, vol)?);
    println!("Calculated d2: {}", d2(s0, k, t, r, vol)?);

    let hist_vol = historical_volatility(&prices, true)?;
    println!("Historical volatility: {hist_vol}");
    println!("Call price at historical volatility: {}", call_price(s0, k, t, r, hist_vol)?);

    if let Err(err) = historical_volatility(&prices[..2], true) {
        println!("Rejected short series: {err}");
    }
    Ok(())
}
