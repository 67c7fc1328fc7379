use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::BtcUtilError;

/// Standard deviation of a random amount, as a fraction of its mean.
pub const DEVIATION: f64 = 0.03;

/// Decimal places of a formatted amount (one satoshi).
pub const AMOUNT_DECIMALS: usize = 8;

/// Draws an amount around `mean` from the thread-local RNG.
pub fn random_amount(mean: f64) -> Result<String, BtcUtilError> {
    random_amount_with_rng(mean, &mut rand::thread_rng())
}

/// Draws an amount from a normal distribution with the given mean and a
/// standard deviation of `mean * DEVIATION`, formatted with 8 decimals.
pub fn random_amount_with_rng<R: Rng + ?Sized>(
    mean: f64,
    rng: &mut R,
) -> Result<String, BtcUtilError> {
    if !mean.is_finite() {
        return Err(BtcUtilError::InvalidAmount(format!(
            "mean must be finite, got {mean}"
        )));
    }
    if mean < 0.0 {
        return Err(BtcUtilError::InvalidAmount(format!(
            "mean must not be negative, got {mean}"
        )));
    }

    let normal = Normal::new(mean, mean * DEVIATION)
        .map_err(|e| BtcUtilError::InvalidAmount(e.to_string()))?;
    let value = normal.sample(rng);
    Ok(format!("{value:.prec$}", prec = AMOUNT_DECIMALS))
}
