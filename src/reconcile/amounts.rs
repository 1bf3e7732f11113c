//! Random monetary amounts for synthetic data.

use rand::Rng;
use rust_decimal::Decimal;

/// Lowest filler amount used when a real row has no usable value.
pub const FILLER_MIN_DOLLARS: i64 = 150;

/// Highest filler amount used when a real row has no usable value.
pub const FILLER_MAX_DOLLARS: i64 = 300;

/// Draws a cent-precision amount uniformly from `[low, high]` dollars.
///
/// # Example
///
/// ```
/// use benefits_recon::reconcile::random_amount;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rust_decimal::Decimal;
///
/// let amount = random_amount(&mut StdRng::seed_from_u64(1), 100, 400);
/// assert!(amount >= Decimal::from(100) && amount <= Decimal::from(400));
/// assert_eq!(amount.scale(), 2);
/// ```
pub fn random_amount<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64) -> Decimal {
    let cents = rng.gen_range(low * 100..=high * 100);
    Decimal::new(cents, 2)
}

/// Draws a filler amount in `[150, 300]` dollars.
pub fn filler_amount<R: Rng + ?Sized>(rng: &mut R) -> Decimal {
    random_amount(rng, FILLER_MIN_DOLLARS, FILLER_MAX_DOLLARS)
}
