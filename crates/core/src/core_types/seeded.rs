//! Deterministic string-seeded pseudo-random values
//!
//! Every "random" quantity in the prediction pipeline (sampled coordinates,
//! per-day prediction counts, synthetic weather) is derived from a string
//! seed such as `"pred_CA_2024-01-01_3"`. Identical seeds must produce
//! identical values across runs and across platforms, so the hash below uses
//! explicit 32-bit wraparound arithmetic rather than anything
//! platform-dependent.

/// Divisor that maps the hash into one of 1000 evenly spaced values in [0, 1).
const BUCKETS: i32 = 1000;

/// Map a string seed to a reproducible value in `[0, 1)`.
///
/// Polynomial 31-hash over the seed's UTF-16 code units with exact `i32`
/// wraparound, then `|h mod 1000| / 1000`. The wraparound is load-bearing:
/// reproducibility of every downstream coordinate and count depends on
/// bit-exact 32-bit signed overflow behavior.
///
/// # Example
/// ```
/// use fire_risk_core::core_types::seeded_random;
///
/// let a = seeded_random("pred_CA_2024-01-01_0");
/// let b = seeded_random("pred_CA_2024-01-01_0");
/// assert_eq!(a, b);
/// assert!((0.0..1.0).contains(&a));
/// ```
pub fn seeded_random(seed: &str) -> f64 {
    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    f64::from((hash % BUCKETS).unsigned_abs()) / f64::from(BUCKETS)
}

/// Map a string seed linearly into `[lo, hi)`.
pub fn seeded_in_range(seed: &str, lo: f64, hi: f64) -> f64 {
    lo + seeded_random(seed) * (hi - lo)
}
