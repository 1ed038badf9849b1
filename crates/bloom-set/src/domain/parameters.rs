//! Hash count sizing policy
//!
//! Formulas:
//! - k = (m/n) * ln(2)           -- optimal hash functions
//! - FPR = (1 - e^(-kn/m))^k     -- textbook false positive rate
//!
//! `ln(2)` is applied in fixed point (`x * 69314 / 100000`) so the hash count
//! for a given capacity is exact and reproducible.

/// Fixed-point numerator of ln(2)
pub const LN2_NUMERATOR: u64 = 69_314;

/// Fixed-point denominator of ln(2)
pub const LN2_DENOMINATOR: u64 = 100_000;

/// `floor(x * ln(2))` in fixed point
pub fn scaled_ln2(x: u32) -> u32 {
    // x * 69314 fits in u64 for every u32 x, and the quotient is < x.
    (u64::from(x) * LN2_NUMERATOR / LN2_DENOMINATOR) as u32
}

/// Optimal hash count for `m` bits holding `n` elements
///
/// Computed as `floor(m * ln(2)) / n` with integer division. `n == 0` is
/// treated as a single element, which is the sizing used for a fresh filter.
pub fn optimal_hash_count(m: u32, n: u32) -> u32 {
    scaled_ln2(m) / n.max(1)
}

/// Textbook false positive rate for `m` bits, `n` elements and `k` hashes
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: u32, n: u32, k: u32) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -f64::from(k) * f64::from(n) / f64::from(m);
    (1.0 - exponent.exp()).powf(f64::from(k))
}

/// False positive rate implied by the live bit array
///
/// A value never inserted is reported present when all `k` probed bits are
/// set, so the rate is `(bits_set / m)^k`. With `k == 0` every probe succeeds.
pub fn estimate_fpr(m: u32, bits_set: usize, k: u32) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let fill = bits_set as f64 / f64::from(m);
    fill.powf(f64::from(k))
}
