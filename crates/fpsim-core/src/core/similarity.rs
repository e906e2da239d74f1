use crate::core::models::fingerprint::Fingerprint;
use thiserror::Error;

/// Decimal places kept on every Tanimoto coefficient.
pub const COEFFICIENT_PRECISION: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SimilarityError {
    #[error("Fingerprint lengths differ ({left} vs {right} bits)")]
    LengthMismatch { left: usize, right: usize },
    #[error("Both fingerprints are all-zero; the Tanimoto coefficient is undefined")]
    ZeroUnion,
}

/// How fingerprints of unequal length are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Unequal lengths are rejected with [`SimilarityError::LengthMismatch`].
    #[default]
    Strict,
    /// Set bits are counted over each full fingerprint while the intersection only covers
    /// the common prefix.
    Truncate,
}

/// How a pair of all-zero fingerprints is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// The pair is rejected with [`SimilarityError::ZeroUnion`].
    #[default]
    Error,
    /// The coefficient is defined as `0.0`.
    Zero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimilarityPolicy {
    pub length: LengthPolicy,
    pub empty: EmptyPolicy,
}

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i32 = 1075;

/// Rounds `value` to `places` decimal places, ties to even.
///
/// Ties are decided on the exact binary value of `value` rather than on a scaled float, so
/// `1/64 = 0.015625` rounds to `0.01562` while `1/320`, stored slightly above `0.003125`,
/// rounds to `0.00313`. `places` must stay below 20 to keep the scaled mantissa in a `u128`.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    let bits = value.abs().to_bits();
    let biased_exponent = (bits >> MANTISSA_BITS) as i32;
    let fraction = bits & ((1u64 << MANTISSA_BITS) - 1);
    // value = mantissa * 2^exponent, exactly.
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, 1 - EXPONENT_BIAS)
    } else {
        (fraction | (1u64 << MANTISSA_BITS), biased_exponent - EXPONENT_BIAS)
    };
    if exponent >= 0 {
        return value;
    }

    let scale = 10u128.pow(places);
    let scaled = mantissa as u128 * scale;
    let shift = exponent.unsigned_abs();
    let rounded = if shift >= u128::BITS {
        0
    } else {
        let quotient = scaled >> shift;
        let remainder = scaled & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        if remainder > half || (remainder == half && quotient & 1 == 1) {
            quotient + 1
        } else {
            quotient
        }
    };

    value.signum() * (rounded as f64 / scale as f64)
}

/// Computes the Tanimoto similarity coefficient `|A∩B| / (|A| + |B| - |A∩B|)`.
///
/// The result is rounded to [`COEFFICIENT_PRECISION`] decimal places (ties to even) and lies
/// in `[0, 1]`.
///
/// # Errors
///
/// Returns [`SimilarityError::LengthMismatch`] when the lengths differ under
/// [`LengthPolicy::Strict`], and [`SimilarityError::ZeroUnion`] when both fingerprints have
/// no set bit under [`EmptyPolicy::Error`].
pub fn tanimoto(
    a: &Fingerprint,
    b: &Fingerprint,
    policy: &SimilarityPolicy,
) -> Result<f64, SimilarityError> {
    if policy.length == LengthPolicy::Strict && a.len() != b.len() {
        return Err(SimilarityError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let intersection = a.intersection_count(b);
    let union = a.count_ones() + b.count_ones() - intersection;

    if union == 0 {
        return match policy.empty {
            EmptyPolicy::Error => Err(SimilarityError::ZeroUnion),
            EmptyPolicy::Zero => Ok(0.0),
        };
    }

    Ok(round_to(
        intersection as f64 / union as f64,
        COEFFICIENT_PRECISION,
    ))
}
