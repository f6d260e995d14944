//! Helpers for the candidate ciphertext modulus `q`, which is usually far beyond
//! the range of any fixed-width integer or `f64`.
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use std::f64::consts::LN_2;

use crate::error::EstimatorError;

/// Number of leading bits of `q` kept when moving to floating point.
const MANTISSA_BITS: u64 = 64;

/// Parses a decimal modulus literal, ignoring any whitespace inside it.
///
/// Long moduli are commonly pasted across several source lines, so every
/// whitespace character (including embedded newlines) is removed before parsing.
/// Any other non-digit character is rejected.
///
/// # Arguments
///
/// * `literal` - The decimal digits of the modulus, possibly split over lines.
///
/// # Returns
///
/// The modulus as a `BigUint`, or an error if the literal is empty or not a
/// decimal number.
pub fn parse_modulus(literal: &str) -> Result<BigUint, EstimatorError> {
    let digits: String = literal.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        return Err(EstimatorError::EmptyModulus);
    }

    Ok(digits.parse::<BigUint>()?)
}

/// Exact bit length of `q`.
pub fn bit_size(q: &BigUint) -> u64 {
    q.bits()
}

/// Splits `q` into its leading `MANTISSA_BITS` bits as an `f64` and the number
/// of low bits dropped, so that `q ~= top * 2^shift`.
fn split_leading_bits(q: &BigUint) -> Result<(f64, u64), EstimatorError> {
    if q.is_zero() {
        return Err(EstimatorError::Domain(
            "logarithm of a zero modulus".to_string(),
        ));
    }

    let shift = bit_size(q).saturating_sub(MANTISSA_BITS);
    let top = (q >> shift)
        .to_f64()
        .ok_or_else(|| EstimatorError::Overflow("leading bits of the modulus".to_string()))?;

    Ok((top, shift))
}

/// Natural logarithm of an arbitrary-precision integer.
///
/// Only the leading bits are converted to `f64`; the dropped low bits are
/// accounted for by adding `shift * ln(2)`. The result stays finite for any
/// `q`, even one that would overflow `f64` on conversion.
pub fn ln_biguint(q: &BigUint) -> Result<f64, EstimatorError> {
    let (top, shift) = split_leading_bits(q)?;
    Ok(top.ln() + shift as f64 * LN_2)
}

/// Base-2 logarithm of an arbitrary-precision integer, see [`ln_biguint`].
pub fn log2_biguint(q: &BigUint) -> Result<f64, EstimatorError> {
    let (top, shift) = split_leading_bits(q)?;
    Ok(top.log2() + shift as f64)
}
