use num_bigint::BigUint;
use serde::Serialize;
use std::f64::consts::LN_2;
use tracing::{debug, info_span};

use crate::error::EstimatorError;
use crate::modulus::{ln_biguint, log2_biguint};

/// Root Hermite factor assumed for the best available lattice basis reduction.
pub const DEFAULT_GAMMA: f64 = 1.005;

/// Lower bound returned by [`estimate_min_r`] whatever the modulus.
///
/// This is a fixed floor and is not tied to the noise width `r` fed into
/// [`estimate_min_log2_q`], even though both happen to be `3.2` in the usual
/// parameter sets.
pub const RANDOMNESS_FLOOR: f64 = 3.2;

/// Inputs of the ciphertext modulus size bound.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModulusSizeParams {
    /// Ring dimension, the degree of the cyclotomic polynomial `X^N + 1`.
    pub N: u64,
    /// Plaintext modulus.
    pub p: u64,
    /// Width of the discrete Gaussian noise.
    pub r: f64,
    /// Target security level in bits.
    pub sec: u32,
    /// Noise growth constant of a ciphertext multiplication.
    pub c_m: f64,
    /// Number of sequential ciphertext multiplications to support.
    pub depth: u64,
}

/// Computes the minimum bit size of the ciphertext modulus `q`.
///
/// The bound is evaluated in double precision as
///
/// ```text
/// csec   = 9 * N^2 * SEC^4 * 2^(SEC + 8)
/// Y      = p/2 + p * (4 * C_m * r^2 * N^2 + 2 * sqrt(N) * r + 4 * C_m * r^2 * N^2)
/// Z      = C_m * N^2 * n^2 * csec^2 * Y^2 + n * csec * Y
/// q_size = 2 * Z * (1 + 2^SEC)
/// ```
///
/// and the floor of `log2(q_size)` is returned. Inputs are not validated.
///
/// # Returns
///
/// `floor(log2(q_size))`, a `Domain` error when `q_size` is not positive, or an
/// `Overflow` error when `q_size` does not fit in an `f64`.
pub fn estimate_min_log2_q(params: &ModulusSizeParams) -> Result<i64, EstimatorError> {
    let ModulusSizeParams {
        N,
        p,
        r,
        sec,
        c_m,
        depth,
    } = *params;

    info_span!("estimate_min_log2_q", N, sec).in_scope(|| {
        let N = N as f64;
        let p = p as f64;
        let n = depth as f64;
        let sec_f = sec as f64;

        let csec = 9.0 * N.powi(2) * sec_f.powi(4) * (sec_f + 8.0).exp2();
        let y = p / 2.0
            + p * (4.0 * c_m * r.powi(2) * N.powi(2)
                + 2.0 * N.sqrt() * r
                + 4.0 * c_m * r.powi(2) * N.powi(2));
        let z = c_m * N.powi(2) * n.powi(2) * csec.powi(2) * y.powi(2) + n * csec * y;
        let q_size = 2.0 * z * (1.0 + sec_f.exp2());
        debug!(csec, y, z, q_size, "modulus size terms");

        if q_size.is_nan() || q_size.is_infinite() {
            return Err(EstimatorError::Overflow(format!(
                "q_size = {q_size} for N = {N}, SEC = {sec}"
            )));
        }
        if q_size <= 0.0 {
            return Err(EstimatorError::Domain(format!(
                "log2 of non-positive q_size = {q_size}"
            )));
        }

        Ok(q_size.log2().floor() as i64)
    })
}

/// Free-argument form of [`estimate_min_log2_q`].
pub fn min_log2_q(
    N: u64,
    p: u64,
    r: f64,
    sec: u32,
    c_m: f64,
    depth: u64,
) -> Result<i64, EstimatorError> {
    estimate_min_log2_q(&ModulusSizeParams {
        N,
        p,
        r,
        sec,
        c_m,
        depth,
    })
}

/// Computes `log2` of the minimum noise randomness for a chosen modulus `q`.
///
/// With `t' = sqrt(N * log2(q) / log2(gamma))` the candidate bound is
/// `1.5 * gamma^(-t') * q^(1 - N/t')`. It is evaluated as
/// `ln(1.5) + (1 - N/t') * ln(q) - t' * ln(gamma)` so that a modulus with
/// hundreds of digits never has to be raised to a real power, and the result
/// is floored at [`RANDOMNESS_FLOOR`].
///
/// # Arguments
///
/// * `N` - The ring dimension.
/// * `q` - The chosen ciphertext modulus.
/// * `gamma` - The root Hermite factor, usually [`DEFAULT_GAMMA`].
///
/// # Returns
///
/// `log2(max(3.2, candidate))`. This never overflows, unlike
/// [`estimate_min_r`].
pub fn estimate_min_r_log2(N: u64, q: &BigUint, gamma: f64) -> Result<f64, EstimatorError> {
    info_span!("estimate_min_r", N, gamma).in_scope(|| {
        let ln_q = ln_biguint(q)?;
        let log2_q = log2_biguint(q)?;

        if gamma <= 0.0 {
            return Err(EstimatorError::Domain(format!(
                "log2 of non-positive gamma = {gamma}"
            )));
        }
        let log2_gamma = gamma.log2();
        if log2_gamma == 0.0 {
            return Err(EstimatorError::DivisionByZero(
                "log2(gamma) is zero for gamma = 1".to_string(),
            ));
        }

        let t_prime_sq = N as f64 * log2_q / log2_gamma;
        if t_prime_sq < 0.0 {
            return Err(EstimatorError::Domain(format!(
                "square root of negative N * log2(q) / log2(gamma) = {t_prime_sq}"
            )));
        }
        let t_prime = t_prime_sq.sqrt();
        if t_prime == 0.0 {
            return Err(EstimatorError::DivisionByZero(
                "t' is zero, N / t' is undefined".to_string(),
            ));
        }

        let ln_candidate =
            1.5f64.ln() + (1.0 - N as f64 / t_prime) * ln_q - t_prime * gamma.ln();
        debug!(t_prime, ln_candidate, "randomness bound terms");

        Ok((ln_candidate / LN_2).max(RANDOMNESS_FLOOR.log2()))
    })
}

/// Computes the minimum noise randomness `r` for a chosen modulus `q`.
///
/// See [`estimate_min_r_log2`] for the bound. The result is always at least
/// [`RANDOMNESS_FLOOR`]; an `Overflow` error is returned when the bound itself is
/// too large for an `f64`.
pub fn estimate_min_r(N: u64, q: &BigUint, gamma: f64) -> Result<f64, EstimatorError> {
    let log2_r = estimate_min_r_log2(N, q, gamma)?;
    if log2_r == RANDOMNESS_FLOOR.log2() {
        return Ok(RANDOMNESS_FLOOR);
    }

    let r = log2_r.exp2();
    if r.is_infinite() {
        return Err(EstimatorError::Overflow(format!(
            "randomness bound 2^{log2_r} exceeds f64"
        )));
    }

    Ok(r.max(RANDOMNESS_FLOOR))
}
