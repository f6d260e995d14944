#![allow(non_snake_case)]

pub mod constants;
pub mod error;
pub mod estimator;
pub mod modulus;
pub mod report;

pub use constants::{ParamSearchConstants, ParameterSet, Preset};
pub use error::EstimatorError;
pub use estimator::{
    estimate_min_log2_q, estimate_min_r, estimate_min_r_log2, min_log2_q, ModulusSizeParams,
    DEFAULT_GAMMA, RANDOMNESS_FLOOR,
};
pub use modulus::{bit_size, ln_biguint, log2_biguint, parse_modulus};
pub use report::{format_float, summary_table, undersized_moduli, ParamReport};

#[cfg(test)]
pub mod test;
