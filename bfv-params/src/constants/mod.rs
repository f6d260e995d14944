mod search_constants_1024_127;
mod search_constants_512_127;

pub use search_constants_1024_127::Search1024_127;
pub use search_constants_512_127::Search512_127;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::estimator::{ModulusSizeParams, DEFAULT_GAMMA};

pub trait ParamSearchConstants {
    /// `N` is the degree of the cyclotomic polynomial defining the ring `Rq = Zq[X]/(X^N + 1)`.
    const N: u64;
    /// `P` is the plaintext modulus.
    const P: u64;
    /// `R` is the standard deviation of the discrete gaussian noise distribution.
    const R: f64;
    /// `SEC` is the targeted security level in bits.
    const SEC: u32;
    /// `C_M` is the constant bounding the noise growth of one ciphertext multiplication.
    const C_M: f64;
    /// `DEPTH` is the number of sequential ciphertext multiplications that must be supported.
    const DEPTH: u64;
    /// `GAMMA` is the root Hermite factor of the best lattice reduction considered.
    const GAMMA: f64 = DEFAULT_GAMMA;
    /// Decimal digits of the chosen ciphertext modulus `q`. Whitespace is ignored, so long moduli can span lines.
    const CHOSEN_Q: &'static str;

    fn modulus_size_params() -> ModulusSizeParams {
        ModulusSizeParams {
            N: Self::N,
            p: Self::P,
            r: Self::R,
            sec: Self::SEC,
            c_m: Self::C_M,
            depth: Self::DEPTH,
        }
    }

    fn parameter_set(name: &str) -> ParameterSet {
        ParameterSet {
            name: name.to_string(),
            modulus_size: Self::modulus_size_params(),
            gamma: Self::GAMMA,
            chosen_q: Self::CHOSEN_Q.to_string(),
        }
    }
}

/// A full parameter search input: the modulus size inputs plus the modulus picked
/// for them and the lattice reduction quality to defend against.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParameterSet {
    pub name: String,
    pub modulus_size: ModulusSizeParams,
    pub gamma: f64,
    pub chosen_q: String,
}

/// Runtime handle over the parameter sets defined in this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum Preset {
    #[strum(serialize = "search_512_127")]
    Search512_127,
    #[strum(serialize = "search_1024_127")]
    Search1024_127,
}

impl Preset {
    pub fn parameter_set(self) -> ParameterSet {
        let name = self.to_string();
        match self {
            Preset::Search512_127 => Search512_127::parameter_set(&name),
            Preset::Search1024_127 => Search1024_127::parameter_set(&name),
        }
    }
}
