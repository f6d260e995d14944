use itertools::Itertools;
use prettytable::{row, Table};
use serde::Serialize;
use std::fmt;
use tracing::{info, info_span};

use crate::constants::ParameterSet;
use crate::error::EstimatorError;
use crate::estimator::{estimate_min_log2_q, estimate_min_r, estimate_min_r_log2};
use crate::modulus::{bit_size, parse_modulus};

/// Outcome of a parameter search run.
#[derive(Clone, Debug, Serialize)]
pub struct ParamReport {
    pub params: ParameterSet,
    /// The bit size of `q` should be above this value.
    pub min_log2_q: i64,
    /// Decimal digits of the chosen modulus, whitespace removed.
    pub chosen_q: String,
    pub chosen_q_bits: u64,
    /// Whether the chosen modulus is wider than `min_log2_q` bits.
    pub chosen_q_meets_bound: bool,
    /// `None` when the bound is too large for an `f64`, see `min_r_log2`.
    pub min_r: Option<f64>,
    pub min_r_log2: f64,
}

impl ParamReport {
    /// Evaluates both bounds for `params`.
    ///
    /// Any domain, overflow or parse error of the modulus size bound or of the
    /// chosen modulus is returned as is. The only error tolerated is an overflow
    /// of the randomness bound, which is still reported through `min_r_log2`.
    pub fn compute(params: &ParameterSet) -> Result<ParamReport, EstimatorError> {
        info_span!("param_report", name = params.name.as_str()).in_scope(|| {
            let min_log2_q = estimate_min_log2_q(&params.modulus_size)?;

            let q = parse_modulus(&params.chosen_q)?;
            let chosen_q_bits = bit_size(&q);
            let chosen_q_meets_bound = chosen_q_bits as i64 > min_log2_q;

            let N = params.modulus_size.N;
            let min_r_log2 = estimate_min_r_log2(N, &q, params.gamma)?;
            let min_r = match estimate_min_r(N, &q, params.gamma) {
                Ok(r) => Some(r),
                Err(EstimatorError::Overflow(_)) => None,
                Err(e) => return Err(e),
            };

            info!(
                min_log2_q,
                chosen_q_bits, chosen_q_meets_bound, min_r_log2, "bounds computed"
            );

            Ok(ParamReport {
                params: params.clone(),
                min_log2_q,
                chosen_q: q.to_string(),
                chosen_q_bits,
                chosen_q_meets_bound,
                min_r,
                min_r_log2,
            })
        })
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Randomness bound formatted for display, falling back to `2^x` when it
    /// does not fit in an `f64`.
    pub fn min_r_display(&self) -> String {
        match self.min_r {
            Some(r) => format_float(r),
            None => format!("2^{}", format_float(self.min_r_log2)),
        }
    }
}

impl fmt::Display for ParamReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The bit size of q should be above:  {}", self.min_log2_q)?;
        write!(
            f,
            "The value of the randomness r should be above:  {}",
            self.min_r_display()
        )
    }
}

/// Formats a float as its shortest round-trip decimal, switching to exponent
/// notation (`3.8490037893326995e+73`) for magnitudes `>= 1e16` or `< 1e-4`.
pub fn format_float(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }

    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{x:e}");
        if let Some((mantissa, exponent)) = scientific.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.abs());
            }
        }
        return scientific;
    }

    if x.fract() == 0.0 {
        format!("{x:.1}")
    } else {
        x.to_string()
    }
}

/// One row per report, for comparing parameter sets side by side.
pub fn summary_table(reports: &[ParamReport]) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "preset", "N", "p", "r", "SEC", "C_m", "depth", "gamma", "min log2 q", "q bits",
        "q ok", "min r"
    ]);

    for report in reports {
        let ms = &report.params.modulus_size;
        let meets = if report.chosen_q_meets_bound { "yes" } else { "no" };
        table.add_row(row![
            report.params.name,
            ms.N,
            ms.p,
            format_float(ms.r),
            ms.sec,
            format_float(ms.c_m),
            ms.depth,
            format_float(report.params.gamma),
            report.min_log2_q,
            report.chosen_q_bits,
            meets,
            report.min_r_display()
        ]);
    }

    table
}

/// Names of the parameter sets whose chosen modulus is too small.
pub fn undersized_moduli(reports: &[ParamReport]) -> String {
    reports
        .iter()
        .filter(|report| !report.chosen_q_meets_bound)
        .map(|report| report.params.name.as_str())
        .join(", ")
}
