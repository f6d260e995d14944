use bfv_params::{ParamReport, Preset};
use param_search::init_tracing;
use tracing::info;

// Edit the preset (or its constants in `bfv-params/src/constants`) and rerun.
const PRESET: Preset = Preset::Search512_127;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let report = ParamReport::compute(&PRESET.parameter_set())?;

    println!("{report}");

    if report.chosen_q_meets_bound {
        info!(bits = report.chosen_q_bits, "chosen q is above the bound");
    } else {
        info!(
            bits = report.chosen_q_bits,
            min_log2_q = report.min_log2_q,
            "chosen q is too small, pick a modulus of more than {} bits",
            report.min_log2_q
        );
    }

    Ok(())
}
