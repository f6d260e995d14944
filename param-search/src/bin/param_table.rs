use bfv_params::{summary_table, undersized_moduli, ParamReport, Preset};
use param_search::init_tracing;
use strum::IntoEnumIterator;
use tracing::warn;

/// Selects the output of `param-table`: `table` (default) or `json`.
const FORMAT_VAR: &str = "PARAM_SEARCH_FORMAT";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let reports = Preset::iter()
        .map(|preset| ParamReport::compute(&preset.parameter_set()))
        .collect::<Result<Vec<_>, _>>()?;

    match std::env::var(FORMAT_VAR).as_deref() {
        Ok("json") => {
            let json = reports.iter().map(ParamReport::to_json).collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        Ok("table") | Err(_) => {
            summary_table(&reports).printstd();

            let undersized = undersized_moduli(&reports);
            if !undersized.is_empty() {
                warn!("chosen q below the modulus size bound for: {undersized}");
            }
        }
        Ok(other) => {
            return Err(
                format!("unknown {FORMAT_VAR} `{other}`, expected `table` or `json`").into(),
            );
        }
    }

    Ok(())
}
