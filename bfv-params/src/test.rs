use paste::paste;
use tracing::info_span;
use tracing_forest::ForestLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

use crate::constants::{ParamSearchConstants, Search1024_127, Search512_127};
use crate::estimator::{estimate_min_r, RANDOMNESS_FLOOR};
use crate::modulus::parse_modulus;
use crate::report::ParamReport;

#[macro_export]
macro_rules! generate_param_search_test {
    ($Params:ident, $N:expr, $P:expr, $MIN_LOG2_Q:expr) => {
        paste! {
            #[test]
            #[serial_test::serial]
            pub fn [<test_param_search_ $N _ $P>]() {
                type Params = $Params;
                let env_filter = EnvFilter::builder()
                    .with_default_directive(tracing::Level::INFO.into())
                    .from_env_lossy();

                let subscriber = Registry::default()
                    .with(env_filter)
                    .with(ForestLayer::default());

                let _ = tracing::subscriber::set_global_default(subscriber);

                assert_eq!(Params::N, $N);
                assert_eq!(Params::P, $P);

                let name = format!("search_{}_{}", Params::N, Params::P);
                let params = Params::parameter_set(&name);
                let report = info_span!("param search", name = name.as_str())
                    .in_scope(|| ParamReport::compute(&params))
                    .expect("Failed to compute parameter bounds");

                assert_eq!(report.min_log2_q, $MIN_LOG2_Q);
                assert_eq!(report.chosen_q_meets_bound, (report.chosen_q_bits as i64) > $MIN_LOG2_Q);

                let q = parse_modulus(Params::CHOSEN_Q).expect("Failed to parse chosen modulus");
                let min_r = estimate_min_r(Params::N, &q, Params::GAMMA)
                    .expect("Failed to compute randomness bound");
                assert!(min_r >= RANDOMNESS_FLOOR);
                assert_eq!(report.min_r, Some(min_r));

                // rerunning gives the same report
                let again = ParamReport::compute(&params).expect("Failed to compute parameter bounds");
                assert_eq!(again.to_json(), report.to_json());
            }
        }
    };
}

generate_param_search_test!(Search512_127, 512, 127, 315);
generate_param_search_test!(Search1024_127, 1024, 127, 325);
