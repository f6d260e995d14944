use super::ParamSearchConstants;

pub struct Search1024_127;

impl ParamSearchConstants for Search1024_127 {
    const N: u64 = 1024;
    const P: u64 = 127;
    const R: f64 = 3.2;
    const SEC: u32 = 40;
    const C_M: f64 = 8.6;
    const DEPTH: u64 = 3;
    const CHOSEN_Q: &'static str =
        "6440092097492369874468694478456476902429935263779065830479393474203066496323859298183983608879";
}
