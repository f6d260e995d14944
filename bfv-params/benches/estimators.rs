use bfv_params::{
    estimate_min_log2_q, estimate_min_r, parse_modulus, ParamReport, ParamSearchConstants, Preset,
};
use bfv_params::constants::Search512_127;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;
use strum::IntoEnumIterator;

fn bench_min_log2_q(c: &mut Criterion) {
    let params = Search512_127::modulus_size_params();

    c.bench_function("estimate_min_log2_q", |b| {
        b.iter(|| estimate_min_log2_q(black_box(&params)).unwrap())
    });
}

fn bench_min_r(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_min_r");

    let chosen_q = parse_modulus(Search512_127::CHOSEN_Q).unwrap();
    group.bench_with_input(BenchmarkId::new("chosen_q", 312), &chosen_q, |b, q| {
        b.iter(|| estimate_min_r(black_box(512), black_box(q), 1.005).unwrap())
    });

    for bits in [128u32, 512, 1024] {
        let q = (BigUint::from(1u32) << bits) - 1u32;
        group.bench_with_input(BenchmarkId::new("pow2_minus_one", bits), &q, |b, q| {
            b.iter(|| bfv_params::estimate_min_r_log2(black_box(4096), black_box(q), 1.005).unwrap())
        });
    }

    group.finish();
}

fn bench_reports(c: &mut Criterion) {
    let sets = Preset::iter().map(Preset::parameter_set).collect::<Vec<_>>();

    c.bench_function("param_report_all_presets", |b| {
        b.iter(|| {
            sets.iter()
                .map(|set| ParamReport::compute(black_box(set)).unwrap())
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(benches, bench_min_log2_q, bench_min_r, bench_reports);
criterion_main!(benches);
