use capicrypto::prelude::*;
use capicrypto_tests::brute_force::group_order;
use capicrypto_tests::fixtures::search_plan;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_fixture_plans(c: &mut Criterion) {
    let mut group = c.benchmark_group("search-plans");
    group.sample_size(10);

    for name in ["capicua_small", "five_digit"] {
        let plan = search_plan(name).unwrap();
        group.bench_with_input(BenchmarkId::new("standard", name), &plan.config, |b, config| {
            b.iter(|| search_curves(black_box(config)));
        });
        group.bench_with_input(
            BenchmarkId::new("trial-division", name),
            &plan.config,
            |b, config| {
                b.iter(|| search_curves_with(black_box(config), &TrialDivision));
            },
        );
    }

    group.finish();
}

fn bench_order_vs_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("group-order");

    // Hasse-bounded search against counting every point
    for p in [383u64, 12421] {
        let params = CurveParams::from_u64(p, 121, 11).unwrap();
        let g = find_generator(&params, &BigUint::from(1000u32)).unwrap();
        let radius = BigUint::from(1000u32);

        group.bench_with_input(BenchmarkId::new("hasse-search", p), &g, |b, g| {
            b.iter(|| find_order(black_box(g), &params, &radius));
        });
        group.bench_with_input(BenchmarkId::new("brute-force", p), &params, |b, params| {
            b.iter(|| group_order(black_box(params)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixture_plans, bench_order_vs_counting);
criterion_main!(benches);
