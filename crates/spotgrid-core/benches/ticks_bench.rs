use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spotgrid_core::{calc_tick_positions, minimal_data_box, RayIntersections, RayTraceResult, TickOptions};

fn gen_results(bundles: usize, points: usize) -> Vec<RayTraceResult> {
    let mut results = Vec::with_capacity(bundles);
    for b in 0..bundles {
        let mut x = Vec::with_capacity(points);
        let mut y = Vec::with_capacity(points);
        for i in 0..points {
            // spiral-ish spot cloud around a per-bundle center
            let t = i as f64 * 0.1;
            x.push(b as f64 + t.cos() * t * 0.01);
            y.push(t.sin() * t * 0.01);
        }
        results.push(RayTraceResult {
            wavelength_id: b % 3,
            field_id: b / 3,
            ray_bundle: RayIntersections::new(x, y).unwrap(),
            chief_ray: RayIntersections::new(vec![b as f64], vec![0.0]).unwrap(),
            surface_id: Some(4),
        });
    }
    results
}

fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("calc_tick_positions");
    let options = TickOptions::default();
    for &(min, max) in &[(0.0, 10.0), (-2.44, 9.73), (1.0e-6, 3.7e-6), (-1.0e9, 1.0e9)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{min}..{max}")),
            &(min, max),
            |b, &(min, max)| {
                b.iter(|| {
                    let _ = black_box(calc_tick_positions(min, max, &options));
                });
            },
        );
    }
    group.finish();
}

fn bench_minimal_data_box(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimal_data_box");
    for &(bundles, points) in &[(6usize, 1_000usize), (6, 10_000), (60, 10_000)] {
        let results = gen_results(bundles, points);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("b{bundles}_p{points}")),
            results.as_slice(),
            |b, results| {
                b.iter(|| {
                    let _ = black_box(minimal_data_box(results));
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_ticks, bench_minimal_data_box);
criterion_main!(benches);
