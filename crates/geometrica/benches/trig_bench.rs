//! Criterion benchmarks for the triangle solvers (single solve per iteration).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geometrica::{cosine_law, sine_law, CosineLaw, SineLaw};

fn bench_trig(c: &mut Criterion) {
    let mut group = c.benchmark_group("trig");
    group.bench_function("sine_law_side", |b| {
        let req = SineLaw {
            side1: Some(2.0),
            angle1: Some(30.0),
            angle2: Some(105.0),
            ..SineLaw::default()
        };
        b.iter(|| sine_law(black_box(&req)).unwrap())
    });
    group.bench_function("sine_law_angle_obtuse", |b| {
        let req = SineLaw {
            side1: Some(6.0),
            angle1: Some(33.0),
            side2: Some(10.0),
            angle2: None,
            obtuse: true,
        };
        b.iter(|| sine_law(black_box(&req)).unwrap())
    });
    group.bench_function("cosine_law_angle", |b| {
        let req = CosineLaw {
            side1: 60.0,
            side2: 50.0,
            side3: Some(20.0),
            angle: None,
        };
        b.iter(|| cosine_law(black_box(&req)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_trig);
criterion_main!(benches);
