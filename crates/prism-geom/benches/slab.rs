use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use prism_geom::{Bounds3f, Ray};
use prism_math::{Float, Point3f, Vector3f};

/// Compare the per-call slab test against the precomputed-direction variant
fn bench_slab_tests(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds_slab");

    let boxes: Vec<Bounds3f> = (0..64)
        .map(|i| {
            let o = i as Float * 0.5;
            Bounds3f::new(
                Point3f::new(o, -1.0, -1.0),
                Point3f::new(o + 1.0, 1.0, 1.0),
            )
        })
        .collect();
    let ray = Ray::new(Point3f::new(-1.0, 0.1, 0.2), Vector3f::new(1.0, 0.01, -0.02));

    group.bench_function("intersect_p", |b| {
        b.iter(|| {
            boxes
                .iter()
                .filter(|bb| black_box(bb).intersect_p(black_box(&ray)).is_some())
                .count()
        });
    });

    group.bench_function("intersect_p_precomputed", |b| {
        let inv_dir = ray.inv_dir();
        let dir_is_neg = ray.dir_is_neg();
        b.iter(|| {
            boxes
                .iter()
                .filter(|bb| black_box(bb).intersect_p_precomputed(black_box(&ray), &inv_dir, dir_is_neg))
                .count()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_slab_tests);
criterion_main!(benches);
