use std::hint::black_box;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use starfield_sampling::{Point3, SolidSphere, StarfieldConfig, Uniform, UnitSphere};

fn bench_unit_sphere(iterations: usize) {
    let mut rng = StdRng::seed_from_u64(0);

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(UnitSphere.uniform_with(&mut rng));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  unit sphere direction ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_solid_sphere(iterations: usize) {
    let mut rng = StdRng::seed_from_u64(0);
    let sphere = SolidSphere::default();

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(sphere.uniform_with(&mut rng));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  solid sphere point ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

/// Rejection sampling from the bounding cube, for performance comparison
fn bench_rejection_naive(iterations: usize) {
    let mut rng = StdRng::seed_from_u64(0);

    let start = Instant::now();
    for _ in 0..iterations {
        let point = loop {
            let p = Point3::new(
                rng.gen_range(-1.0f32..1.0),
                rng.gen_range(-1.0f32..1.0),
                rng.gen_range(-1.0f32..1.0),
            );
            if p.x * p.x + p.y * p.y + p.z * p.z <= 1.0 {
                break p;
            }
        };
        black_box(point);
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  naive cube rejection ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_generate(count: usize, min_separation: Option<f32>) {
    let mut config = StarfieldConfig::default().with_count(count).with_seed(0);
    config.min_separation = min_separation;

    let start = Instant::now();
    let cloud = config.generate().expect("valid config");
    let elapsed = start.elapsed();
    println!(
        "  generate ({count} requested, separation {min_separation:?}): {} stars in {elapsed:?}",
        black_box(cloud).len()
    );
}

fn main() {
    println!("sphere sampling benchmarks");
    bench_unit_sphere(1_000_000);
    bench_solid_sphere(1_000_000);
    bench_rejection_naive(1_000_000);
    bench_generate(50_000, None);
    bench_generate(50_000, Some(60.0));
}
