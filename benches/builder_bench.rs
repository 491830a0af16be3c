//! Benchmarks for model building and serialization

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timber_frames::prelude::*;
use timber_frames::registry::NodeRegistry;

/// A 3D lattice of nodes, inserted twice so half the lookups hit
fn fill_registry(n: usize) -> NodeRegistry {
    let mut nodes = NodeRegistry::new();
    for _ in 0..2 {
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    nodes.find_or_create(i as f64 * 0.5, j as f64 * 0.5, k as f64 * 0.5);
                }
            }
        }
    }
    nodes
}

/// One long beam split at every foot
fn split_beam(length: usize) -> FrameModel {
    let mut model = FrameModel::new();
    let pine = model.new_material(Material::red_pine());
    let section = model.new_rectangular_section(pine, 8.0, 10.0).unwrap();
    let beam = model
        .new_continuous_member(section, (0.0, 0.0, 0.0), (length as f64, 0.0, 0.0))
        .unwrap();
    for d in 1..length {
        model.split_member_at_distance(beam, d as f64).unwrap();
    }
    model
}

fn benchmark_registry(c: &mut Criterion) {
    c.bench_function("registry_20x20x20_dedup", |b| {
        b.iter(|| black_box(fill_registry(20)))
    });
}

fn benchmark_splits(c: &mut Criterion) {
    c.bench_function("split_beam_200", |b| b.iter(|| black_box(split_beam(200))));
}

fn benchmark_yurt(c: &mut Criterion) {
    let config = YurtConfig::default().with_diameter(40.0);
    c.bench_function("yurt_40ft_generate", |b| {
        b.iter(|| black_box(config.generate().unwrap()))
    });
}

fn benchmark_bent_json(c: &mut Criterion) {
    let model = BentFrameConfig::default()
        .with_size(24.0, 12.0, 60.0)
        .with_bents(7)
        .generate()
        .unwrap();
    c.bench_function("bent_7_to_json", |b| {
        b.iter(|| black_box(model.to_json(false).unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_registry,
    benchmark_splits,
    benchmark_yurt,
    benchmark_bent_json,
);

criterion_main!(benches);
