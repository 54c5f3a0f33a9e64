use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use container_pack_core::prelude::*;

fn box_manifest(count: usize, seed: u64) -> Vec<CargoItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| CargoItem {
            stable_id: format!("box_{i}"),
            display_name: format!("box_{i}"),
            kind: CargoKind::Box,
            quantity: 1,
            color_tag: None,
            dimensions: Dimensions::new(
                rng.gen_range(20.0..80.0),
                rng.gen_range(20.0..80.0),
                rng.gen_range(20.0..80.0),
            ),
            allowed_rotation: AllowedRotation {
                x: false,
                y: true,
                z: false,
            },
            stackable: true,
        })
        .collect()
}

fn cylinder_manifest(count: usize, seed: u64) -> Vec<CargoItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let diameter = rng.gen_range(20.0..60.0);
            CargoItem {
                stable_id: format!("cyl_{i}"),
                display_name: format!("cyl_{i}"),
                kind: CargoKind::Cylinder,
                quantity: 1,
                color_tag: None,
                dimensions: Dimensions::new(diameter, diameter, rng.gen_range(100.0..400.0)),
                allowed_rotation: AllowedRotation {
                    x: true,
                    y: false,
                    z: false,
                },
                stackable: true,
            }
        })
        .collect()
}

fn mixed_manifest(count: usize, seed: u64) -> Vec<CargoItem> {
    let half = count / 2;
    let mut items = box_manifest(half, seed);
    items.extend(cylinder_manifest(count - half, seed.wrapping_add(1)));
    items
}

fn bench_placement_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement_throughput");
    let container = Container::new("TRUCK", Dimensions::new(245.0, 1360.0, 270.0));

    for count in [50usize, 200, 500] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("boxes", count), &count, |b, &count| {
            let manifest = box_manifest(count, 1);
            b.iter(|| black_box(pack(&container, &manifest)));
        });

        group.bench_with_input(BenchmarkId::new("cylinders", count), &count, |b, &count| {
            let manifest = cylinder_manifest(count, 2);
            b.iter(|| black_box(pack(&container, &manifest)));
        });

        group.bench_with_input(BenchmarkId::new("mixed", count), &count, |b, &count| {
            let manifest = mixed_manifest(count, 3);
            b.iter(|| black_box(pack(&container, &manifest)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_placement_throughput);
criterion_main!(benches);
