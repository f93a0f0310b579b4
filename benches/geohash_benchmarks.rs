use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geogrid::{Direction, GeohashGroup, adjacent, decode, encode, neighbors};

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for precision in [5usize, 7, 12] {
        group.bench_with_input(
            BenchmarkId::new("encode", precision),
            &precision,
            |b, &precision| {
                b.iter(|| encode(black_box(30.0), black_box(120.0), precision).unwrap())
            },
        );
    }

    let hash = encode(30.0, 120.0, 12).unwrap();
    group.bench_function("decode_12", |b| b.iter(|| decode(black_box(&hash)).unwrap()));

    let hash = encode(30.0, 120.0, 7).unwrap();
    group.bench_function("adjacent_top_7", |b| {
        b.iter(|| adjacent(black_box(&hash), Direction::Top).unwrap())
    });
    group.bench_function("neighbors_7", |b| b.iter(|| neighbors(black_box(&hash)).unwrap()));

    group.finish();
}

fn benchmark_group_updates(c: &mut Criterion) {
    let mut bench_group = c.benchmark_group("geohash_group");

    // Stationary point: every update after the first is a no-op
    bench_group.bench_function("update_same_cell", |b| {
        let mut group = GeohashGroup::new();
        group.update_location(30.0, 120.0).unwrap();
        b.iter(|| group.update_location(black_box(30.0), black_box(120.0)).unwrap())
    });

    // Alternate between two distant points so every update rebuilds the grid
    bench_group.bench_function("update_cell_change", |b| {
        let mut group = GeohashGroup::new();
        group.on_change(|_, _, _| {});
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let lat = if flip { 30.0 } else { -30.0 };
            group.update_location(black_box(lat), black_box(120.0)).unwrap()
        })
    });

    bench_group.finish();
}

criterion_group!(benches, benchmark_codec, benchmark_group_updates);
criterion_main!(benches);
