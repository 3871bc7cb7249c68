use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use quadex::{Bounds, Located, Point, QuadTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::{AABB, RTree};

fn random_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
        .collect()
}

fn build_tree(points: &[Point]) -> QuadTree<Located<usize>> {
    let mut tree = QuadTree::default();
    for (i, point) in points.iter().enumerate() {
        tree.add(Located::new(*point, i));
    }
    tree
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [1_000, 10_000, 100_000] {
        let points = random_points(size, 1);
        group.bench_with_input(BenchmarkId::new("quadtree", size), &points, |b, points| {
            b.iter(|| black_box(build_tree(points)))
        });
        group.bench_with_input(BenchmarkId::new("rstar_bulk", size), &points, |b, points| {
            b.iter(|| {
                let coords: Vec<[f64; 2]> = points.iter().map(|p| [p.x(), p.y()]).collect();
                black_box(RTree::bulk_load(coords))
            })
        });
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let points = random_points(100_000, 2);
    let tree = build_tree(&points);
    let rtree = RTree::bulk_load(points.iter().map(|p| [p.x(), p.y()]).collect::<Vec<_>>());

    for extent in [0.01, 0.1, 0.5] {
        let query = Bounds::new(-extent, -extent, extent, extent);
        let envelope = AABB::from_corners([-extent, -extent], [extent, extent]);

        group.bench_with_input(BenchmarkId::new("quadtree", extent), &query, |b, query| {
            b.iter(|| black_box(tree.search(black_box(query)).len()))
        });
        group.bench_with_input(
            BenchmarkId::new("quadtree_count", extent),
            &query,
            |b, query| b.iter(|| black_box(tree.count_within(black_box(query)))),
        );
        group.bench_with_input(BenchmarkId::new("rstar", extent), &envelope, |b, envelope| {
            b.iter(|| black_box(rtree.locate_in_envelope(black_box(envelope)).count()))
        });
    }

    group.finish();
}

fn benchmark_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    let points = random_points(10_000, 3);
    group.bench_function("remove_all_10k", |b| {
        b.iter_batched(
            || build_tree(&points),
            |mut tree| {
                for (i, point) in points.iter().enumerate() {
                    tree.remove(&Located::new(*point, i));
                }
                tree
            },
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_search,
    benchmark_remove
);
criterion_main!(benches);
