//! Benchmarks for sash tree mutation and geometry propagation.
//!
//! Run with: cargo bench -p bwin-layout

use std::collections::VecDeque;
use std::hint::black_box;

use bwin_layout::{
    LayoutConfig, Point, Position, Rect, ResizeStrategy, SashTree, SplitSize, Store,
    ZoneClassifier,
};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const EXTENT: f64 = 10_000.0;

/// Balanced tree with `leaves` panes, splits alternating between axes.
fn make_tree(leaves: usize, strategy: ResizeStrategy) -> SashTree {
    let config = LayoutConfig {
        min_width: 1.0,
        min_height: 1.0,
        resize_strategy: strategy,
        ..LayoutConfig::default()
    };
    let mut tree = SashTree::with_root(
        config,
        "root",
        Rect::from_size(EXTENT, EXTENT),
        Store::new(),
    )
    .expect("valid root");
    let mut queue = VecDeque::from([("root".to_string(), 0usize)]);
    let mut count = 1;
    while count < leaves {
        let Some((target, depth)) = queue.pop_front() else {
            break;
        };
        let position = if depth % 2 == 0 {
            Position::Right
        } else {
            Position::Bottom
        };
        let split = tree
            .split(&target, position, SplitSize::Ratio(0.5))
            .expect("bench split");
        queue.push_back((split.existing, depth + 1));
        queue.push_back((split.created, depth + 1));
        count += 1;
    }
    tree
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("sash/split");
    for n in [8, 64, 256] {
        group.bench_with_input(BenchmarkId::new("balanced", n), &n, |b, &n| {
            b.iter(|| black_box(make_tree(n, ResizeStrategy::Classic)))
        });
    }
    group.finish();
}

fn bench_root_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sash/root_resize");
    for strategy in [ResizeStrategy::Classic, ResizeStrategy::Natural] {
        for n in [8, 64, 256] {
            let tree = make_tree(n, strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), n),
                &tree,
                |b, tree| {
                    b.iter_batched(
                        || tree.clone(),
                        |mut tree| {
                            let _ = tree.fit(EXTENT * 1.5, EXTENT * 0.75).expect("fit");
                            black_box(tree)
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

fn bench_min_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("sash/min_size");
    for n in [8, 64, 256] {
        let tree = make_tree(n, ResizeStrategy::Classic);
        group.bench_with_input(BenchmarkId::new("root_width", n), &tree, |b, tree| {
            b.iter(|| black_box(tree.min_width_of("root")))
        });
    }
    group.finish();
}

fn bench_zone_classify(c: &mut Criterion) {
    let classifier = ZoneClassifier::default();
    let rect = Rect::new(10.0, 20.0, 640.0, 480.0);
    let pointers: Vec<Point> = (0..64)
        .map(|i| Point::new(10.0 + f64::from(i) * 10.0, 20.0 + f64::from(i) * 7.5))
        .collect();
    c.bench_function("sash/zone_classify_64", |b| {
        b.iter(|| {
            for pointer in &pointers {
                black_box(classifier.classify(rect, *pointer));
            }
        })
    });
}

fn bench_drop_intent(c: &mut Criterion) {
    let mut group = c.benchmark_group("sash/drop_intent");
    let classifier = ZoneClassifier::default();
    for n in [8, 64, 256] {
        let tree = make_tree(n, ResizeStrategy::Classic);
        group.bench_with_input(BenchmarkId::new("hover", n), &tree, |b, tree| {
            b.iter(|| black_box(tree.drop_intent(Point::new(EXTENT * 0.3, EXTENT * 0.7), &classifier)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_split,
    bench_root_resize,
    bench_min_size,
    bench_zone_classify,
    bench_drop_intent,
);

criterion_main!(benches);
