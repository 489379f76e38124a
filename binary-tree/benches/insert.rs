use binary_tree::{BinaryTree, Descent, LeftBiased};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;

fn fill<D: Descent>(mut tree: BinaryTree<u32, (), D>, keys: &[u32]) -> usize {
    for &key in keys {
        tree.insert(key, ());
    }
    tree.len()
}

fn benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let random = (0..10_000).map(|_| rng.gen()).collect::<Vec<u32>>();
    let sorted = (0..1_000).collect::<Vec<u32>>();

    let mut group = c.benchmark_group("insert");
    group.bench_function("alternating/random", |b| {
        b.iter_batched(
            BinaryTree::new,
            |tree| black_box(fill(tree, &random)),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("alternating/sorted", |b| {
        b.iter_batched(
            BinaryTree::new,
            |tree| black_box(fill(tree, &sorted)),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("left-biased/random", |b| {
        b.iter_batched(
            || BinaryTree::with_descent(LeftBiased),
            |tree| black_box(fill(tree, &random)),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("left-biased/sorted", |b| {
        b.iter_batched(
            || BinaryTree::with_descent(LeftBiased),
            |tree| black_box(fill(tree, &sorted)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
