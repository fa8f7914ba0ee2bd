use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};

use linked_bst::{Node, Tree};

/// The operations shared by the collections being compared
trait OrderedSet {
    fn new() -> Self;

    fn insert(&mut self, key: i64);

    fn contains(&self, key: &i64) -> bool;

    fn remove(&mut self, key: &i64) -> bool;

    fn sum_in_order(&self) -> i64;
}

impl OrderedSet for BTreeSet<i64> {
    fn new() -> Self {
        BTreeSet::new()
    }

    fn insert(&mut self, key: i64) {
        BTreeSet::insert(self, key);
    }

    fn contains(&self, key: &i64) -> bool {
        BTreeSet::contains(self, key)
    }

    fn remove(&mut self, key: &i64) -> bool {
        BTreeSet::remove(self, key)
    }

    fn sum_in_order(&self) -> i64 {
        self.iter().sum()
    }
}

impl OrderedSet for Tree<i64> {
    fn new() -> Self {
        Tree::new()
    }

    fn insert(&mut self, key: i64) {
        Tree::insert(self, Node::new(key));
    }

    fn contains(&self, key: &i64) -> bool {
        Tree::contains(self, key)
    }

    fn remove(&mut self, key: &i64) -> bool {
        Tree::remove(self, key).is_some()
    }

    fn sum_in_order(&self) -> i64 {
        self.iter_inorder().map(|node| *node.key()).sum()
    }
}

// Generates a key for the tree
//
// Note that the keys returned are not guaranteed to be unique, but will be
// largely unique.
fn make_key(i: i64) -> i64 {
    // Make sure i >= 0
    let i = i.max(0);

    // Want to spread keys out so we generate interesting trees. Sorted keys would degrade the
    // unbalanced tree into a list.

    // Since i >= 0, i % 3 = 0, 1, or 2
    // So 2/3 of numbers will be positive, 1/3 will be negative
    let sign = if i % 3 >= 1 { 1 } else { -1 };

    let divisor = match i % 6 {
        0 | 1 => 1,
        2 | 4 => 3,
        3 | 5 => 6,
        _ => unreachable!(),
    };

    sign * (i + 1) * 4 / divisor
}

fn build<S: OrderedSet>(size: usize) -> S {
    let mut set = S::new();
    for i in 0..size {
        set.insert(make_key(i as i64));
    }
    set
}

/// Runs many searches, in the opposite order to how the keys were inserted
fn benchmark_searches<S: OrderedSet>(set: &S, searches: usize) {
    for i in 0..searches {
        let key_i = searches - i - 1;
        black_box(set.contains(&make_key(key_i as i64)));
        // Usually missing
        black_box(set.contains(&(make_key(key_i as i64) + 1)));
    }
}

/// Inserts and removes keys in an interleaved pattern
fn benchmark_churn<S: OrderedSet>(steps: usize) -> S {
    let mut set = S::new();

    for i in 0..steps {
        let key_i = i as i64;
        set.insert(make_key(key_i));
        set.insert(make_key(key_i + steps as i64));

        if i % 3 == 0 {
            black_box(set.remove(&make_key(key_i / 2)));
        }
    }

    set
}

pub fn bench_inserts(c: &mut Criterion) {
    const INSERTS: &[usize] = &[50, 100, 500, 1000, 2000];

    let mut group = c.benchmark_group("insert");
    for inserts in INSERTS {
        group.bench_with_input(BenchmarkId::new("BTreeSet", inserts), inserts, |b, &inserts| {
            b.iter(|| build::<BTreeSet<i64>>(inserts))
        });
        group.bench_with_input(BenchmarkId::new("Tree", inserts), inserts, |b, &inserts| {
            b.iter(|| build::<Tree<i64>>(inserts))
        });
    }
    group.finish();
}

pub fn bench_searches(c: &mut Criterion) {
    const SEARCHES: &[usize] = &[50, 100, 500, 1000, 2000];

    let mut group = c.benchmark_group("search");
    for searches in SEARCHES {
        group.bench_with_input(BenchmarkId::new("BTreeSet", searches), searches, |b, &searches| {
            let set = build::<BTreeSet<i64>>(searches);
            b.iter(|| benchmark_searches(&set, searches))
        });
        group.bench_with_input(BenchmarkId::new("Tree", searches), searches, |b, &searches| {
            let set = build::<Tree<i64>>(searches);
            b.iter(|| benchmark_searches(&set, searches))
        });
    }
    group.finish();
}

pub fn bench_churn(c: &mut Criterion) {
    const STEPS: &[usize] = &[50, 100, 1000, 2000, 4000];

    let mut group = c.benchmark_group("insert and delete");
    for steps in STEPS {
        group.bench_with_input(BenchmarkId::new("BTreeSet", steps), steps, |b, &steps| {
            b.iter(|| benchmark_churn::<BTreeSet<i64>>(steps))
        });
        group.bench_with_input(BenchmarkId::new("Tree", steps), steps, |b, &steps| {
            b.iter(|| benchmark_churn::<Tree<i64>>(steps))
        });
    }
    group.finish();
}

pub fn bench_traversal(c: &mut Criterion) {
    const SIZES: &[usize] = &[100, 1000, 10000];

    let mut group = c.benchmark_group("in-order traversal");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("BTreeSet", size), size, |b, &size| {
            let set = build::<BTreeSet<i64>>(size);
            b.iter(|| black_box(set.sum_in_order()))
        });
        group.bench_with_input(BenchmarkId::new("Tree", size), size, |b, &size| {
            let set = build::<Tree<i64>>(size);
            b.iter(|| black_box(set.sum_in_order()))
        });
    }
    group.finish();
}

criterion_group!(benches,
    bench_inserts,
    bench_searches,
    bench_churn,
    bench_traversal,
);

criterion_main!(benches);
