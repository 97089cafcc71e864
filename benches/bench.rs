use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use assoc::{iterative, recursive, Content, HashTable, Items};

#[derive(Clone)]
enum TreeEnum {
    Recursive(recursive::Tree),
    Iterative(iterative::Tree),
}

impl TreeEnum {
    fn search(&self, k: char) -> Option<&Content> {
        match self {
            Self::Recursive(t) => t.search(k),
            Self::Iterative(t) => t.search(k),
        }
    }

    fn insert(&mut self, k: char, v: Content) {
        match self {
            Self::Recursive(t) => t.insert(k, v),
            Self::Iterative(t) => t.insert(k, v),
        }
    }

    fn delete(&mut self, k: char) {
        match self {
            Self::Recursive(t) => t.delete(k),
            Self::Iterative(t) => t.delete(k),
        }
    }

    fn inorder_len(&self) -> usize {
        let mut items = Items::new();
        match self {
            Self::Recursive(t) => t.inorder(&mut items),
            Self::Iterative(t) => t.inorder(&mut items),
        }
        items.len()
    }
}

fn key(n: usize) -> char {
    std::char::from_u32(n as u32).unwrap()
}

/// Pushes `lo..hi` in an order that builds a perfectly balanced tree when
/// inserted, since these trees never rebalance on their own.
fn balanced_order(lo: usize, hi: usize, out: &mut Vec<usize>) {
    if lo < hi {
        let mid = lo + (hi - lo) / 2;
        out.push(mid);
        balanced_order(lo, mid, out);
        balanced_order(mid + 1, hi, out);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// implementations of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut TreeEnum, usize)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes - 1;

        let mut order = Vec::with_capacity(num_nodes);
        balanced_order(0, num_nodes, &mut order);

        let mut recursive_tree = recursive::Tree::new();
        let mut iterative_tree = iterative::Tree::new();
        for &x in &order {
            recursive_tree.insert(key(x), Content::Integer(x as i64));
            iterative_tree.insert(key(x), Content::Integer(x as i64));
        }
        let tree_tests = [
            ("recursive", TreeEnum::Recursive(recursive_tree)),
            ("iterative", TreeEnum::Iterative(iterative_tree)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

fn bench_hashtable(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashtable");

    for capacity in [1, 101, 1009] {
        let mut table = HashTable::with_capacity(capacity);
        let keys: Vec<String> = (0..1000).map(|i| format!("key-{}", i)).collect();
        for (i, k) in keys.iter().enumerate() {
            table.insert(k, i as f32);
        }

        group.bench_with_input(BenchmarkId::new("get", capacity), &table, |b, table| {
            b.iter(|| {
                for k in &keys {
                    black_box(table.get(k));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("get-miss", capacity), &table, |b, table| {
            b.iter(|| black_box(table.get("absent")))
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _value = black_box(tree.search(key(i)));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(key(i));
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(key(i + 1), Content::Integer(i as i64 + 1));
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _value = black_box(tree.search(key(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(key(i + 1));
    });

    bench_helper(c, "inorder", |tree, _| {
        black_box(tree.inorder_len());
    });

    bench_hashtable(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
