use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trie_persistent::Trie;

fn random_keys(count: usize, len: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..len).map(|_| rng.gen_range(b'a'..=b'z')).collect())
        .collect()
}

fn build_trie(keys: &[Vec<u8>]) -> Trie {
    let mut trie = Trie::new();
    for (i, key) in keys.iter().enumerate() {
        trie = trie.put(key, i as u64);
    }
    trie
}

fn bench_put(c: &mut Criterion) {
    let keys = random_keys(1_000, 16, 1);

    c.bench_function("put_1000", |b| b.iter(|| build_trie(black_box(&keys))));
}

fn bench_get(c: &mut Criterion) {
    let keys = random_keys(10_000, 16, 2);
    let trie = build_trie(&keys);
    let misses = random_keys(10_000, 16, 3);

    c.bench_function("get_hit", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % keys.len();
            black_box(trie.get::<u64>(&keys[i]))
        })
    });

    c.bench_function("get_miss", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % misses.len();
            black_box(trie.get::<u64>(&misses[i]))
        })
    });
}

fn bench_remove(c: &mut Criterion) {
    let keys = random_keys(10_000, 16, 4);
    let trie = build_trie(&keys);

    c.bench_function("remove_one", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % keys.len();
            black_box(trie.remove(&keys[i]))
        })
    });
}

// Deriving a version touches only the mutated key's path, so this should
// not scale with trie size.
fn bench_derive_version(c: &mut Criterion) {
    for &size in &[100usize, 10_000] {
        let keys = random_keys(size, 16, 5);
        let trie = build_trie(&keys);

        c.bench_function(&format!("derive_version_{}", size), |b| {
            b.iter(|| black_box(trie.put(b"new-key-under-bench", 0u64)))
        });
    }
}

criterion_group!(
    benches,
    bench_put,
    bench_get,
    bench_remove,
    bench_derive_version
);
criterion_main!(benches);
