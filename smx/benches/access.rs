use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use smx::{DenseVector, SparseVector};

const LEN: usize = 1 << 16;
const FILL: usize = 1 << 12;

fn filled_vector(rng: &mut StdRng) -> SparseVector<f32> {
    let mut v = SparseVector::new(LEN).unwrap();
    for _ in 0..FILL {
        let index = rng.gen_range(0..LEN);
        v.set(index, rng.gen_range(0.1f32..1.0)).unwrap();
    }
    v
}

fn bench_point_lookup(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let v = filled_vector(&mut rng);
    let probes: Vec<usize> = (0..1024).map(|_| rng.gen_range(0..LEN)).collect();

    c.bench_function("sparse_get", |b| {
        b.iter(|| {
            for &index in &probes {
                black_box(v.get(black_box(index)).unwrap());
            }
        })
    });
}

fn bench_point_update(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let v = filled_vector(&mut rng);
    let updates: Vec<(usize, f32)> = (0..1024)
        .map(|_| (rng.gen_range(0..LEN), rng.gen_range(0.1f32..1.0)))
        .collect();

    c.bench_function("sparse_set", |b| {
        b.iter_with_setup(
            || v.clone(),
            |mut v| {
                for &(index, value) in &updates {
                    v.set(index, value).unwrap();
                }
                v
            },
        )
    });
}

fn bench_dense_conversion(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(13);
    let sparse = filled_vector(&mut rng);
    let dense = sparse.to_dense();

    c.bench_function("to_dense", |b| b.iter(|| black_box(sparse.to_dense())));
    c.bench_function("from_dense", |b| {
        b.iter(|| black_box(DenseVector::to_sparse(&dense)))
    });
}

criterion_group!(
    benches,
    bench_point_lookup,
    bench_point_update,
    bench_dense_conversion
);
criterion_main!(benches);
