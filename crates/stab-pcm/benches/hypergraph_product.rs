use criterion::{criterion_group, criterion_main, Criterion};
use stab_core::RngHandle;
use stab_pcm::{gen_random_code, HypergraphProduct};

fn bench_product(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(101);
    let code1 = gen_random_code(16, 12, 4, &mut rng).unwrap();
    let code2 = gen_random_code(16, 12, 4, &mut rng).unwrap();

    c.bench_function("hypergraph_product_16x12", |b| {
        b.iter(|| {
            let product = HypergraphProduct::from_codes(&code1, &code2).unwrap();
            assert!(product.commutes());
        })
    });
}

criterion_group!(benches, bench_product);
criterion_main!(benches);
