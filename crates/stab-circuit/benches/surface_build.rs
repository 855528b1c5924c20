use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stab_circuit::{CodeFamily, MemoryBasis, NoiseConfig, SyndromeCircuitBuilder};

fn bench_surface_build(c: &mut Criterion) {
    let builder = SyndromeCircuitBuilder::new(
        CodeFamily::SurfaceCode {
            scale: (9, 9),
            memory: MemoryBasis::ZMemory,
        },
        &NoiseConfig::uniform(0.001),
        10,
    )
    .expect("valid request");
    c.bench_function("surface_9x9_10_rounds", |b| {
        b.iter(|| {
            let model = builder.build().expect("circuit builds");
            black_box(model.circuit().num_detectors());
        });
    });
}

criterion_group!(benches, bench_surface_build);
criterion_main!(benches);
