use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use route_core::prelude::*;

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let medellin = medellin_sights();

    c.bench_with_input(
        BenchmarkId::new("dijkstra_on_sample_graph", stringify!(medellin)),
        &medellin,
        |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                dijkstra
                    .search(
                        black_box(&"Parque Explora"),
                        black_box(&"Museo de Antioquia"),
                    )
                    .ok()
            })
        },
    );
}
