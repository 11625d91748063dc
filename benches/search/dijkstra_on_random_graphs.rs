use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use route_core::prelude::*;

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn gen_rand_graph(number_nodes: usize) -> Graph<usize> {
    let mut rng = rand::thread_rng();
    let number_edges = number_nodes * 3;

    let mut g = Graph::with_capacity(number_nodes, number_edges);
    // Spanning path so every query has a route
    for node in 1..number_nodes {
        g.add_edge(node - 1, node, rng.gen_range(1..100) as f64);
    }
    for _ in number_nodes..number_edges {
        let source = rng.gen_range(0..number_nodes);
        let target = rng.gen_range(0..number_nodes);
        let weight = rng.gen_range(1..100) as f64;
        g.add_edge(source, target, weight);
    }

    g
}

fn criterion_benchmark(c: &mut Criterion) {
    let graphs: Vec<Graph<usize>> = [1000, 50_000, 100_000]
        .iter()
        .map(|i| gen_rand_graph(*i))
        .collect();

    let mut group = c.benchmark_group("dijkstra_on_random_graphs");
    let mut rng = rand::thread_rng();
    for graph in graphs {
        group.bench_with_input(
            BenchmarkId::new("Dijkstra", graph.num_nodes()),
            &graph,
            |b, g| {
                let src = rng.gen_range(0..g.num_nodes());
                let dst = rng.gen_range(0..g.num_nodes());
                let mut dijkstra = Dijkstra::new(g);
                b.iter(|| {
                    dijkstra.search(&src, &dst).ok();
                });
            },
        );
    }
    group.finish();
}
