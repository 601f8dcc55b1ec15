use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use route_finder::{Dijkstra, DirectedGraph, Edge, FrontierKind, ShortestPathAlgorithm};

fn random_graph(num_nodes: usize, edge_factor: usize) -> DirectedGraph<u32, f64> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut edges = Vec::new();
    for u in 0..num_nodes as u32 {
        edges.push(Edge::new(u, (u + 1) % num_nodes as u32, rng.gen_range(50.0..100.0)));
        for _ in 0..edge_factor {
            let v = rng.gen_range(0..num_nodes as u32);
            edges.push(Edge::new(u, v, rng.gen_range(1.0..100.0)));
        }
    }
    DirectedGraph::new(edges)
}

fn bench_frontiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");

    for &size in &[100usize, 1_000] {
        let graph = random_graph(size, 3);
        let target = (size - 1) as u32;

        for frontier in [FrontierKind::Scan, FrontierKind::Heap] {
            let engine = Dijkstra::new().with_frontier(frontier);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", frontier), size),
                &graph,
                |b, graph| b.iter(|| engine.distance(black_box(graph), &0, &target)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_frontiers);
criterion_main!(benches);
