use std::env;
use std::time::{Duration, Instant};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use route_finder::{Dijkstra, DirectedGraph, Edge, FrontierKind, Graph, ShortestPathAlgorithm};

type LabelGraph = DirectedGraph<String, f64>;

// Function to generate a random directed graph with string labels
fn generate_random_graph(rng: &mut StdRng, num_nodes: usize, edge_factor: f64) -> LabelGraph {
    let num_edges = (edge_factor * num_nodes as f64) as usize;
    let mut edges = Vec::with_capacity(num_edges + num_nodes);

    // A ring keeps most queries reachable
    for u in 0..num_nodes {
        let v = (u + 1) % num_nodes;
        edges.push(Edge::new(format!("n{}", u), format!("n{}", v), rng.gen_range(50.0..100.0)));
    }

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_nodes);
        let v = rng.gen_range(0..num_nodes);
        if u != v {
            edges.push(Edge::new(format!("n{}", u), format!("n{}", v), rng.gen_range(1.0..100.0)));
        }
    }

    DirectedGraph::new(edges)
}

// Runs every query with one frontier policy, in parallel across queries
fn benchmark_frontier(
    frontier: FrontierKind,
    graph: &LabelGraph,
    queries: &[(String, String)],
) -> (Duration, Vec<Option<f64>>) {
    let engine = Dijkstra::new().with_frontier(frontier);

    let start = Instant::now();
    let costs: Vec<Option<f64>> = queries
        .par_iter()
        .map(|(s, t)| engine.distance(graph, s, t).ok().map(|r| r.cost))
        .collect();
    let duration = start.elapsed();

    let reachable = costs.iter().filter(|c| c.is_some()).count();
    println!(
        "  - {:?}: {} of {} queries reachable in {:?}",
        frontier,
        reachable,
        queries.len(),
        duration
    );

    (duration, costs)
}

fn main() {
    env_logger::init();

    // Graph sizes from the command line, or a default ladder
    let args: Vec<String> = env::args().skip(1).collect();
    let graph_sizes: Vec<usize> = if args.is_empty() {
        vec![100, 1_000, 5_000]
    } else {
        args.iter().filter_map(|a| a.parse().ok()).collect()
    };

    let edge_factor = 3.0;
    let query_count = 64;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: Dijkstra scan frontier vs heap frontier");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        if size < 2 {
            continue;
        }
        let graph = generate_random_graph(&mut rng, size, edge_factor);
        info!("generated graph with {} nodes and {} edges", graph.node_count(), graph.edge_count());

        let queries: Vec<(String, String)> = (0..query_count)
            .map(|_| {
                (
                    format!("n{}", rng.gen_range(0..size)),
                    format!("n{}", rng.gen_range(0..size)),
                )
            })
            .collect();

        println!("\nGraph with {} nodes and {} edges", graph.node_count(), graph.edge_count());
        let (scan_time, scan_costs) = benchmark_frontier(FrontierKind::Scan, &graph, &queries);
        let (heap_time, heap_costs) = benchmark_frontier(FrontierKind::Heap, &graph, &queries);

        let agree = scan_costs == heap_costs;
        if !agree {
            println!("  ! frontier policies disagree on at least one query");
        }

        let speedup = scan_time.as_secs_f64() / heap_time.as_secs_f64().max(f64::EPSILON);
        println!("Speedup - heap vs scan: {:.2}x", speedup);
        results.push((size, scan_time, heap_time, speedup, agree));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<8} | {:<6}", "Nodes", "Scan (ms)", "Heap (ms)", "SpeedUp", "Agree");
    println!("-----------------------------------------------------");

    for (size, scan_time, heap_time, speedup, agree) in &results {
        println!(
            "{:<10} | {:<12} | {:<12} | {:<8.2} | {:<6}",
            size,
            scan_time.as_millis(),
            heap_time.as_millis(),
            speedup,
            agree
        );
    }
}
