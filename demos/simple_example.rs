use colored::Colorize;
use route_finder::{Dijkstra, DirectedGraph, Edge, FrontierKind, Graph, ShortestPathAlgorithm};

type RoadGraph = DirectedGraph<&'static str, f64>;

fn main() {
    env_logger::init();

    // A small road network between towns
    let graph: RoadGraph = DirectedGraph::new(vec![
        Edge::new("Avila", "Burgos", 10.0),
        Edge::new("Avila", "Cuenca", 5.0),
        Edge::new("Burgos", "Dueñas", 1.0),
        Edge::new("Cuenca", "Burgos", 3.0),
        Edge::new("Cuenca", "Dueñas", 9.0),
        Edge::new("Cuenca", "Elche", 2.0),
        Edge::new("Dueñas", "Elche", 4.0),
        Edge::new("Elche", "Avila", 7.0),
        Edge::new("Elche", "Dueñas", 6.0),
        Edge::new("Faro", "Gijon", 1.0),
    ]);

    println!("--- Querying a simple graph ---");
    println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

    let source = "Avila";
    for frontier in [FrontierKind::Scan, FrontierKind::Heap] {
        let engine = Dijkstra::new().with_frontier(frontier);
        let name = ShortestPathAlgorithm::<&str, f64, RoadGraph>::name(&engine);
        println!("\n{} results:", name.bold());

        for target in graph.nodes() {
            match engine.distance(&graph, &source, target) {
                Ok(route) => println!(
                    "  {} -> {}: cost = {:.1}, path = {:?}",
                    source,
                    target,
                    route.cost,
                    route.full_path(target)
                ),
                Err(e) => println!("  {} -> {}: {}", source, target, e.to_string().red()),
            }
        }
    }

    if let Err(e) = graph.distance(&"Avila", &"Zamora") {
        println!("\n{}", e.to_string().yellow());
    }
}
