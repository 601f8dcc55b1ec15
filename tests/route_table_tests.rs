use route_finder::data_structures::{FrontierQueue, Relaxation, RouteTable};

#[test]
fn test_route_table_relax_and_rebuild() {
    let mut table: RouteTable<&str, f64> = RouteTable::new("A");
    assert_eq!(table.len(), 1);
    assert_eq!(table.cost(0), 0.0);

    assert_eq!(table.relax(0, &"B", 5.0), Relaxation::Discovered(1));
    assert_eq!(table.relax(0, &"C", 10.0), Relaxation::Discovered(2));
    table.close(0);

    // equal cost does not replace, cheaper does
    assert_eq!(table.relax(1, &"C", 5.0), Relaxation::Unchanged);
    assert_eq!(table.relax(1, &"C", 4.0), Relaxation::Improved(2));
    table.close(1);

    let route = table.route_to(2);
    assert_eq!(route.cost, 9.0);
    assert_eq!(route.nodes, vec!["A", "B"]);
    assert_eq!(table.slot_of(&"C"), Some(2));
    assert_eq!(table.slot_of(&"Z"), None);
}

#[test]
fn test_route_table_never_updates_closed_slots() {
    let mut table: RouteTable<&str, f64> = RouteTable::new("A");
    table.relax(0, &"B", 1.0);
    table.close(0);
    table.close(1);

    assert_eq!(table.relax(1, &"A", -5.0), Relaxation::Unchanged);
    assert_eq!(table.cost(0), 0.0);
    assert!(table.route_to(0).nodes.is_empty());
}

#[test]
fn test_route_table_cheapest_open_breaks_ties_by_discovery() {
    let mut table: RouteTable<u32, f64> = RouteTable::new(0);
    assert_eq!(table.cheapest_open(), Some(0));

    table.relax(0, &7, 2.0);
    table.relax(0, &3, 2.0);
    table.relax(0, &5, 4.0);
    table.close(0);

    assert_eq!(table.cheapest_open(), Some(1));
    assert_eq!(*table.node(1), 7);
    table.close(1);
    assert_eq!(table.cheapest_open(), Some(2));
    table.close(2);
    table.close(3);
    assert_eq!(table.cheapest_open(), None);
}

#[test]
fn test_frontier_queue_orders_by_cost_then_slot() {
    let mut queue: FrontierQueue<f64> = FrontierQueue::new();
    queue.push(3, 2.0);
    queue.push(1, 2.0);
    queue.push(2, 0.5);
    queue.push(0, 7.0);
    assert_eq!(queue.len(), 4);
    assert_eq!(queue.peek(), Some((2, 0.5)));

    let order: Vec<usize> = std::iter::from_fn(|| queue.pop().map(|(slot, _)| slot)).collect();
    assert_eq!(order, vec![2, 1, 3, 0]);
    assert!(queue.is_empty());
}
