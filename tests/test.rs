use std::collections::HashSet;

use coexp_modules::{algorithm, Component, Graph};

/// Tests the correctness of module detection by running it against
/// graphs for which the connected components are known

fn chain_graph(labels: &[&str]) -> Graph {
    let edges: Vec<_> = labels.windows(2).map(|pair| (pair[0], pair[1])).collect();

    Graph::from_edges(edges)
}

fn component_of<'a>(components: &'a [Component], label: &str) -> &'a Component {
    components
        .iter()
        .find(|component| component.iter().any(|l| l == label))
        .unwrap()
}

/// Edges (A,B), (B,C), (D,E) form two modules: {A,B,C} and {D,E}
#[test]
fn two_modules() {
    let graph = Graph::from_edges(vec![("A", "B"), ("B", "C"), ("D", "E")]);

    let comps = algorithm::find_components(&graph);

    for (ix, comp) in comps.iter().enumerate() {
        println!("{ix}\t{comp:?}");
    }

    assert_eq!(comps.len(), 2);
    assert_eq!(component_of(&comps, "A").len(), 3);
    assert_eq!(component_of(&comps, "D").len(), 2);

    // A, B and C are mutually reachable, D and E are elsewhere
    let abc = component_of(&comps, "A");
    assert!(abc.iter().any(|l| l == "B"));
    assert!(abc.iter().any(|l| l == "C"));
    assert!(!abc.iter().any(|l| l == "D"));
}

/// A self-loop makes a node its own neighbor and nothing more
#[test]
fn self_loop() {
    let graph = Graph::from_edges(vec![("X", "X")]);

    assert_eq!(graph.len(), 1);
    assert!(graph.node("X").unwrap().neighbors.contains("X"));

    let comps = algorithm::find_components(&graph);

    assert_eq!(comps.len(), 1);
    assert_eq!(comps[0], vec!["X".to_string()]);
}

/// Labels registered without any edges each form a singleton module
#[test]
fn preregistered_singletons() {
    let mut graph = Graph::new();
    graph.get_or_create("A");
    graph.get_or_create("B");
    graph.get_or_create("C");

    let comps = algorithm::find_components(&graph);

    assert_eq!(comps.len(), 3);
    assert!(comps.iter().all(|comp| comp.len() == 1));
}

/// A chain A-B-C-D-E is a single module of five labels
#[test]
fn chain() {
    let graph = chain_graph(&["A", "B", "C", "D", "E"]);

    let comps = algorithm::find_components(&graph);

    for (ix, comp) in comps.iter().enumerate() {
        println!("{ix}\t{comp:?}");
    }

    assert_eq!(comps.len(), 1);
    assert_eq!(comps[0].len(), 5);
}

/// Adding the same edge twice leaves the graph unchanged
#[test]
fn edge_insertion_is_idempotent() {
    let once = Graph::from_edges(vec![("A", "B")]);
    let twice = Graph::from_edges(vec![("A", "B"), ("A", "B")]);

    assert_eq!(once.len(), twice.len());
    for label in ["A", "B"] {
        assert_eq!(
            once.node(label).unwrap().neighbors,
            twice.node(label).unwrap().neighbors
        );
    }
}

/// Every label lands in exactly one module, and edges never straddle two
#[test]
fn partition_and_symmetry() {
    let edges = vec![
        ("A", "B"),
        ("B", "C"),
        ("C", "A"),
        ("D", "E"),
        ("E", "F"),
        ("G", "G"),
    ];
    let graph = Graph::from_edges(edges.clone());

    let comps = algorithm::find_components(&graph);

    let mut seen: HashSet<&str> = HashSet::new();
    for comp in &comps {
        for label in comp {
            // no label appears in more than one module
            assert!(seen.insert(label.as_str()));
        }
    }
    let all: HashSet<&str> = graph.labels().collect();
    assert_eq!(seen, all);

    for (a, b) in edges {
        let comp = component_of(&comps, a);
        assert!(comp.iter().any(|l| l == b));
    }
}

/// A graph with no nodes has no modules
#[test]
fn empty_graph() {
    let graph = Graph::new();

    assert!(graph.is_empty());
    assert!(algorithm::find_components(&graph).is_empty());
}
