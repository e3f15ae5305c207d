use fxhash::FxHashSet;

use crate::graph::Graph;

/// A connected component ("module"): node labels in the order the
/// traversal discovered them.
pub type Component = Vec<String>;

/// Partitions every label known to `graph` into connected components.
///
/// Components are discovered by seeding a depth-first walk from each label
/// in registration order that no earlier walk has reached, so every label
/// lands in exactly one component and the order of components is
/// deterministic for a given insertion sequence. The graph itself is not
/// mutated; each call starts from a fresh visited set.
pub fn find_components(graph: &Graph) -> Vec<Component> {
    let mut components = Vec::new();
    let mut visited: FxHashSet<&str> = FxHashSet::default();

    for label in graph.labels() {
        if visited.contains(label) {
            continue;
        }
        components.push(depth_search(graph, label, &mut visited));
    }

    components
}

/// Walks the component containing `seed` with an explicit stack, marking
/// every reached label in `visited` and returning the labels in discovery
/// order. A neighbor is pushed only if it is neither visited nor already
/// waiting on the stack, so no label is ever stacked twice.
fn depth_search<'a>(
    graph: &'a Graph,
    seed: &'a str,
    visited: &mut FxHashSet<&'a str>,
) -> Component {
    let mut component = Vec::new();
    let mut to_visit = vec![seed];
    let mut on_stack: FxHashSet<&str> = FxHashSet::default();
    on_stack.insert(seed);

    while let Some(label) = to_visit.pop() {
        on_stack.remove(label);
        visited.insert(label);
        component.push(label.to_string());

        if let Some(node) = graph.node(label) {
            for neighbor in &node.neighbors {
                let neighbor = neighbor.as_str();
                if !visited.contains(neighbor) && !on_stack.contains(neighbor) {
                    to_visit.push(neighbor);
                    on_stack.insert(neighbor);
                }
            }
        }
    }

    component
}
