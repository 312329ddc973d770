use std::collections::BTreeSet;

use super::super::scene::EdgeSegment;

/// Indices of every edge with `node_id` at either end, in edge order.
pub(super) fn connected_edges(edges: &[EdgeSegment], node_id: &str) -> Vec<usize> {
    edges
        .iter()
        .enumerate()
        .filter(|(_, edge)| edge.source == node_id || edge.target == node_id)
        .map(|(index, _)| index)
        .collect()
}

/// Opposite endpoints of `connected`, never including `node_id` itself.
pub(super) fn neighbor_ids(
    edges: &[EdgeSegment],
    connected: &[usize],
    node_id: &str,
) -> BTreeSet<String> {
    let mut neighbors = BTreeSet::new();
    for edge in connected.iter().filter_map(|&index| edges.get(index)) {
        if edge.source != node_id {
            neighbors.insert(edge.source.clone());
        }
        if edge.target != node_id {
            neighbors.insert(edge.target.clone());
        }
    }
    neighbors
}
