use std::collections::BTreeSet;

use super::scene::{
    ContentElement, ContentLayer, ElementStyle, HIGHLIGHT_EDGE_WIDTH, HIGHLIGHT_NODE_WIDTH,
};

mod collect;

use self::collect::{connected_edges, neighbor_ids};

/// Neighborhood of the node under the pointer. Replaced wholesale on every
/// enter and dropped on leave.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverState {
    pub node: usize,
    pub node_id: String,
    pub connected_edges: Vec<usize>,
    pub connected_node_ids: BTreeSet<String>,
}

#[derive(Clone, Debug, Default)]
pub struct HighlightEngine {
    state: Option<HoverState>,
}

impl HighlightEngine {
    pub fn state(&self) -> Option<&HoverState> {
        self.state.as_ref()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.state().map(|state| state.node)
    }

    /// Highlights `node` and its neighborhood. Any earlier highlight is
    /// reverted first, so at most one node is ever highlighted.
    pub fn enter(&mut self, content: &mut ContentLayer, node: usize) -> Option<&HoverState> {
        if self.state.is_some() {
            self.leave(content);
        }

        let node_id = content.nodes.get(node)?.id.clone();
        let connected_edges = connected_edges(&content.edges, &node_id);
        let connected_node_ids = neighbor_ids(&content.edges, &connected_edges, &node_id);

        for &index in &connected_edges {
            content.edges[index].style = ElementStyle::highlight(HIGHLIGHT_EDGE_WIDTH);
        }
        content.order.raise_where(|element| {
            matches!(element, ContentElement::Edge(index) if connected_edges.contains(&index))
        });

        let neighbors = connected_node_ids
            .iter()
            .filter_map(|id| content.node_by_id(id))
            .collect::<Vec<_>>();
        for &index in &neighbors {
            content.nodes[index].style = ElementStyle::highlight(HIGHLIGHT_NODE_WIDTH);
        }
        content.order.raise_where(|element| {
            matches!(element, ContentElement::Node(index) if neighbors.contains(&index))
        });

        let marker = &mut content.nodes[node];
        marker.style = ElementStyle::highlight(HIGHLIGHT_NODE_WIDTH);
        marker.pointer_cursor = true;
        content.order.raise(ContentElement::Node(node));

        tracing::debug!(
            node = node_id.as_str(),
            edges = connected_edges.len(),
            neighbors = connected_node_ids.len(),
            "hover enter"
        );

        self.state = Some(HoverState {
            node,
            node_id,
            connected_edges,
            connected_node_ids,
        });
        self.state.as_ref()
    }

    /// Returns every element to baseline and drops edges back beneath the
    /// markers, whatever was highlighted before.
    pub fn leave(&mut self, content: &mut ContentLayer) {
        for edge in &mut content.edges {
            edge.style = ElementStyle::BASELINE;
        }
        content
            .order
            .lower_where(|element| matches!(element, ContentElement::Edge(_)));

        for marker in &mut content.nodes {
            marker.style = ElementStyle::BASELINE;
        }

        if let Some(state) = self.state.take() {
            tracing::debug!(node = state.node_id.as_str(), "hover leave");
        }
    }

    pub fn reset(&mut self) {
        self.state = None;
    }
}
