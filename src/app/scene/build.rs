use std::collections::HashMap;

use eframe::egui::Vec2;

use crate::dataset::GraphData;
use crate::taxonomy::{ColorMap, SectorTaxonomy};

use super::geometry::{SceneError, map_geometry};
use super::{
    ContentElement, ContentLayer, DrawList, EdgeSegment, ElementStyle, NODE_RADIUS, NodeMarker,
    OverlayLayer, Scene,
};

/// Builds a fresh scene for `surface`. Nothing is reused from any earlier
/// scene, so rebuilding with the same inputs yields an identical result.
pub fn build_scene(
    graph: &GraphData,
    taxonomy: &SectorTaxonomy,
    colors: &ColorMap,
    surface: Vec2,
) -> Result<Scene, SceneError> {
    let scales = map_geometry(graph.renderable_nodes(), surface)?;

    let mut nodes = Vec::new();
    let mut node_index = HashMap::new();
    for node in graph.renderable_nodes() {
        let Some((x, y)) = node.position() else {
            continue;
        };

        node_index.entry(node.id.clone()).or_insert(nodes.len());
        nodes.push(NodeMarker {
            id: node.id.clone(),
            center: scales.map(x, y),
            radius: NODE_RADIUS,
            fill: colors.fill_for(taxonomy, &node.id),
            style: ElementStyle::BASELINE,
            pointer_cursor: false,
        });
    }

    let mut unresolved_edges = Vec::new();
    let edges = graph
        .edges
        .iter()
        .enumerate()
        .map(|(index, edge)| {
            let endpoints = match (node_index.get(&edge.source), node_index.get(&edge.target)) {
                (Some(&source), Some(&target)) => Some([nodes[source].center, nodes[target].center]),
                _ => {
                    unresolved_edges.push(index);
                    None
                }
            };

            EdgeSegment {
                source: edge.source.clone(),
                target: edge.target.clone(),
                endpoints,
                style: ElementStyle::BASELINE,
            }
        })
        .collect::<Vec<_>>();

    if !unresolved_edges.is_empty() {
        tracing::warn!(
            count = unresolved_edges.len(),
            "edges reference nodes that are missing or lack coordinates"
        );
    }

    // edges sit beneath every marker
    let mut order = DrawList::new();
    for index in 0..edges.len() {
        order.push(ContentElement::Edge(index));
    }
    for index in 0..nodes.len() {
        order.push(ContentElement::Node(index));
    }

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        width = surface.x,
        height = surface.y,
        "built scene"
    );

    Ok(Scene {
        surface,
        content: ContentLayer {
            nodes,
            edges,
            order,
            node_index,
        },
        overlay: OverlayLayer::default(),
        unresolved_edges,
    })
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Color32, pos2, vec2};

    use crate::dataset::{Edge, MetadataEntry, Node};

    use super::super::BASELINE_STROKE;
    use super::*;

    fn graph() -> GraphData {
        GraphData {
            nodes: vec![
                Node { id: "A".into(), x: Some(0.0), y: Some(0.0) },
                Node { id: "B".into(), x: Some(1.0), y: Some(1.0) },
                Node { id: "C".into(), x: Some(2.0), y: Some(0.0) },
                Node { id: "D".into(), x: None, y: Some(4.0) },
            ],
            edges: vec![
                Edge { source: "A".into(), target: "B".into() },
                Edge { source: "B".into(), target: "D".into() },
                Edge { source: "C".into(), target: "Z".into() },
            ],
        }
    }

    fn taxonomy() -> SectorTaxonomy {
        SectorTaxonomy::from_metadata(&[MetadataEntry {
            id: "A".into(),
            display_name: "Alpha".into(),
            code: "01".into(),
            sector_id: Some("product-HS92-8".into()),
        }])
    }

    #[test]
    fn draws_renderable_nodes_with_sector_fill() {
        let scene =
            build_scene(&graph(), &taxonomy(), &ColorMap::hs92(), vec2(200.0, 100.0)).unwrap();

        let ids = scene.content.nodes.iter().map(|node| node.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(scene.content.node_by_id("D"), None);

        let a = &scene.content.nodes[0];
        assert_eq!(a.center, pos2(0.0, 100.0));
        assert_eq!(a.radius, NODE_RADIUS);
        assert_eq!(a.fill, Color32::from_rgb(123, 162, 217));
        assert_eq!(a.style.stroke, BASELINE_STROKE);
        assert_eq!(a.style.stroke_width, 1.0);

        assert_eq!(scene.content.nodes[1].fill, Color32::BLACK);
    }

    #[test]
    fn unresolved_edges_have_no_geometry() {
        let scene =
            build_scene(&graph(), &taxonomy(), &ColorMap::hs92(), vec2(200.0, 100.0)).unwrap();

        assert_eq!(
            scene.content.edges[0].endpoints,
            Some([pos2(0.0, 100.0), pos2(100.0, 0.0)])
        );
        assert_eq!(scene.content.edges[1].endpoints, None);
        assert_eq!(scene.content.edges[2].endpoints, None);
        assert_eq!(scene.unresolved_edges, vec![1, 2]);
    }

    #[test]
    fn edges_are_drawn_beneath_nodes() {
        let scene =
            build_scene(&graph(), &taxonomy(), &ColorMap::hs92(), vec2(200.0, 100.0)).unwrap();

        let order = scene.content.order.iter().collect::<Vec<_>>();
        assert_eq!(order.len(), 6);
        assert!(order[..3].iter().all(|e| matches!(e, ContentElement::Edge(_))));
        assert!(order[3..].iter().all(|e| matches!(e, ContentElement::Node(_))));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let first =
            build_scene(&graph(), &taxonomy(), &ColorMap::hs92(), vec2(320.0, 240.0)).unwrap();
        let second =
            build_scene(&graph(), &taxonomy(), &ColorMap::hs92(), vec2(320.0, 240.0)).unwrap();

        assert_eq!(first.content.nodes, second.content.nodes);
        assert_eq!(first.content.edges, second.content.edges);
        assert_eq!(first.content.order, second.content.order);
        assert_eq!(first.overlay, second.overlay);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let graph = GraphData {
            nodes: vec![Node { id: "A".into(), x: None, y: None }],
            edges: Vec::new(),
        };
        let result = build_scene(&graph, &taxonomy(), &ColorMap::hs92(), vec2(10.0, 10.0));
        assert!(matches!(result, Err(SceneError::EmptyDataset)));
    }
}
