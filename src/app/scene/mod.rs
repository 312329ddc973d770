use std::collections::HashMap;

use eframe::egui::{Color32, Pos2, Rect, Stroke, Vec2, vec2};

mod build;
mod draw_list;
mod geometry;

pub use build::build_scene;
pub use draw_list::DrawList;
pub use geometry::SceneError;

pub const NODE_RADIUS: f32 = 4.0;
pub const BASELINE_STROKE: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);
pub const HIGHLIGHT_STROKE: Color32 = Color32::from_rgb(255, 0, 0);
pub const HIGHLIGHT_EDGE_WIDTH: f32 = 2.0;
pub const HIGHLIGHT_NODE_WIDTH: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const DEFAULT: Self = Self {
        top: 20.0,
        right: 40.0,
        bottom: 20.0,
        left: 40.0,
    };

    pub fn surface_for(&self, available: Vec2) -> Vec2 {
        vec2(
            (available.x - self.left - self.right).max(0.0),
            (available.y - self.top - self.bottom).max(0.0),
        )
    }

    pub fn offset(&self) -> Vec2 {
        vec2(self.left, self.top)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementStyle {
    pub stroke: Color32,
    pub stroke_width: f32,
}

impl ElementStyle {
    pub const BASELINE: Self = Self {
        stroke: BASELINE_STROKE,
        stroke_width: 1.0,
    };

    pub const fn highlight(stroke_width: f32) -> Self {
        Self {
            stroke: HIGHLIGHT_STROKE,
            stroke_width,
        }
    }

    #[cfg(test)]
    pub fn is_baseline(&self) -> bool {
        *self == Self::BASELINE
    }

    /// Stroke as painted once the content transform's `scale` is applied.
    pub fn scaled_stroke(&self, scale: f32) -> Stroke {
        Stroke::new(self.stroke_width * scale, self.stroke)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeMarker {
    pub id: String,
    pub center: Pos2,
    pub radius: f32,
    pub fill: Color32,
    pub style: ElementStyle,
    pub pointer_cursor: bool,
}

impl NodeMarker {
    pub fn contains(&self, point: Pos2) -> bool {
        self.center.distance(point) <= self.radius + self.style.stroke_width * 0.5
    }
}

/// `endpoints` is `None` when either end does not resolve to a drawn node; the
/// segment then paints nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSegment {
    pub source: String,
    pub target: String,
    pub endpoints: Option<[Pos2; 2]>,
    pub style: ElementStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentElement {
    Edge(usize),
    Node(usize),
}

/// Nodes and edges in surface coordinates; painted through the view transform.
#[derive(Clone, Debug, Default)]
pub struct ContentLayer {
    pub nodes: Vec<NodeMarker>,
    pub edges: Vec<EdgeSegment>,
    pub order: DrawList<ContentElement>,
    node_index: HashMap<String, usize>,
}

impl ContentLayer {
    pub fn node_by_id(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    /// Topmost node under `point` (surface coordinates), in paint order.
    pub fn hit_test(&self, point: Pos2) -> Option<usize> {
        self.order.iter().rev().find_map(|element| match element {
            ContentElement::Node(index) => self
                .nodes
                .get(index)
                .filter(|node| node.contains(point))
                .map(|_| index),
            ContentElement::Edge(_) => None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayItem {
    Background,
    Label,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipLabel {
    pub text: String,
    pub anchor: Pos2,
    pub bounds: Option<Rect>,
}

/// Screen-space layer; never touched by the view transform.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayer {
    pub label: TooltipLabel,
    pub background: Option<Rect>,
    pub order: DrawList<OverlayItem>,
}

impl Default for OverlayLayer {
    fn default() -> Self {
        let mut order = DrawList::new();
        order.push(OverlayItem::Label);
        Self {
            label: TooltipLabel::default(),
            background: None,
            order,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub surface: Vec2,
    pub content: ContentLayer,
    pub overlay: OverlayLayer,
    pub unresolved_edges: Vec<usize>,
}
