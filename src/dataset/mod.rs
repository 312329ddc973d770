mod load;
mod parse;

pub use load::load_dataset;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Node {
    /// Both coordinates, when the node has a layout position.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.x.zip(self.y)
    }

    pub fn is_renderable(&self) -> bool {
        self.position().is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphData {
    pub fn renderable_nodes(&self) -> impl Iterator<Item = &Node> + Clone {
        self.nodes.iter().filter(|node| node.is_renderable())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataEntry {
    pub id: String,
    pub display_name: String,
    pub code: String,
    pub sector_id: Option<String>,
}

/// Everything the viewer needs, loaded once before the first frame.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub graph: GraphData,
    pub metadata: Vec<MetadataEntry>,
}
