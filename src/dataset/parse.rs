use anyhow::{Context, Result};
use serde::Deserialize;

use super::{Edge, GraphData, MetadataEntry, Node};

#[derive(Clone, Debug, Deserialize)]
struct RawNode {
    #[serde(alias = "productId")]
    id: String,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
}

#[derive(Clone, Debug, Deserialize)]
struct RawEdge {
    source: String,
    target: String,
}

#[derive(Clone, Debug, Deserialize)]
struct RawGraph {
    #[serde(default)]
    nodes: Vec<RawNode>,
    #[serde(default, alias = "links")]
    edges: Vec<RawEdge>,
}

#[derive(Clone, Debug, Deserialize)]
struct RawSector {
    #[serde(alias = "productId")]
    id: String,
}

#[derive(Clone, Debug, Deserialize)]
struct RawMetadataItem {
    #[serde(alias = "productId")]
    id: String,
    #[serde(alias = "productName", alias = "displayName")]
    display_name: String,
    #[serde(alias = "productCode")]
    code: String,
    #[serde(default, alias = "productSector")]
    sector: Option<RawSector>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum RawMetadata {
    Wrapped {
        #[serde(rename = "productHs92")]
        product_hs92: Vec<RawMetadataItem>,
    },
    Flat(Vec<RawMetadataItem>),
}

pub fn parse_graph(raw: &str) -> Result<GraphData> {
    let parsed: RawGraph = serde_json::from_str(raw).context("invalid node/edge JSON")?;

    Ok(GraphData {
        nodes: parsed
            .nodes
            .into_iter()
            .map(|node| Node {
                id: node.id,
                x: node.x,
                y: node.y,
            })
            .collect(),
        edges: parsed
            .edges
            .into_iter()
            .map(|edge| Edge {
                source: edge.source,
                target: edge.target,
            })
            .collect(),
    })
}

/// Accepts either the `{ "productHs92": [...] }` export or a bare list.
pub fn parse_metadata(raw: &str) -> Result<Vec<MetadataEntry>> {
    let parsed: RawMetadata = serde_json::from_str(raw).context("invalid metadata JSON")?;
    let items = match parsed {
        RawMetadata::Wrapped { product_hs92 } => product_hs92,
        RawMetadata::Flat(items) => items,
    };

    Ok(items
        .into_iter()
        .map(|item| MetadataEntry {
            id: item.id,
            display_name: item.display_name,
            code: item.code,
            sector_id: item.sector.map(|sector| sector.id),
        })
        .collect())
}
