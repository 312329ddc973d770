use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Dataset;
use super::parse::{parse_graph, parse_metadata};

pub fn load_dataset(nodes_edges_path: &Path, metadata_path: &Path) -> Result<Dataset> {
    let graph_raw = fs::read_to_string(nodes_edges_path)
        .with_context(|| format!("failed to read {}", nodes_edges_path.display()))?;
    let graph = parse_graph(&graph_raw)
        .with_context(|| format!("failed to parse {}", nodes_edges_path.display()))?;

    let metadata_raw = fs::read_to_string(metadata_path)
        .with_context(|| format!("failed to read {}", metadata_path.display()))?;
    let metadata = parse_metadata(&metadata_raw)
        .with_context(|| format!("failed to parse {}", metadata_path.display()))?;

    tracing::info!(
        nodes = graph.nodes.len(),
        renderable = graph.renderable_nodes().count(),
        edges = graph.edges.len(),
        metadata = metadata.len(),
        "loaded product space dataset"
    );

    Ok(Dataset { graph, metadata })
}
