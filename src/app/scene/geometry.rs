use eframe::egui::{Pos2, Vec2, pos2};
use thiserror::Error;

use crate::dataset::Node;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("no node has both coordinates; the layout extent is undefined")]
    EmptyDataset,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < f64::EPSILON {
            // single distinct value: park everything mid-range
            return (r0 + r1) * 0.5;
        }

        r0 + (value - d0) / span * (r1 - r0)
    }
}

/// Horizontal and vertical scales for one surface size. The vertical range is
/// inverted so larger data y lands higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Scales {
    pub fn map(&self, x: f64, y: f64) -> Pos2 {
        pos2(self.x.apply(x) as f32, self.y.apply(y) as f32)
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

pub fn map_geometry<'a>(
    nodes: impl Iterator<Item = &'a Node> + Clone,
    surface: Vec2,
) -> Result<Scales, SceneError> {
    let positions = nodes.filter_map(Node::position);
    let x_extent = extent(positions.clone().map(|(x, _)| x)).ok_or(SceneError::EmptyDataset)?;
    let y_extent = extent(positions.map(|(_, y)| y)).ok_or(SceneError::EmptyDataset)?;

    Ok(Scales {
        x: LinearScale::new(x_extent, (0.0, surface.x as f64)),
        y: LinearScale::new(y_extent, (surface.y as f64, 0.0)),
    })
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    fn node(id: &str, x: Option<f64>, y: Option<f64>) -> Node {
        Node {
            id: id.to_owned(),
            x,
            y,
        }
    }

    #[test]
    fn maps_extent_onto_surface_with_inverted_y() {
        let nodes = [
            node("A", Some(-1.0), Some(10.0)),
            node("B", Some(3.0), Some(20.0)),
            node("C", None, Some(500.0)),
        ];

        let scales = map_geometry(nodes.iter(), vec2(400.0, 200.0)).unwrap();

        assert_eq!(scales.map(-1.0, 10.0), pos2(0.0, 200.0));
        assert_eq!(scales.map(3.0, 20.0), pos2(400.0, 0.0));
        assert_eq!(scales.map(1.0, 15.0), pos2(200.0, 100.0));
    }

    #[test]
    fn fails_without_renderable_nodes() {
        let nodes = [node("A", None, Some(1.0)), node("B", Some(1.0), None)];
        assert_eq!(
            map_geometry(nodes.iter(), vec2(100.0, 100.0)),
            Err(SceneError::EmptyDataset)
        );
        assert_eq!(
            map_geometry(std::iter::empty::<&Node>(), vec2(100.0, 100.0)),
            Err(SceneError::EmptyDataset)
        );
    }

    #[test]
    fn degenerate_domain_maps_to_middle() {
        let scale = LinearScale::new((2.0, 2.0), (0.0, 100.0));
        assert_eq!(scale.apply(2.0), 50.0);
    }
}
