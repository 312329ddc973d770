use eframe::egui::{Color32, FontId, Painter, Pos2, Rect, Stroke, StrokeKind};

use super::navigation::ViewTransform;
use super::scene::{ContentElement, ContentLayer, OverlayItem, OverlayLayer};
use super::tooltip::{TOOLTIP_ALIGN, TOOLTIP_FONT_SIZE, background_rect};

// white and gray at 85% opacity, premultiplied
const TOOLTIP_FILL: Color32 = Color32::from_rgba_premultiplied(217, 217, 217, 217);
const TOOLTIP_BORDER: Color32 = Color32::from_rgba_premultiplied(109, 109, 109, 217);
const TOOLTIP_TEXT: Color32 = Color32::BLACK;

pub(super) fn content_to_screen(origin: Pos2, transform: ViewTransform, point: Pos2) -> Pos2 {
    origin + transform.apply(point).to_vec2()
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    rect.expand(radius).contains(position)
}

/// Paints nodes and edges in draw-list order through the view transform.
pub(super) fn paint_content(
    painter: &Painter,
    content: &ContentLayer,
    origin: Pos2,
    transform: ViewTransform,
) {
    let clip = painter.clip_rect();
    let scale = transform.scale;

    for element in content.order.iter() {
        match element {
            ContentElement::Edge(index) => {
                let Some(edge) = content.edges.get(index) else {
                    continue;
                };
                let Some([start, end]) = edge.endpoints else {
                    continue;
                };
                painter.line_segment(
                    [
                        content_to_screen(origin, transform, start),
                        content_to_screen(origin, transform, end),
                    ],
                    edge.style.scaled_stroke(scale),
                );
            }
            ContentElement::Node(index) => {
                let Some(node) = content.nodes.get(index) else {
                    continue;
                };
                let center = content_to_screen(origin, transform, node.center);
                let radius = node.radius * scale;
                if !circle_visible(clip, center, radius + node.style.stroke_width * scale) {
                    continue;
                }
                painter.circle(center, radius, node.fill, node.style.scaled_stroke(scale));
            }
        }
    }
}

/// Paints the tooltip in screen space.
pub(super) fn paint_overlay(painter: &Painter, overlay: &OverlayLayer) {
    for item in overlay.order.iter() {
        match item {
            OverlayItem::Background => {
                if let Some(rect) = background_rect(overlay) {
                    painter.rect(
                        rect,
                        0.0,
                        TOOLTIP_FILL,
                        Stroke::new(1.0, TOOLTIP_BORDER),
                        StrokeKind::Middle,
                    );
                }
            }
            OverlayItem::Label => {
                if overlay.label.text.is_empty() {
                    continue;
                }
                painter.text(
                    overlay.label.anchor,
                    TOOLTIP_ALIGN,
                    &overlay.label.text,
                    FontId::proportional(TOOLTIP_FONT_SIZE),
                    TOOLTIP_TEXT,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};

    use super::*;

    #[test]
    fn content_points_follow_transform() {
        let transform = ViewTransform {
            translate: vec2(10.0, -5.0),
            scale: 2.0,
        };
        assert_eq!(
            content_to_screen(pos2(40.0, 20.0), transform, pos2(3.0, 4.0)),
            pos2(56.0, 23.0)
        );
    }

    #[test]
    fn culling_keeps_partially_visible_circles() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
        assert!(circle_visible(rect, pos2(50.0, 50.0), 1.0));
        assert!(circle_visible(rect, pos2(-3.0, 50.0), 4.0));
        assert!(!circle_visible(rect, pos2(-10.0, 50.0), 4.0));
    }
}
