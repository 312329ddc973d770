use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

use super::scene::{OverlayItem, OverlayLayer};

/// Label anchor relative to the pointer, in screen points.
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(5.0, -35.0);
/// Background margin around the label text.
pub const TOOLTIP_PADDING: Vec2 = Vec2::new(4.0, 2.0);
pub const TOOLTIP_FONT_SIZE: f32 = 18.0;
pub const TOOLTIP_ALIGN: Align2 = Align2::CENTER_BOTTOM;

pub trait TextMeasure {
    fn measure(&self, text: &str) -> Vec2;
}

impl TextMeasure for Painter {
    fn measure(&self, text: &str) -> Vec2 {
        self.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(TOOLTIP_FONT_SIZE),
            Color32::BLACK,
        )
        .size()
    }
}

fn place(overlay: &mut OverlayLayer, pointer: Pos2, size: Vec2) {
    let anchor = pointer + TOOLTIP_OFFSET;
    let bounds = TOOLTIP_ALIGN.anchor_size(anchor, size);
    overlay.label.anchor = anchor;
    overlay.label.bounds = Some(bounds);
    overlay.background = Some(bounds.expand2(TOOLTIP_PADDING));
}

/// Sets the label text at the pointer and slides a background box in directly
/// behind it.
pub fn show_tooltip(
    overlay: &mut OverlayLayer,
    text: String,
    pointer: Pos2,
    measure: &impl TextMeasure,
) {
    let size = measure.measure(&text);
    overlay.label.text = text;
    place(overlay, pointer, size);
    overlay
        .order
        .insert_before(OverlayItem::Background, OverlayItem::Label);
    overlay.order.raise(OverlayItem::Label);
}

/// Moves an active tooltip with the pointer; a no-op when nothing is shown.
pub fn follow_pointer(overlay: &mut OverlayLayer, pointer: Pos2) {
    let Some(bounds) = overlay.label.bounds else {
        return;
    };
    place(overlay, pointer, bounds.size());
}

pub fn hide_tooltip(overlay: &mut OverlayLayer) {
    overlay.label.text.clear();
    overlay.label.bounds = None;
    overlay.background = None;
    overlay.order.remove(OverlayItem::Background);
}

/// Background rect for painting, if the tooltip is up.
pub fn background_rect(overlay: &OverlayLayer) -> Option<Rect> {
    overlay
        .background
        .filter(|_| overlay.order.contains(OverlayItem::Background))
}
