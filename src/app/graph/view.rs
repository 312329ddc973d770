use eframe::egui::{self, Sense, Ui};

use super::super::ViewModel;
use super::super::navigation::PanState;
use super::super::render_utils::{paint_content, paint_overlay};

impl ViewModel {
    fn sync_surface_size(&mut self, ui: &Ui, available: egui::Vec2) {
        let now = ui.input(|input| input.time);
        if let Some(remaining) = self.on_surface_size(available, now) {
            ui.ctx().request_repaint_after(remaining);
        }
    }

    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        self.sync_surface_size(ui, rect.size());

        let origin = rect.min + self.margins.offset();
        self.handle_graph_zoom(ui, origin, &response);
        self.handle_graph_pan(&response);

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .filter(|pointer| rect.contains(*pointer));
        let hovered = pointer.and_then(|pointer| self.hovered_node(origin, pointer));
        self.update_hover(hovered, pointer, &painter);

        let Some(scene) = &self.scene else {
            return;
        };

        let pointing = hovered
            .and_then(|index| scene.content.nodes.get(index))
            .is_some_and(|node| node.pointer_cursor);
        if pointing {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        } else if self.navigation.state() == PanState::Panning {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::Grabbing;
            });
        }

        paint_content(&painter, &scene.content, origin, self.navigation.transform());
        paint_overlay(&painter, &scene.overlay);
    }
}
