use eframe::egui::{self, Pos2, Ui};

use super::super::ViewModel;
use super::super::navigation::wheel_zoom_factor;
use super::super::tooltip::{TextMeasure, follow_pointer, hide_tooltip, show_tooltip};

impl ViewModel {
    pub(in crate::app) fn handle_graph_zoom(
        &mut self,
        ui: &Ui,
        origin: Pos2,
        response: &egui::Response,
    ) {
        if !response.hovered() {
            return;
        }

        let (scroll, pinch, pointer) = ui.input(|input| {
            (
                input.raw_scroll_delta.y,
                input.zoom_delta(),
                input.pointer.hover_pos(),
            )
        });

        let factor = if (pinch - 1.0).abs() > f32::EPSILON {
            pinch
        } else if scroll.abs() > f32::EPSILON {
            wheel_zoom_factor(scroll)
        } else {
            return;
        };

        let pointer = pointer.unwrap_or_else(|| response.rect.center());
        self.navigation.zoom(factor, pointer - origin.to_vec2());
    }

    pub(in crate::app) fn handle_graph_pan(&mut self, response: &egui::Response) {
        if response.drag_started() {
            self.navigation.drag_start();
        }
        if response.dragged() {
            self.navigation.drag(response.drag_delta());
        }
        if response.drag_stopped() {
            self.navigation.drag_end();
        }
    }

    /// Topmost node under a screen-space pointer.
    pub(in crate::app) fn hovered_node(&self, origin: Pos2, pointer: Pos2) -> Option<usize> {
        let scene = self.scene.as_ref()?;
        let local = pointer - origin.to_vec2();
        scene
            .content
            .hit_test(self.navigation.transform().invert(local))
    }

    /// Turns this frame's hit-test result into enter/move/leave.
    pub(in crate::app) fn update_hover(
        &mut self,
        hovered: Option<usize>,
        pointer: Option<Pos2>,
        measure: &impl TextMeasure,
    ) {
        let current = self.highlight.hovered();
        match (current, hovered, pointer) {
            (Some(current), Some(next), Some(pointer)) if current == next => {
                self.pointer_move(pointer);
            }
            (_, next, pointer) => {
                if current.is_some() {
                    self.pointer_leave();
                }
                if let (Some(next), Some(pointer)) = (next, pointer) {
                    self.pointer_enter(next, pointer, measure);
                }
            }
        }
    }

    pub(in crate::app) fn pointer_enter(
        &mut self,
        node: usize,
        pointer: Pos2,
        measure: &impl TextMeasure,
    ) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let Some(state) = self.highlight.enter(&mut scene.content, node) else {
            return;
        };

        let label = self.taxonomy.label_for(&state.node_id);
        show_tooltip(&mut scene.overlay, label, pointer, measure);
    }

    pub(in crate::app) fn pointer_move(&mut self, pointer: Pos2) {
        if let Some(scene) = self.scene.as_mut() {
            follow_pointer(&mut scene.overlay, pointer);
        }
    }

    pub(in crate::app) fn pointer_leave(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            self.highlight.leave(&mut scene.content);
            hide_tooltip(&mut scene.overlay);
        }
    }
}
