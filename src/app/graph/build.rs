use std::time::Duration;

use eframe::egui::Vec2;

use super::super::ViewModel;
use super::super::scene::{SceneError, build_scene};

impl ViewModel {
    /// Replaces the whole scene for a new panel size and returns navigation
    /// and hover to their initial state. On failure the previous scene stays
    /// on screen untouched.
    pub(in crate::app) fn rebuild_scene(&mut self, available: Vec2) -> Result<(), SceneError> {
        let surface = self.margins.surface_for(available);

        let scene = match build_scene(&self.dataset.graph, &self.taxonomy, &self.colors, surface) {
            Ok(scene) => scene,
            Err(error) => {
                tracing::error!(%error, "scene rebuild aborted; keeping previous scene");
                return Err(error);
            }
        };

        self.scene_revision = self.scene_revision.wrapping_add(1);
        tracing::debug!(
            revision = self.scene_revision,
            width = scene.surface.x,
            height = scene.surface.y,
            unresolved_edges = scene.unresolved_edges.len(),
            "scene rebuilt"
        );
        self.scene = Some(scene);
        self.navigation.reset();
        self.highlight.reset();
        Ok(())
    }

    /// Size changes feed the debouncer; the first call builds immediately.
    /// Returns how long until a pending rebuild is due.
    pub(in crate::app) fn on_surface_size(
        &mut self,
        available: Vec2,
        now: f64,
    ) -> Option<Duration> {
        if !self.resize.is_mounted() {
            self.resize.mount(available);
            tracing::info!(
                width = available.x,
                height = available.y,
                "mounting product space"
            );
            self.rebuild_scene(available).ok();
            return None;
        }

        self.resize.observe(available, now);
        if let Some(size) = self.resize.poll(now) {
            tracing::debug!(width = size.x, height = size.y, "resize settled");
            self.rebuild_scene(size).ok();
        }

        self.resize.remaining(now)
    }
}
