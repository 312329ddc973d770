use eframe::egui::{Pos2, Vec2};

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 5.0;

/// Translate + uniform scale applied to the content layer only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub translate: Vec2,
    pub scale: f32,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    pub fn apply(&self, point: Pos2) -> Pos2 {
        Pos2::new(
            point.x * self.scale + self.translate.x,
            point.y * self.scale + self.translate.y,
        )
    }

    pub fn invert(&self, point: Pos2) -> Pos2 {
        Pos2::new(
            (point.x - self.translate.x) / self.scale,
            (point.y - self.translate.y) / self.scale,
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanState {
    #[default]
    Idle,
    Panning,
}

#[derive(Clone, Debug, Default)]
pub struct NavigationController {
    transform: ViewTransform,
    state: PanState,
}

impl NavigationController {
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn state(&self) -> PanState {
        self.state
    }

    pub fn drag_start(&mut self) {
        self.state = PanState::Panning;
    }

    pub fn drag(&mut self, delta: Vec2) {
        if self.state == PanState::Panning {
            self.transform.translate += delta;
        }
    }

    pub fn drag_end(&mut self) {
        self.state = PanState::Idle;
    }

    /// Multiplies the scale by `factor`, clamped to `[MIN_SCALE, MAX_SCALE]`,
    /// keeping the content point under `anchor` (surface coordinates) fixed.
    pub fn zoom(&mut self, factor: f32, anchor: Pos2) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }

        let content_anchor = self.transform.invert(anchor);
        let scale = (self.transform.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        self.transform.scale = scale;
        self.transform.translate = anchor.to_vec2() - content_anchor.to_vec2() * scale;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Wheel delta (points) to a multiplicative zoom factor.
pub fn wheel_zoom_factor(scroll_y: f32) -> f32 {
    2f32.powf(scroll_y * 0.002)
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};

    use super::*;

    #[test]
    fn pans_only_while_dragging() {
        let mut nav = NavigationController::default();
        nav.drag(vec2(10.0, 10.0));
        assert_eq!(nav.transform().translate, Vec2::ZERO);

        nav.drag_start();
        assert_eq!(nav.state(), PanState::Panning);
        nav.drag(vec2(10.0, -4.0));
        nav.drag(vec2(5.0, 1.0));
        assert_eq!(nav.transform().translate, vec2(15.0, -3.0));

        nav.drag_end();
        assert_eq!(nav.state(), PanState::Idle);
        nav.drag(vec2(100.0, 100.0));
        assert_eq!(nav.transform().translate, vec2(15.0, -3.0));
    }

    #[test]
    fn scale_stays_within_bounds() {
        let mut nav = NavigationController::default();
        for _ in 0..50 {
            nav.zoom(1.7, pos2(30.0, 40.0));
            assert!(nav.transform().scale <= MAX_SCALE);
        }
        assert_eq!(nav.transform().scale, MAX_SCALE);

        for _ in 0..50 {
            nav.zoom(0.3, pos2(30.0, 40.0));
            assert!(nav.transform().scale >= MIN_SCALE);
        }
        assert_eq!(nav.transform().scale, MIN_SCALE);

        nav.zoom(1000.0, pos2(0.0, 0.0));
        assert_eq!(nav.transform().scale, MAX_SCALE);
        nav.zoom(f32::NAN, pos2(0.0, 0.0));
        assert_eq!(nav.transform().scale, MAX_SCALE);
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut nav = NavigationController::default();
        nav.drag_start();
        nav.drag(vec2(12.0, -8.0));
        nav.drag_end();

        let anchor = pos2(120.0, 80.0);
        let before = nav.transform().invert(anchor);
        nav.zoom(2.0, anchor);
        let after = nav.transform().apply(before);

        assert!((after - anchor).length() < 1e-3);
        assert_eq!(nav.transform().scale, 2.0);
    }

    #[test]
    fn zoom_does_not_change_pan_state() {
        let mut nav = NavigationController::default();
        nav.drag_start();
        nav.zoom(1.5, pos2(0.0, 0.0));
        assert_eq!(nav.state(), PanState::Panning);
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut nav = NavigationController::default();
        nav.drag_start();
        nav.drag(vec2(3.0, 3.0));
        nav.zoom(3.0, pos2(1.0, 1.0));
        nav.reset();
        assert_eq!(nav.transform(), ViewTransform::IDENTITY);
        assert_eq!(nav.state(), PanState::Idle);
    }

    #[test]
    fn wheel_factor_is_symmetric() {
        assert!((wheel_zoom_factor(120.0) * wheel_zoom_factor(-120.0) - 1.0).abs() < 1e-5);
        assert!(wheel_zoom_factor(50.0) > 1.0);
    }
}
