use std::time::Duration;

use eframe::egui::Vec2;

pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Single-slot deferred task. Scheduling while a task is pending replaces it,
/// so only the latest payload fires, `delay` after the last schedule.
/// Times are seconds on the caller's clock (egui's `InputState::time`).
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(f64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn schedule(&mut self, now: f64, payload: T) {
        self.pending = Some((now + self.delay.as_secs_f64(), payload));
    }

    /// Time left before the pending task is due.
    pub fn remaining(&self, now: f64) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(deadline, _)| Duration::from_secs_f64((deadline - now).max(0.0)))
    }

    pub fn poll(&mut self, now: f64) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(deadline, _)| now >= *deadline);
        if due {
            self.pending.take().map(|(_, payload)| payload)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Watches the available size and hands back a size to rebuild for once the
/// window has been still for the debounce window.
#[derive(Clone, Debug)]
pub struct ResizeCoordinator {
    observed: Option<Vec2>,
    debounce: Debouncer<Vec2>,
}

impl Default for ResizeCoordinator {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE)
    }
}

impl ResizeCoordinator {
    pub fn new(delay: Duration) -> Self {
        Self {
            observed: None,
            debounce: Debouncer::new(delay),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.observed.is_some()
    }

    /// Records the size used for the initial build.
    pub fn mount(&mut self, size: Vec2) {
        self.observed = Some(size);
        self.debounce.cancel();
    }

    pub fn observe(&mut self, size: Vec2, now: f64) {
        let changed = self
            .observed
            .is_none_or(|observed| (observed - size).length() > 0.5);
        if changed {
            self.observed = Some(size);
            self.debounce.schedule(now, size);
            tracing::trace!(width = size.x, height = size.y, "resize observed");
        }
    }

    pub fn poll(&mut self, now: f64) -> Option<Vec2> {
        self.debounce.poll(now)
    }

    pub fn remaining(&self, now: f64) -> Option<Duration> {
        self.debounce.remaining(now)
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    #[test]
    fn burst_collapses_to_one_fire() {
        let mut debouncer = Debouncer::new(RESIZE_DEBOUNCE);
        let mut fired = Vec::new();

        // 10 events inside 50ms
        for step in 0..10 {
            let now = 1.0 + step as f64 * 0.005;
            debouncer.schedule(now, step);
            if let Some(payload) = debouncer.poll(now) {
                fired.push(payload);
            }
        }
        let last = 1.0 + 9.0 * 0.005;

        assert_eq!(debouncer.poll(last + 0.199), None);
        if let Some(payload) = debouncer.poll(last + 0.2) {
            fired.push(payload);
        }
        assert_eq!(debouncer.poll(last + 1.0), None);
        assert_eq!(fired, vec![9]);
    }

    #[test]
    fn remaining_counts_down() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));
        assert_eq!(debouncer.remaining(0.0), None);
        debouncer.schedule(0.0, ());
        let remaining = debouncer.remaining(0.05).unwrap();
        assert!((remaining.as_secs_f64() - 0.15).abs() < 1e-9);
        assert_eq!(debouncer.remaining(5.0), Some(Duration::ZERO));
    }

    #[test]
    fn unchanged_size_schedules_nothing() {
        let mut resize = ResizeCoordinator::default();
        resize.mount(vec2(800.0, 600.0));
        resize.observe(vec2(800.0, 600.0), 0.0);
        assert_eq!(resize.remaining(0.0), None);
    }

    #[test]
    fn rebuild_uses_latest_size() {
        let mut resize = ResizeCoordinator::default();
        resize.mount(vec2(800.0, 600.0));

        resize.observe(vec2(810.0, 600.0), 0.00);
        resize.observe(vec2(820.0, 610.0), 0.02);
        resize.observe(vec2(900.0, 700.0), 0.04);

        assert_eq!(resize.poll(0.20), None);
        assert_eq!(resize.poll(0.25), Some(vec2(900.0, 700.0)));
        assert_eq!(resize.poll(0.50), None);
    }
}
