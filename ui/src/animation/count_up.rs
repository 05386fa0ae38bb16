/// Count-up from zero to `target` over `duration_ms` with ease-out cubic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub target: f64,
    pub duration_ms: f64,
}

impl CountUp {
    pub const DEFAULT_DURATION_MS: f64 = 2000.0;

    pub fn new(target: f64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(0.0),
        }
    }

    /// Progress in `[0, 1]`; exactly 1 once the duration has elapsed.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return 1.0;
        }
        if elapsed_ms <= 0.0 || elapsed_ms.is_nan() {
            return 0.0;
        }
        let t = elapsed_ms / self.duration_ms;
        1.0 - (1.0 - t).powi(3)
    }

    /// Displayed value at `elapsed_ms`. Returns exactly `target` when finished.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.target;
        }
        let value = self.target * self.progress(elapsed_ms);
        // Clamp in whichever direction the target lies.
        if self.target >= 0.0 {
            value.clamp(0.0, self.target)
        } else {
            value.clamp(self.target, 0.0)
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}
