/// Timer-driven opacity ramp: transparent for `delay_ms`, then linear to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl Fade {
    pub fn new(delay_ms: f64, duration_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            duration_ms: duration_ms.max(0.0),
        }
    }

    pub fn opacity_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return 1.0;
        }
        let since_start = elapsed_ms - self.delay_ms;
        if since_start <= 0.0 || since_start.is_nan() {
            return 0.0;
        }
        (since_start / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.delay_ms + self.duration_ms
    }
}
