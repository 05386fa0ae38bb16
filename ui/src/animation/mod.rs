//! Pure animation models. Components drive them from a frame timer
//! (see [`crate::core::timing`]); nothing here touches the DOM.

mod count_up;
mod fade;
mod slider;

pub use count_up::CountUp;
pub use fade::Fade;
pub use slider::SliderState;

/// One-shot guard: the first `try_start` wins, later calls are refused.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunOnce {
    started: bool,
}

impl RunOnce {
    pub fn try_start(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    pub fn has_run(&self) -> bool {
        self.started
    }
}
