/// Index bookkeeping for a rotating slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    index: usize,
    len: usize,
}

impl SliderState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`, clamped to the last slide.
    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap_around() {
        let mut s = SliderState::new(3);
        s.next();
        s.next();
        assert_eq!(s.index(), 2);
        s.next();
        assert_eq!(s.index(), 0);
        s.prev();
        assert_eq!(s.index(), 2);
    }

    #[test]
    fn go_to_clamps() {
        let mut s = SliderState::new(3);
        s.go_to(1);
        assert!(s.is_active(1));
        s.go_to(99);
        assert_eq!(s.index(), 2);
    }

    #[test]
    fn empty_slider_stays_put() {
        let mut s = SliderState::new(0);
        s.next();
        s.prev();
        s.go_to(4);
        assert_eq!(s.index(), 0);
        assert!(!s.is_active(0));
        assert!(s.is_empty());
    }
}
