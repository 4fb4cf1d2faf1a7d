//! Single-target hover tracking for chart elements.

/// At most one hovered index. Hover is presentation state only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered element `index`; replaces any previous hover.
    pub fn enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Pointer left element `index`. A stale leave from a different element
    /// (events can arrive after the next enter) is ignored.
    pub fn leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    /// Pointer left the whole chart. Drops a hover whose own leave was lost.
    pub fn clear(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }
}
