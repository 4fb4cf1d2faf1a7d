//! Expand/collapse state for the per-dimension detail panels.

use api::DimensionKey;

/// At most one dimension is expanded. Starts collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded(DimensionKey),
}

impl PanelState {
    /// Same key collapses; any other key switches directly to it.
    pub fn toggle(&mut self, key: DimensionKey) {
        *self = match *self {
            PanelState::Expanded(open) if open == key => PanelState::Collapsed,
            _ => PanelState::Expanded(key),
        };
    }

    pub fn expanded(&self) -> Option<DimensionKey> {
        match *self {
            PanelState::Collapsed => None,
            PanelState::Expanded(key) => Some(key),
        }
    }

    pub fn is_expanded(&self, key: DimensionKey) -> bool {
        self.expanded() == Some(key)
    }
}
