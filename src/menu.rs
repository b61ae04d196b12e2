#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Any link inside the menu closes it, whatever the current state.
    pub fn after_link_activated(self) -> Self {
        Self::Closed
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Open => "Close menu",
            Self::Closed => "Open menu",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Open => "✕",
            Self::Closed => "☰",
        }
    }
}
