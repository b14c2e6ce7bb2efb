//! Mobile navigation menu state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

pub const CLOSED_LABEL: &str = "☰";
pub const OPEN_LABEL: &str = "✕";

/// Whether the mobile menu panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    /// Derive state from the panel's active-class presence.
    #[must_use]
    pub fn from_active(active: bool) -> Self {
        if active { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Value for the button's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        match self {
            Self::Open => "true",
            Self::Closed => "false",
        }
    }

    /// Glyph shown on the menu button.
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Open => OPEN_LABEL,
            Self::Closed => CLOSED_LABEL,
        }
    }
}

/// Open/close toggle driven by the menu button and panel links.
#[derive(Clone, Debug, Default)]
pub struct MenuToggle {
    state: MenuState,
}

impl MenuToggle {
    #[must_use]
    pub fn new(state: MenuState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Flip between open and closed, returning the new state.
    pub fn toggle(&mut self) -> MenuState {
        self.state = match self.state {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        self.state
    }

    /// Close the menu (a panel link was followed).
    pub fn close(&mut self) -> MenuState {
        self.state = MenuState::Closed;
        self.state
    }
}
