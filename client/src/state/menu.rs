#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Mobile navigation panel visibility.
///
/// Owned by a single `SiteLayout` and held in a component-local `RwSignal`;
/// it is never provided through context or persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force the panel closed. Called whenever a mobile link is activated.
    pub fn close(&mut self) {
        self.open = false;
    }
}
