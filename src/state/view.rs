//! Browse / details view toggle

/// Which top-level view is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Hero, genre bar, grid and category rows
    #[default]
    Browse,
    /// Single movie with trailer reference
    Details,
}

/// What a navigation request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavChange {
    Entered(View),
    Unchanged,
}

/// Two-state navigator. Browse → Details on activation, Details → Browse on back.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewNavigator {
    view: View,
}

impl ViewNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_details(&self) -> bool {
        self.view == View::Details
    }

    /// A movie entry was activated
    pub fn open(&mut self) -> NavChange {
        match self.view {
            View::Browse => {
                self.view = View::Details;
                NavChange::Entered(View::Details)
            }
            View::Details => NavChange::Unchanged,
        }
    }

    /// Explicit back action
    pub fn back(&mut self) -> NavChange {
        match self.view {
            View::Details => {
                self.view = View::Browse;
                NavChange::Entered(View::Browse)
            }
            View::Browse => NavChange::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mut nav = ViewNavigator::new();
        assert_eq!(nav.view(), View::Browse);
        assert_eq!(nav.back(), NavChange::Unchanged);

        assert_eq!(nav.open(), NavChange::Entered(View::Details));
        assert_eq!(nav.open(), NavChange::Unchanged);

        assert_eq!(nav.back(), NavChange::Entered(View::Browse));
        assert!(!nav.is_details());
    }
}
