//! Menu selection state
//!
//! `MenuState` is the pure half of the menu: it tracks which destination is
//! highlighted and nothing else. Activation (turning the highlight into a
//! screen switch) lives on `App`, so the state machine here can be tested
//! without a route table in sight.

use crate::app::Navigable;
use crate::error::MenuError;
use crate::router::NavigationRegistry;

/// Highlight state for one mounted menu screen.
///
/// Created with the highlight on the first entry when the menu mounts and
/// dropped when the menu unmounts; the highlight never survives a visit.
/// Holds only an index and the entry count it was built against, never the
/// destinations themselves.
#[derive(Debug)]
pub struct MenuState {
    item_count: usize,
    highlighted: usize,
}

impl MenuState {
    /// Creates a fresh selection state against the given registry.
    #[must_use]
    pub fn new(registry: &NavigationRegistry) -> Self {
        Self {
            item_count: registry.len(),
            highlighted: 0,
        }
    }

    /// Moves the highlight straight to `index`, as a pointer choice does.
    ///
    /// An index outside the registry this state was built against is
    /// rejected rather than clamped — it means the event refers to a list
    /// the menu is not showing — and the highlight stays where it was.
    pub fn select_direct(&mut self, index: usize) -> Result<(), MenuError> {
        if index >= self.item_count {
            return Err(MenuError::IndexOutOfRange {
                index,
                len: self.item_count,
            });
        }
        self.highlighted = index;
        Ok(())
    }
}

impl Navigable for MenuState {
    fn item_count(&self) -> usize {
        self.item_count
    }

    fn highlighted(&self) -> usize {
        self.highlighted
    }

    fn set_highlighted(&mut self, index: usize) {
        self.highlighted = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Destination;

    fn registry_of(len: usize) -> NavigationRegistry {
        let items = (0..len)
            .map(|i| Destination::new(&format!("Entry {i}"), &format!("/entry-{i}")))
            .collect();
        NavigationRegistry::new(items).unwrap()
    }

    #[test]
    fn test_starts_on_first_entry() {
        let state = MenuState::new(&registry_of(3));
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..=5 {
            let registry = registry_of(len);
            for start in 0..len {
                let mut state = MenuState::new(&registry);
                state.select_direct(start).unwrap();
                for _ in 0..len {
                    state.highlight_next();
                }
                assert_eq!(state.highlighted(), start, "cycle of {len} from {start}");
            }
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        let registry = registry_of(4);
        for start in 0..4 {
            let mut state = MenuState::new(&registry);
            state.select_direct(start).unwrap();
            state.highlight_next();
            state.highlight_previous();
            assert_eq!(state.highlighted(), start);
        }
    }

    #[test]
    fn test_wraps_at_both_ends() {
        let mut state = MenuState::new(&registry_of(3));
        state.highlight_previous();
        assert_eq!(state.highlighted(), 2);
        state.highlight_next();
        assert_eq!(state.highlighted(), 0);
        state.select_direct(2).unwrap();
        state.highlight_next();
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn test_select_direct_in_range() {
        let mut state = MenuState::new(&registry_of(3));
        assert_eq!(state.select_direct(1), Ok(()));
        assert_eq!(state.highlighted(), 1);
    }

    #[test]
    fn test_select_direct_out_of_range_keeps_state() {
        let mut state = MenuState::new(&registry_of(3));
        state.select_direct(2).unwrap();
        assert_eq!(
            state.select_direct(3),
            Err(MenuError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(state.highlighted(), 2);
    }

    #[test]
    fn test_single_entry_menu_stays_put() {
        let mut state = MenuState::new(&registry_of(1));
        state.highlight_next();
        assert_eq!(state.highlighted(), 0);
        state.highlight_previous();
        assert_eq!(state.highlighted(), 0);
    }
}
