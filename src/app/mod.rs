mod menu;
mod navigation;

pub use menu::MenuState;
pub use navigation::Navigable;

use crate::router::{NavigationRegistry, RouteTable, Screen};

/// Main application state: the active screen plus the menu selection state
/// while (and only while) the menu screen is mounted.
pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    registry: NavigationRegistry,
    routes: RouteTable,
    menu: Option<MenuState>,
}

impl App {
    /// Creates the app as a root visit: the route table's default redirect
    /// picks the first screen before anything is drawn.
    #[must_use]
    pub fn new(registry: NavigationRegistry, routes: RouteTable) -> Self {
        let mut app = Self {
            screen: Screen::Menu,
            should_quit: false,
            registry,
            routes,
            menu: None,
        };
        let initial = app.routes.initial_screen().unwrap_or(Screen::Menu);
        app.set_screen(initial);
        app
    }

    #[must_use]
    pub fn registry(&self) -> &NavigationRegistry {
        &self.registry
    }

    #[must_use]
    pub fn menu(&self) -> Option<&MenuState> {
        self.menu.as_ref()
    }

    /// Switches the visible screen to the one registered under `target`.
    /// An unregistered target is a wiring defect between registry and route
    /// table, not a runtime case: the emission is dropped.
    pub fn navigate(&mut self, target: &str) {
        if let Some(screen) = self.routes.resolve(target) {
            self.set_screen(screen);
        }
    }

    /// Commits the highlighted destination: reads its target and hands it
    /// to the route table. The highlight itself is left untouched.
    pub fn activate_current(&mut self) {
        let Some(menu) = &self.menu else {
            return;
        };
        let Some(target) = self
            .registry
            .get(menu.highlighted())
            .map(|destination| destination.target.clone())
        else {
            return;
        };
        self.navigate(&target);
    }

    /// Pointer choice of destination `index`: highlight and commit in one
    /// action. A rejected index means the click landed outside the list
    /// the menu is showing; the event is dropped with no state change.
    pub fn pointer_select(&mut self, index: usize) {
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        if menu.select_direct(index).is_err() {
            return;
        }
        self.activate_current();
    }

    pub fn highlight_next(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            menu.highlight_next();
        }
    }

    pub fn highlight_previous(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            menu.highlight_previous();
        }
    }

    /// Leaves a gameplay screen back to the main menu.
    pub fn return_to_menu(&mut self) {
        self.navigate("/menu");
    }

    /// Mounts and unmounts the menu selection state with the screen it
    /// belongs to, so a dismissed menu can never keep stale state.
    fn set_screen(&mut self, screen: Screen) {
        if screen != Screen::Menu {
            self.menu = None;
        } else if self.menu.is_none() {
            self.menu = Some(MenuState::new(&self.registry));
        }
        self.screen = screen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{blast_arena_routes, main_menu};

    fn game_app() -> App {
        App::new(main_menu().unwrap(), blast_arena_routes())
    }

    #[test]
    fn test_root_visit_lands_on_menu_without_input() {
        let app = game_app();
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.menu().unwrap().highlighted(), 0);
    }

    #[test]
    fn test_keyboard_walk_wraps_then_activates_first_entry() {
        let mut app = game_app();
        app.highlight_next();
        app.highlight_next();
        assert_eq!(app.menu().unwrap().highlighted(), 2);
        app.highlight_next();
        assert_eq!(app.menu().unwrap().highlighted(), 0);
        app.activate_current();
        assert_eq!(app.screen, Screen::FirstLevel);
    }

    #[test]
    fn test_pointer_choice_commits_immediately() {
        let mut app = game_app();
        app.pointer_select(1);
        assert_eq!(app.screen, Screen::Battle);
    }

    #[test]
    fn test_pointer_choice_out_of_range_is_dropped() {
        let mut app = game_app();
        app.highlight_next();
        app.pointer_select(7);
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.menu().unwrap().highlighted(), 1);
    }

    #[test]
    fn test_activation_does_not_move_highlight() {
        let mut app = game_app();
        app.highlight_next();
        app.activate_current();
        assert_eq!(app.screen, Screen::Battle);
        // Re-entering the menu mounts a fresh selection state.
        app.return_to_menu();
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.menu().unwrap().highlighted(), 0);
    }

    #[test]
    fn test_menu_state_unmounts_off_menu() {
        let mut app = game_app();
        app.navigate("/options");
        assert_eq!(app.screen, Screen::Options);
        assert!(app.menu().is_none());
        app.highlight_next(); // no menu mounted, must be a no-op
        app.pointer_select(0);
        assert_eq!(app.screen, Screen::Options);
    }

    #[test]
    fn test_unregistered_target_is_ignored() {
        let mut app = game_app();
        app.navigate("/no-such-screen");
        assert_eq!(app.screen, Screen::Menu);
        assert!(app.menu().is_some());
    }
}
