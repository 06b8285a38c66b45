//! Navigation registry and route table
//!
//! The registry is what the main menu shows: an ordered list of selectable
//! destinations. The route table is what the application can display: a
//! mapping from route path to screen, with a default redirect for the root
//! path. Both are built once at bootstrap and never mutated.

use crate::error::MenuError;

/// One selectable menu entry: display text plus the route path the
/// dispatcher resolves when the entry is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub label: String,
    pub target: String,
}

impl Destination {
    pub fn new(label: &str, target: &str) -> Self {
        Self {
            label: label.to_string(),
            target: target.to_string(),
        }
    }
}

/// Ordered, read-only list of destinations. Insertion order defines both
/// the visual order and the wrap-around adjacency of the menu.
#[derive(Debug, Clone)]
pub struct NavigationRegistry {
    items: Vec<Destination>,
}

impl NavigationRegistry {
    /// Builds a registry, rejecting an empty destination list.
    pub fn new(items: Vec<Destination>) -> Result<Self, MenuError> {
        if items.is_empty() {
            return Err(MenuError::EmptyRegistry);
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // Ruled out at construction, kept for the conventional pair.
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[Destination] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Destination> {
        self.items.get(index)
    }
}

/// Screens the route table can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    FirstLevel,
    Battle,
    Options,
}

impl Screen {
    /// Title shown in the view header for this screen.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Menu => "Main Menu",
            Screen::FirstLevel => "Normal Game",
            Screen::Battle => "Battle Game",
            Screen::Options => "Options",
        }
    }
}

/// One route table entry.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub screen: Screen,
}

impl Route {
    pub fn new(path: &str, screen: Screen) -> Self {
        Self {
            path: path.to_string(),
            screen,
        }
    }
}

/// Immutable path-to-screen mapping with a default redirect for the root
/// visit. Constructed during bootstrap and moved into the app whole.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    default_redirect: String,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>, default_redirect: &str) -> Self {
        Self {
            routes,
            default_redirect: default_redirect.to_string(),
        }
    }

    /// Resolves a target path to its screen. `None` means the caller was
    /// handed a path the table never registered, which cannot happen when
    /// registry and table are built from the same bootstrap; callers drop
    /// it silently.
    #[must_use]
    pub fn resolve(&self, target: &str) -> Option<Screen> {
        self.routes
            .iter()
            .find(|route| route.path == target)
            .map(|route| route.screen)
    }

    /// Screen shown for a root visit with no explicit destination: the
    /// default redirect is applied before the first frame, one time, with
    /// no input event involved.
    #[must_use]
    pub fn initial_screen(&self) -> Option<Screen> {
        self.resolve(&self.default_redirect)
    }
}

/// The game's static route table: root redirects to the menu, every other
/// path hosts one screen.
#[must_use]
pub fn blast_arena_routes() -> RouteTable {
    RouteTable::new(
        vec![
            Route::new("/menu", Screen::Menu),
            Route::new("/first-level", Screen::FirstLevel),
            Route::new("/battle", Screen::Battle),
            Route::new("/options", Screen::Options),
        ],
        "/menu",
    )
}

/// The main menu's static destination list.
pub fn main_menu() -> Result<NavigationRegistry, MenuError> {
    NavigationRegistry::new(vec![
        Destination::new("Normal Game", "/first-level"),
        Destination::new("Battle Game", "/battle"),
        Destination::new("Options", "/options"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_rejected() {
        assert_eq!(
            NavigationRegistry::new(Vec::new()).unwrap_err(),
            MenuError::EmptyRegistry
        );
    }

    #[test]
    fn test_registry_preserves_order() {
        let registry = main_menu().unwrap();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(0).unwrap().label, "Normal Game");
        assert_eq!(registry.get(1).unwrap().target, "/battle");
        assert_eq!(registry.get(2).unwrap().label, "Options");
        assert!(registry.get(3).is_none());
    }

    #[test]
    fn test_resolve_registered_paths() {
        let routes = blast_arena_routes();
        assert_eq!(routes.resolve("/menu"), Some(Screen::Menu));
        assert_eq!(routes.resolve("/first-level"), Some(Screen::FirstLevel));
        assert_eq!(routes.resolve("/battle"), Some(Screen::Battle));
        assert_eq!(routes.resolve("/options"), Some(Screen::Options));
    }

    #[test]
    fn test_resolve_unregistered_path() {
        let routes = blast_arena_routes();
        assert_eq!(routes.resolve("/no-such-screen"), None);
    }

    #[test]
    fn test_root_visit_redirects_to_menu() {
        let routes = blast_arena_routes();
        assert_eq!(routes.initial_screen(), Some(Screen::Menu));
    }

    #[test]
    fn test_menu_targets_all_resolve() {
        let registry = main_menu().unwrap();
        let routes = blast_arena_routes();
        for destination in registry.items() {
            assert!(
                routes.resolve(&destination.target).is_some(),
                "unroutable menu target: {}",
                destination.target
            );
        }
    }
}
