//! # Navigation State
//!
//! The path the shell was last sent to and the route it matched.
//!
//! An unmatched path is a valid state: the header and overlay still render,
//! but no page does.

use storefront_core::Route;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct NavigationState {
    path: String,
    route: Option<Route>,
}

impl NavigationState {
    pub fn new(start_path: &str) -> Self {
        let mut nav = NavigationState {
            path: String::new(),
            route: None,
        };
        nav.navigate(start_path);
        nav
    }

    /// Moves to `path` and returns the matched route, if any.
    pub fn navigate(&mut self, path: &str) -> Option<&Route> {
        self.path = path.to_string();
        self.route = match Route::parse(path) {
            Ok(route) => Some(route),
            Err(e) => {
                warn!(path = %path, "{}", e);
                None
            }
        };
        self.route.as_ref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }
}
