//! Route classification.
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Ordered scan, first match wins: control, then api
//! - Explicit `NotFound` rather than a silent default

use crate::routing::matcher::{ExactPathMatcher, Matcher, PathPrefixMatcher};

/// Path of the control endpoint (exact match).
pub const CONTROL_PATH: &str = "/control/toggle";

/// Prefix of the API endpoint.
pub const API_PREFIX: &str = "/api";

/// The handler a request is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Control,
    Api,
    NotFound,
}

/// Classifies request paths into routes.
#[derive(Debug)]
pub struct Router {
    routes: Vec<(Box<dyn Matcher>, Route)>,
}

impl Router {
    /// Build a router for the given control path and API prefix.
    pub fn new(control_path: impl Into<String>, api_prefix: impl Into<String>) -> Self {
        Self {
            routes: vec![
                (Box::new(ExactPathMatcher::new(control_path)), Route::Control),
                (Box::new(PathPrefixMatcher::new(api_prefix)), Route::Api),
            ],
        }
    }

    /// Find the route for a path. Never fails: unmatched paths are `NotFound`.
    pub fn classify(&self, path: &str) -> Route {
        self.routes
            .iter()
            .find(|(matcher, _)| matcher.matches(path))
            .map(|(_, route)| *route)
            .unwrap_or(Route::NotFound)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(CONTROL_PATH, API_PREFIX)
    }
}
