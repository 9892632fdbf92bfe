//! Navigation guard.
//!
//! A stateless predicate over the route table and the persisted token.
//! The HTTP layer never navigates; it surfaces
//! [`ClientError::Unauthorized`] and whoever owns navigation asks
//! [`decision_for_error`] what to do.

use crate::error::ClientError;
use crate::storage::SessionStorage;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// A navigable route and its auth requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub requires_auth: bool,
}

/// The route table. Everything except login requires a session.
pub const ROUTES: &[Route] = &[
    Route { path: LOGIN_PATH, requires_auth: false },
    Route { path: HOME_PATH, requires_auth: true },
    Route { path: "/profile", requires_auth: true },
    Route { path: "/change-password", requires_auth: true },
    Route { path: "/teacher-management", requires_auth: true },
    Route { path: "/student-management", requires_auth: true },
    Route { path: "/academic-management", requires_auth: true },
    Route { path: "/college-management", requires_auth: true },
    Route { path: "/major-management", requires_auth: true },
];

pub fn find_route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDecision {
    Allow,
    RedirectLogin,
    RedirectHome,
}

/// Evaluate a navigation target against the persisted token.
pub fn guard(route: &Route, storage: &SessionStorage) -> NavDecision {
    let has_token = storage.token().is_some();
    if route.requires_auth && !has_token {
        NavDecision::RedirectLogin
    } else if route.path == LOGIN_PATH && has_token {
        NavDecision::RedirectHome
    } else {
        NavDecision::Allow
    }
}

/// Evaluate by path. Unknown paths fall through to login, matching the
/// catch-all route of the original table.
pub fn guard_path(path: &str, storage: &SessionStorage) -> NavDecision {
    match find_route(path) {
        Some(route) => guard(route, storage),
        None => NavDecision::RedirectLogin,
    }
}

/// Where a failed API call should send the user, if anywhere.
pub fn decision_for_error(error: &ClientError) -> Option<NavDecision> {
    error.is_unauthorized().then_some(NavDecision::RedirectLogin)
}
