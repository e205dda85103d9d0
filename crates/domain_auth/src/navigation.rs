//! Navigation targets requested by the core
//!
//! The core never renders anything; it only asks an external [`Navigator`]
//! to move to a surface, e.g. back to the login page after sign-out.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::identity::{Identity, Role};

/// Surfaces the core can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Landing,
    Login,
    AdminDashboard,
    UnderwriterDashboard,
}

impl Route {
    /// Path of the surface in the web client
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::AdminDashboard => "/admin/dashboard",
            Route::UnderwriterDashboard => "/underwriter/dashboard",
        }
    }

    /// Where a freshly signed-in identity lands
    pub fn home_for(identity: Option<&Identity>) -> Self {
        match identity.map(|i| i.role) {
            Some(Role::Admin) => Route::AdminDashboard,
            Some(Role::Underwriter) => Route::UnderwriterDashboard,
            None => Route::Landing,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Receives navigation requests from the core
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Ignores navigation requests
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _route: Route) {}
}

/// Logs navigation requests
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: Route) {
        info!(route = %route, "Navigation requested");
    }
}

/// Keeps every navigation request, for assertions and replay
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All routes requested so far, oldest first
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes.lock().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().push(route);
    }
}
