// ============================================================================
// ROUTES - Static route table and per-navigation route data
// ============================================================================

use std::collections::BTreeMap;

use crate::config::CallbackMode;
use crate::models::Session;

/// Route data key under which the auth resolver publishes the session.
pub const AUTH_DATA_KEY: &str = "auth";

/// Where unmatched paths are sent.
pub const FALLBACK_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Callback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolver {
    /// Session probe that redirects to the backend login on failure.
    Auth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// In-app redirect, the history entry gets replaced.
    Redirect(&'static str),
    View(View),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    /// Normalized path: no leading or trailing slash, `""` is the root.
    pub path: &'static str,
    pub target: RouteTarget,
    pub resolve: Vec<(&'static str, Resolver)>,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
}

impl RouteTable {
    /// `''` → `/login`, `login` → login view, `callback` → callback view.
    ///
    /// With [`CallbackMode::Resolved`] the callback route is gated by the
    /// auth resolver. In self-probe mode the view checks the session itself.
    pub fn new(mode: CallbackMode) -> Self {
        let callback_resolvers = match mode {
            CallbackMode::Resolved => vec![(AUTH_DATA_KEY, Resolver::Auth)],
            CallbackMode::SelfProbe => Vec::new(),
        };

        Self {
            routes: vec![
                RouteDef {
                    path: "",
                    target: RouteTarget::Redirect("/login"),
                    resolve: Vec::new(),
                },
                RouteDef {
                    path: "login",
                    target: RouteTarget::View(View::Login),
                    resolve: Vec::new(),
                },
                RouteDef {
                    path: "callback",
                    target: RouteTarget::View(View::Callback),
                    resolve: callback_resolvers,
                },
            ],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_routes(routes: Vec<RouteDef>) -> Self {
        Self { routes }
    }

    /// Full-match lookup after normalization.
    pub fn lookup(&self, path: &str) -> Option<&RouteDef> {
        let normalized = normalize_path(path);
        self.routes.iter().find(|route| route.path == normalized)
    }

    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }
}

/// Strips query string, fragment and surrounding slashes.
///
/// `"/callback/?code=abc"` becomes `"callback"`, `"/"` becomes `""`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].trim_matches('/')
}

/// Query string and fragment of `path`, including the leading `?` or `#`.
pub fn query_suffix(path: &str) -> &str {
    path.find(['?', '#']).map_or("", |start| &path[start..])
}

/// Values produced by a route's resolvers, keyed like the route declares.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteData {
    values: BTreeMap<&'static str, Session>,
}

impl RouteData {
    pub fn insert(&mut self, key: &'static str, session: Session) {
        self.values.insert(key, session);
    }

    pub fn get(&self, key: &str) -> Option<&Session> {
        self.values.get(key)
    }

    pub fn auth(&self) -> Option<&Session> {
        self.get(AUTH_DATA_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
