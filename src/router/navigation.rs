// ============================================================================
// ROUTER - Path → route → resolvers → view
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::router::navigator::{HistoryMode, Navigator};
use crate::router::resolver::{AuthResolver, ResolveOutcome};
use crate::router::route::{
    normalize_path, query_suffix, Resolver, RouteData, RouteTable, RouteTarget, View, FALLBACK_PATH,
};
use crate::services::SessionProbe;

const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    /// The view should be mounted with the resolved data.
    Mounted { path: String, view: View, data: RouteData },
    /// A resolver sent the browser away from the app.
    Cancelled,
    /// A newer navigation started while this one was resolving.
    Superseded,
    /// The guard already redirected, the page is going away.
    Halted,
    /// In-app redirects never reached a view.
    RedirectLoop,
}

pub struct Router<P, N> {
    table: RouteTable,
    navigator: Rc<N>,
    auth: AuthResolver<P, N>,
    current: Cell<u64>,
}

impl<P: SessionProbe, N: Navigator> Router<P, N> {
    pub fn new(table: RouteTable, probe: P, navigator: Rc<N>, login_url: impl Into<String>) -> Self {
        let auth = AuthResolver::new(probe, navigator.clone(), login_url);
        Self {
            table,
            navigator,
            auth,
            current: Cell::new(0),
        }
    }

    pub fn navigator(&self) -> &Rc<N> {
        &self.navigator
    }

    pub fn auth(&self) -> &AuthResolver<P, N> {
        &self.auth
    }

    /// Runs a navigation to `path` and reports what the shell should do.
    ///
    /// History is only touched when the navigation ends on a view and is
    /// still the latest one.
    pub async fn navigate(&self, path: &str, mode: HistoryMode) -> NavigationOutcome {
        let id = self.current.get() + 1;
        self.current.set(id);

        let mut mode = mode;
        let mut target = path.to_string();
        // Only the requested path keeps its query, redirect targets do not
        let mut suffix = query_suffix(path).to_string();

        for _ in 0..=MAX_REDIRECTS {
            let route = match self.table.lookup(&target) {
                Some(route) => route,
                None => {
                    log::warn!("🧭 [ROUTER] No route for '{}', falling back to {}", target, FALLBACK_PATH);
                    target = FALLBACK_PATH.to_string();
                    suffix.clear();
                    mode = HistoryMode::Replace;
                    continue;
                }
            };

            let view = match route.target {
                RouteTarget::Redirect(to) => {
                    log::debug!("🧭 [ROUTER] '{}' redirects to {}", target, to);
                    target = to.to_string();
                    suffix.clear();
                    mode = HistoryMode::Replace;
                    continue;
                }
                RouteTarget::View(view) => view,
            };

            let mut data = RouteData::default();
            for (key, resolver) in &route.resolve {
                match resolver {
                    Resolver::Auth => match self.auth.resolve().await {
                        ResolveOutcome::Resolved(session) => data.insert(*key, session),
                        ResolveOutcome::Redirected => return NavigationOutcome::Cancelled,
                        ResolveOutcome::Halted => return NavigationOutcome::Halted,
                    },
                }
            }

            if self.current.get() != id {
                log::debug!("🧭 [ROUTER] Navigation to '{}' superseded", target);
                return NavigationOutcome::Superseded;
            }

            let path = format!("/{}{}", normalize_path(&target), suffix);
            if let Some(effect) = mode.effect_for(&path) {
                self.navigator.apply(effect);
            }

            log::info!("🧭 [ROUTER] Entering {:?} at {}", view, path);
            return NavigationOutcome::Mounted { path, view, data };
        }

        log::error!("🧭 [ROUTER] Redirect loop starting at '{}'", path);
        NavigationOutcome::RedirectLoop
    }
}
