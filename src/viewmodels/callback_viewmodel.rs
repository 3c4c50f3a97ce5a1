// ============================================================================
// CALLBACK VIEWMODEL - State behind the /callback page
// ============================================================================
// Two ways to get the session, only one is active (see CallbackMode):
// - read it from the route data filled in by the auth resolver
// - probe the backend itself and show an error instead of redirecting
// ============================================================================

use std::cell::RefCell;

use crate::models::Session;
use crate::router::RouteData;
use crate::services::{ProbeError, SessionProbe};
use crate::viewmodels::lifecycle::MountToken;

/// What the callback page should show right now.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackDisplay<'a> {
    Loading,
    User(&'a Session),
    Error(&'a str),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallbackViewModel {
    pub user: Option<Session>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CallbackViewModel {
    pub fn new() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }

    /// Reads the session the auth resolver attached to the route.
    pub fn init_from_route(&mut self, data: &RouteData) {
        if let Some(session) = data.auth() {
            self.user = Some(session.clone());
        }
        self.loading = false;
    }

    pub fn apply_probe_result(&mut self, result: Result<Session, ProbeError>) {
        match result {
            Ok(session) => {
                self.user = Some(session);
                self.error = None;
            }
            Err(e) => {
                log::error!("❌ [CALLBACK] Session check failed: {}", e);
                self.error = Some(e.user_message().to_string());
            }
        }
        self.loading = false;
    }

    /// Probes the session and stores the result, unless the view has been
    /// unmounted in the meantime. Returns whether the state changed.
    pub async fn load_with_probe<P: SessionProbe>(
        cell: &RefCell<Self>,
        probe: &P,
        token: &MountToken,
    ) -> bool {
        let result = probe.probe().await;
        if !token.is_mounted() {
            log::debug!("🗑️ [CALLBACK] View gone before the probe answered, dropping result");
            return false;
        }
        cell.borrow_mut().apply_probe_result(result);
        true
    }

    pub fn display(&self) -> CallbackDisplay<'_> {
        if self.loading {
            return CallbackDisplay::Loading;
        }
        if let Some(session) = &self.user {
            return CallbackDisplay::User(session);
        }
        match &self.error {
            Some(message) => CallbackDisplay::Error(message),
            None => CallbackDisplay::Empty,
        }
    }
}

impl Default for CallbackViewModel {
    fn default() -> Self {
        Self::new()
    }
}
