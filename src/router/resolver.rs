// ============================================================================
// AUTH RESOLVER - Gate on the callback route
// ============================================================================
// Probes the backend session before the callback view is entered. A failed
// probe leaves the SPA for the backend login page and the navigation is
// dropped. Once that redirect is issued nothing else happens in this page.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::Session;
use crate::router::navigator::{NavigationEffect, Navigator};
use crate::services::SessionProbe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Idle,
    Probing,
    Authorized,
    /// Terminal: the browser is navigating away.
    Redirecting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolveOutcome {
    Resolved(Session),
    /// Probe failed, the hard redirect has been issued.
    Redirected,
    /// A redirect was already issued earlier, nothing was done.
    Halted,
}

pub struct AuthResolver<P, N> {
    probe: P,
    navigator: Rc<N>,
    login_url: String,
    state: Cell<GuardState>,
}

impl<P: SessionProbe, N: Navigator> AuthResolver<P, N> {
    pub fn new(probe: P, navigator: Rc<N>, login_url: impl Into<String>) -> Self {
        Self {
            probe,
            navigator,
            login_url: login_url.into(),
            state: Cell::new(GuardState::Idle),
        }
    }

    pub fn state(&self) -> GuardState {
        self.state.get()
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    pub async fn resolve(&self) -> ResolveOutcome {
        if self.state.get() == GuardState::Redirecting {
            log::debug!("🔐 [GUARD] Redirect already in progress, skipping probe");
            return ResolveOutcome::Halted;
        }

        self.state.set(GuardState::Probing);
        let result = self.probe.probe().await;

        // Another invocation may have redirected while this probe was in flight
        if self.state.get() == GuardState::Redirecting {
            return ResolveOutcome::Halted;
        }

        match result {
            Ok(session) => {
                log::info!("🔐 [GUARD] Session valid, entering route");
                self.state.set(GuardState::Authorized);
                ResolveOutcome::Resolved(session)
            }
            Err(e) => {
                log::warn!("🔐 [GUARD] Not authenticated ({}), redirecting to {}", e, self.login_url);
                self.state.set(GuardState::Redirecting);
                self.navigator
                    .apply(NavigationEffect::ExternalRedirect(self.login_url.clone()));
                ResolveOutcome::Redirected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ProbeError;
    use crate::testing::{alice, RecordingNavigator, ScriptedProbe};
    use futures::executor::block_on;

    const LOGIN_URL: &str = "https://localhost:8000/login";

    fn resolver(
        probe: ScriptedProbe,
    ) -> (AuthResolver<Rc<ScriptedProbe>, RecordingNavigator>, Rc<ScriptedProbe>, Rc<RecordingNavigator>) {
        let probe = Rc::new(probe);
        let navigator = Rc::new(RecordingNavigator::default());
        let resolver = AuthResolver::new(probe.clone(), navigator.clone(), LOGIN_URL);
        (resolver, probe, navigator)
    }

    #[test]
    fn successful_probe_resolves_with_session() {
        let (resolver, probe, navigator) = resolver(ScriptedProbe::always(Ok(alice())));
        assert_eq!(resolver.state(), GuardState::Idle);

        let outcome = block_on(resolver.resolve());

        assert_eq!(outcome, ResolveOutcome::Resolved(alice()));
        assert_eq!(resolver.state(), GuardState::Authorized);
        assert_eq!(probe.calls(), 1);
        assert!(navigator.effects().is_empty());
    }

    #[test]
    fn rejected_probe_redirects_to_login() {
        let rejected = ProbeError::Rejected { status: 401, detail: Some("Not authenticated".to_string()) };
        let (resolver, _, navigator) = resolver(ScriptedProbe::always(Err(rejected)));

        let outcome = block_on(resolver.resolve());

        assert_eq!(outcome, ResolveOutcome::Redirected);
        assert_eq!(resolver.state(), GuardState::Redirecting);
        assert_eq!(
            navigator.effects(),
            vec![NavigationEffect::ExternalRedirect(LOGIN_URL.to_string())]
        );
    }

    #[test]
    fn redirect_is_issued_only_once() {
        let (resolver, probe, navigator) =
            resolver(ScriptedProbe::always(Err(ProbeError::Network("offline".to_string()))));

        assert_eq!(block_on(resolver.resolve()), ResolveOutcome::Redirected);
        assert_eq!(block_on(resolver.resolve()), ResolveOutcome::Halted);
        assert_eq!(block_on(resolver.resolve()), ResolveOutcome::Halted);

        assert_eq!(probe.calls(), 1);
        assert_eq!(navigator.external_redirects(), 1);
    }

    #[test]
    fn session_is_probed_fresh_on_every_navigation() {
        let (resolver, probe, _) = resolver(ScriptedProbe::always(Ok(alice())));

        block_on(resolver.resolve());
        block_on(resolver.resolve());

        assert_eq!(probe.calls(), 2);
        assert_eq!(resolver.state(), GuardState::Authorized);
    }

    #[test]
    fn session_expiring_between_navigations_redirects() {
        let (resolver, _, navigator) = resolver(ScriptedProbe::sequence(vec![
            Ok(alice()),
            Err(ProbeError::Rejected { status: 401, detail: Some("Token expired".to_string()) }),
        ]));

        assert!(matches!(block_on(resolver.resolve()), ResolveOutcome::Resolved(_)));
        assert_eq!(block_on(resolver.resolve()), ResolveOutcome::Redirected);
        assert_eq!(navigator.external_redirects(), 1);
    }
}
