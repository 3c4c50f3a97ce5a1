// ============================================================================
// SESSION PROBE - Credentialed GET against the identity endpoint
// ============================================================================
// Only talks HTTP. Deciding what a failure means (redirect, error message)
// is up to the caller.
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::RequestCredentials;

use crate::config::AppConfig;
use crate::models::{ErrorDetail, Session};
use crate::services::error::ProbeError;

/// Checks whether the browser currently holds a valid backend session.
#[allow(async_fn_in_trait)]
pub trait SessionProbe {
    async fn probe(&self) -> Result<Session, ProbeError>;
}

impl<P: SessionProbe> SessionProbe for Rc<P> {
    async fn probe(&self) -> Result<Session, ProbeError> {
        (**self).probe().await
    }
}

/// Probe backed by `fetch`, sending cookies along (`credentials: include`).
#[derive(Debug, Clone)]
pub struct HttpSessionProbe {
    url: String,
    timeout_ms: u32,
}

impl HttpSessionProbe {
    pub fn new(url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            url: url.into(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.identity_url(), config.probe_timeout_ms())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SessionProbe for HttpSessionProbe {
    async fn probe(&self) -> Result<Session, ProbeError> {
        log::debug!("🔍 [PROBE] GET {}", self.url);

        let fetch = async {
            let response = Request::get(&self.url)
                .credentials(RequestCredentials::Include)
                .header("Accept", "application/json")
                .send()
                .await?;
            let body = response.text().await?;
            Ok::<_, gloo_net::Error>((response.status(), response.ok(), body))
        };

        let (status, ok, body) = within_deadline(fetch, TimeoutFuture::new(self.timeout_ms), self.timeout_ms)
            .await?
            .map_err(|e| ProbeError::Network(e.to_string()))?;

        let session = classify_response(status, ok, &body)?;
        log::info!("✅ [PROBE] Session active for {}", session.display_name().unwrap_or("<anonymous>"));
        Ok(session)
    }
}

/// Resolves `request` unless `deadline` fires first.
async fn within_deadline<F, D>(request: F, deadline: D, timeout_ms: u32) -> Result<F::Output, ProbeError>
where
    F: Future,
    D: Future<Output = ()>,
{
    match future::select(Box::pin(request), Box::pin(deadline)).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ProbeError::Timeout(timeout_ms)),
    }
}

/// Maps a finished `/me` response to a session or a probe failure.
///
/// Any 2xx JSON object is a session. Non-2xx bodies are only inspected for
/// the backend's `{"detail": ...}` message.
fn classify_response(status: u16, ok: bool, body: &str) -> Result<Session, ProbeError> {
    if !ok {
        let detail = serde_json::from_str::<ErrorDetail>(body).ok().map(|body| body.detail);
        return Err(ProbeError::Rejected { status, detail });
    }
    serde_json::from_str::<Session>(body).map_err(|e| ProbeError::Decode(e.to_string()))
}
