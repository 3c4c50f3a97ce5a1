// ============================================================================
// NAVIGATOR - Host navigation effects (history API and hard redirects)
// ============================================================================

use wasm_bindgen::JsValue;

/// A navigation the router asks the host environment to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEffect {
    /// New history entry for an in-app route.
    Push(String),
    /// Rewrite the current history entry (in-app redirects).
    Replace(String),
    /// Leave the application: full browser navigation to another URL.
    ExternalRedirect(String),
}

/// How a navigation should touch the browser history once it succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
    /// The URL bar already shows the path (initial load, back/forward).
    Keep,
}

impl HistoryMode {
    pub fn effect_for(self, path: &str) -> Option<NavigationEffect> {
        match self {
            Self::Push => Some(NavigationEffect::Push(path.to_string())),
            Self::Replace => Some(NavigationEffect::Replace(path.to_string())),
            Self::Keep => None,
        }
    }
}

pub trait Navigator {
    /// Path (plus query) currently shown in the address bar.
    fn current_path(&self) -> String;

    fn apply(&self, effect: NavigationEffect);
}

/// Navigator backed by `window.history` and `window.location`.
#[derive(Debug, Clone, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    fn try_apply(&self, effect: &NavigationEffect) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        match effect {
            NavigationEffect::Push(path) => {
                window.history()?.push_state_with_url(&JsValue::NULL, "", Some(path.as_str()))
            }
            NavigationEffect::Replace(path) => {
                window.history()?.replace_state_with_url(&JsValue::NULL, "", Some(path.as_str()))
            }
            NavigationEffect::ExternalRedirect(url) => window.location().set_href(url),
        }
    }
}

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        let Some(window) = web_sys::window() else {
            return "/".to_string();
        };
        let location = window.location();
        let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        format!("{}{}", pathname, search)
    }

    fn apply(&self, effect: NavigationEffect) {
        if let NavigationEffect::ExternalRedirect(url) = &effect {
            log::info!("↪️ [NAV] Leaving the app for {}", url);
        }
        if let Err(e) = self.try_apply(&effect) {
            log::error!("❌ [NAV] Could not apply {:?}: {:?}", effect, e);
        }
    }
}
