// ============================================================================
// CONFIG - Compile-time configuration (populated by build.rs from .env)
// ============================================================================

use std::fmt;
use std::str::FromStr;

/// Which callback view design is active.
///
/// `Resolved` puts the auth resolver in front of `/callback` and the view
/// reads the session from route data. `SelfProbe` leaves the route open and
/// the view issues its own probe, rendering an error instead of redirecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallbackMode {
    #[default]
    Resolved,
    SelfProbe,
}

impl FromStr for CallbackMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "resolved" => Ok(Self::Resolved),
            "self-probe" | "self_probe" | "selfprobe" => Ok(Self::SelfProbe),
            other => Err(format!("unknown callback mode: {}", other)),
        }
    }
}

impl fmt::Display for CallbackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved => f.write_str("resolved"),
            Self::SelfProbe => f.write_str("self-probe"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub identity_path: String,
    pub login_path: String,
    pub probe_timeout_seconds: u32,
    pub callback_mode: CallbackMode,
    pub enable_logging: bool,
    pub log_level: String,
    pub root_element_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "https://localhost:8000".to_string(),
            identity_path: "/me".to_string(),
            login_path: "/login".to_string(),
            probe_timeout_seconds: 10,
            callback_mode: CallbackMode::Resolved,
            enable_logging: true,
            log_level: "info".to_string(),
            root_element_id: "app".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration baked in at compile time.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url),
            identity_path: option_env!("IDENTITY_PATH")
                .map(str::to_string)
                .unwrap_or(defaults.identity_path),
            login_path: option_env!("LOGIN_PATH")
                .map(str::to_string)
                .unwrap_or(defaults.login_path),
            probe_timeout_seconds: option_env!("PROBE_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.probe_timeout_seconds),
            callback_mode: option_env!("CALLBACK_MODE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.callback_mode),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            root_element_id: option_env!("ROOT_ELEMENT_ID")
                .map(str::to_string)
                .unwrap_or(defaults.root_element_id),
        }
    }

    /// Full URL of the identity (`/me`) endpoint.
    pub fn identity_url(&self) -> String {
        join_url(&self.backend_url, &self.identity_path)
    }

    /// Full URL of the backend login endpoint (hard redirect target).
    pub fn login_url(&self) -> String {
        join_url(&self.backend_url, &self.login_path)
    }

    pub fn probe_timeout_ms(&self) -> u32 {
        self.probe_timeout_seconds.saturating_mul(1000)
    }

    /// Log level for wasm-logger, `None` when logging is disabled.
    pub fn logger_level(&self) -> Option<log::Level> {
        if !self.enable_logging {
            return None;
        }
        Some(self.log_level.parse().unwrap_or(log::Level::Info))
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_point_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.identity_url(), "https://localhost:8000/me");
        assert_eq!(config.login_url(), "https://localhost:8000/login");
    }

    #[test]
    fn join_url_tolerates_slashes_on_both_sides() {
        let config = AppConfig {
            backend_url: "https://auth.example.com/".to_string(),
            identity_path: "me".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.identity_url(), "https://auth.example.com/me");
    }

    #[test]
    fn callback_mode_parses_known_values() {
        assert_eq!("resolved".parse::<CallbackMode>(), Ok(CallbackMode::Resolved));
        assert_eq!("Self-Probe".parse::<CallbackMode>(), Ok(CallbackMode::SelfProbe));
        assert!("both".parse::<CallbackMode>().is_err());
    }

    #[test]
    fn disabled_logging_has_no_level() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert_eq!(config.logger_level(), None);

        let verbose = AppConfig {
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(verbose.logger_level(), Some(log::Level::Debug));
    }

    #[test]
    fn timeout_is_converted_to_milliseconds() {
        let config = AppConfig {
            probe_timeout_seconds: 3,
            ..AppConfig::default()
        };
        assert_eq!(config.probe_timeout_ms(), 3000);
    }
}
