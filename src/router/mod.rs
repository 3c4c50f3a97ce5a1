// ============================================================================
// ROUTER MODULE - Client-side routing with a session gate on /callback
// ============================================================================

pub mod navigation;
pub mod navigator;
pub mod resolver;
pub mod route;

pub use navigation::{NavigationOutcome, Router};
pub use navigator::{BrowserNavigator, HistoryMode, NavigationEffect, Navigator};
pub use resolver::{AuthResolver, GuardState, ResolveOutcome};
pub use route::{RouteData, RouteTable, View, AUTH_DATA_KEY};
