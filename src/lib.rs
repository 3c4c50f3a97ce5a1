// ============================================================================
// CALLBACK GATE - WASM frontend for the backend OAuth session flow
// ============================================================================
// - Router: route table + auth resolver guarding /callback
// - Services: HTTP only (session probe against /me)
// - ViewModels: view state, no DOM
// - Views: functions that build DOM from view state
// ============================================================================

pub mod config;
pub mod models;
pub mod router;
pub mod services;
pub mod viewmodels;

mod app;
mod dom;
mod views;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::router::HistoryMode;

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if let Some(level) = CONFIG.logger_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("🚀 Callback gate starting (callback mode: {})", CONFIG.callback_mode);

    let app = App::new(CONFIG.clone())?;
    app.start()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// In-app navigation, callable from JavaScript (`navigate_to("/callback")`).
#[wasm_bindgen]
pub fn navigate_to(path: &str) {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => app.navigate(path.to_string(), HistoryMode::Push),
        None => log::warn!("⚠️ [APP] navigate_to({}) before start", path),
    });
}
