// ============================================================================
// APP - Shell that mounts routed views into the root element
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::{AppConfig, CallbackMode};
use crate::dom::{get_element_by_id, on_window_event, replace_children};
use crate::router::{
    BrowserNavigator, HistoryMode, NavigationEffect, NavigationOutcome, Navigator, RouteData,
    RouteTable, Router, View,
};
use crate::services::HttpSessionProbe;
use crate::viewmodels::{CallbackViewModel, MountToken};
use crate::views::{render_callback, render_login};

type AppRouter = Router<Rc<HttpSessionProbe>, BrowserNavigator>;

pub struct App {
    root: Element,
    config: AppConfig,
    probe: Rc<HttpSessionProbe>,
    router: AppRouter,
    mounted: RefCell<Option<MountToken>>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Rc<Self>, JsValue> {
        let root = get_element_by_id(&config.root_element_id).ok_or_else(|| {
            JsValue::from_str(&format!("No #{} element found", config.root_element_id))
        })?;

        let probe = Rc::new(HttpSessionProbe::from_config(&config));
        let router = Router::new(
            RouteTable::new(config.callback_mode),
            probe.clone(),
            Rc::new(BrowserNavigator),
            config.login_url(),
        );

        Ok(Rc::new(Self {
            root,
            config,
            probe,
            router,
            mounted: RefCell::new(None),
        }))
    }

    /// Routes the current location and follows back/forward navigation.
    pub fn start(self: &Rc<Self>) -> Result<(), JsValue> {
        let app = Rc::clone(self);
        on_window_event("popstate", move |_| {
            let path = app.router.navigator().current_path();
            app.navigate(path, HistoryMode::Keep);
        })?;

        let path = self.router.navigator().current_path();
        self.navigate(path, HistoryMode::Keep);
        Ok(())
    }

    pub fn navigate(self: &Rc<Self>, path: String, mode: HistoryMode) {
        let app = Rc::clone(self);
        spawn_local(async move {
            match app.router.navigate(&path, mode).await {
                NavigationOutcome::Mounted { view, data, .. } => {
                    if let Err(e) = app.mount(view, &data) {
                        log::error!("❌ [APP] Could not render {:?}: {:?}", view, e);
                    }
                }
                NavigationOutcome::Cancelled => {
                    log::info!("👋 [APP] Navigation to {} cancelled, leaving the app", path);
                }
                NavigationOutcome::RedirectLoop => {
                    log::error!("❌ [APP] Route table loops when resolving {}, nothing mounted", path);
                }
                NavigationOutcome::Superseded | NavigationOutcome::Halted => {}
            }
        });
    }

    fn mount(self: &Rc<Self>, view: View, data: &RouteData) -> Result<(), JsValue> {
        let token = self.replace_mount_token();
        match view {
            View::Login => {
                let navigator = Rc::clone(self.router.navigator());
                let login_url = self.router.auth().login_url().to_string();
                let page = render_login(move || {
                    navigator.apply(NavigationEffect::ExternalRedirect(login_url.clone()));
                })?;
                replace_children(&self.root, &page)
            }
            View::Callback => self.mount_callback(data, token),
        }
    }

    fn mount_callback(self: &Rc<Self>, data: &RouteData, token: MountToken) -> Result<(), JsValue> {
        let vm = Rc::new(RefCell::new(CallbackViewModel::new()));

        match self.config.callback_mode {
            CallbackMode::Resolved => {
                vm.borrow_mut().init_from_route(data);
                let page = render_callback(&vm.borrow())?;
                replace_children(&self.root, &page)
            }
            CallbackMode::SelfProbe => {
                let page = render_callback(&vm.borrow())?;
                replace_children(&self.root, &page)?;

                let app = Rc::clone(self);
                spawn_local(async move {
                    if !CallbackViewModel::load_with_probe(&vm, &app.probe, &token).await {
                        return;
                    }
                    let rendered = render_callback(&vm.borrow())
                        .and_then(|page| replace_children(&app.root, &page));
                    if let Err(e) = rendered {
                        log::error!("❌ [APP] Could not render callback: {:?}", e);
                    }
                });
                Ok(())
            }
        }
    }

    /// Marks the previous view as gone and hands out a token for the next.
    fn replace_mount_token(&self) -> MountToken {
        let token = MountToken::new();
        if let Some(previous) = self.mounted.borrow_mut().replace(token.clone()) {
            previous.unmount();
        }
        token
    }
}
