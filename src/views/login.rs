// ============================================================================
// LOGIN VIEW - Static entry page
// ============================================================================
// Signing in happens on the backend: the button leaves the SPA for the
// backend login endpoint, which starts the OAuth authorize flow and comes
// back to /callback with a session cookie.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};

pub fn render_login<F>(on_sign_in: F) -> Result<Element, JsValue>
where
    F: Fn() + 'static,
{
    log::debug!("🎬 [LOGIN] render_login()");

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("h1")?.text("Welcome").build())?
        .child(
            ElementBuilder::new("p")?
                .text("Sign in with your organization account to continue.")
                .build(),
        )?
        .build();

    let button = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-login")
        .text("Sign in")
        .build();

    on_click(&button, move |e| {
        e.prevent_default();
        on_sign_in();
    })?;

    let container = ElementBuilder::new("div")?
        .class("login-container")
        .child(header)?
        .child(button)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(container)?
        .build())
}
