// ============================================================================
// CALLBACK VIEW - Shows the session behind the current cookie
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::Session;
use crate::viewmodels::{CallbackDisplay, CallbackViewModel};

pub fn render_callback(vm: &CallbackViewModel) -> Result<Element, JsValue> {
    let body = match vm.display() {
        CallbackDisplay::Loading => ElementBuilder::new("p")?
            .class("callback-loading")
            .text("Checking your session…")
            .build(),
        CallbackDisplay::User(session) => render_session(session)?,
        CallbackDisplay::Error(message) => ElementBuilder::new("p")?
            .class("callback-error")
            .attr("role", "alert")?
            .text(message)
            .build(),
        CallbackDisplay::Empty => ElementBuilder::new("p")?
            .class("callback-empty")
            .text("No session information available.")
            .build(),
    };

    Ok(ElementBuilder::new("div")?
        .class("callback-screen")
        .child(body)?
        .build())
}

fn render_session(session: &Session) -> Result<Element, JsValue> {
    let greeting = match session.display_name() {
        Some(name) => format!("Signed in as {}", name),
        None => "Signed in".to_string(),
    };

    let mut rows = Vec::new();
    if let Some(email) = &session.email {
        rows.push(render_row("email", email)?);
    }
    for (key, value) in session.extra_fields() {
        rows.push(render_row(&key, &value)?);
    }

    Ok(ElementBuilder::new("section")?
        .class("callback-user")
        .child(ElementBuilder::new("h1")?.text(&greeting).build())?
        .child(ElementBuilder::new("dl")?.class("session-fields").children(rows)?.build())?
        .build())
}

fn render_row(key: &str, value: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("session-field")
        .child(ElementBuilder::new("dt")?.text(key).build())?
        .child(ElementBuilder::new("dd")?.text(value).build())
        .map(ElementBuilder::build)
}
