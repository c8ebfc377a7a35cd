// ============================================================================
// HEADER - Título + navegación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::context::ViewContext;
use crate::dom::{ElementBuilder, append_child};
use crate::router::Route;
use crate::views::shared::render_link;

pub fn render_header(ctx: &ViewContext) -> Result<Element, JsValue> {
    let current = ctx.router.current();

    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(ElementBuilder::new("h1")?.text(&CONFIG.app_title).build())?
        .build();

    let nav = ElementBuilder::new("nav")?.class("app-nav").build();
    // PersonEdit cuelga de la lista de personas
    let people_active = matches!(current, Route::People | Route::PersonEdit { .. });
    let items = [
        (Route::People, "People", people_active),
        (Route::Settings, "Settings", current == Route::Settings),
    ];
    for (route, label, active) in items {
        let class = if active { "nav-link active" } else { "nav-link" };
        append_child(&nav, &render_link(ctx, route, label, class)?)?;
    }

    append_child(&header, &nav)?;
    Ok(header)
}
