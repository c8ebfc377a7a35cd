use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::context::ViewContext;
use crate::dom::ElementBuilder;
use crate::router::Route;
use crate::views::shared::render_link;

/// Ruta sin match
pub fn render_not_found(ctx: &ViewContext, path: &str) -> Result<Element, JsValue> {
    log::warn!("⚠️ [VIEW] Ruta sin match: {}", path);
    Ok(ElementBuilder::new("section")?
        .class("not-found")
        .child(ElementBuilder::new("h2")?.text("Page not found").build())?
        .child(ElementBuilder::new("p")?.text(&format!("No page at \"{}\".", path)).build())?
        .child(render_link(ctx, Route::People, "Back to people", "btn-back")?)?
        .build())
}
