// ============================================================================
// LINK - <a href> con navegación client-side
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::context::ViewContext;
use crate::dom::ElementBuilder;
use crate::router::Route;

/// Renderizar link a una ruta
/// Click normal: pushState sin recargar. Ctrl/Cmd/Shift/botón medio: comportamiento nativo
pub fn render_link(ctx: &ViewContext, route: Route, label: &str, class: &str) -> Result<Element, JsValue> {
    let ctx_clone = ctx.clone();
    let target = route.clone();
    ElementBuilder::new("a")?
        .class(class)
        .attr("href", &ctx.href(&route))?
        .text(label)
        .on_click(move |e: MouseEvent| {
            if e.button() != 0 || e.ctrl_key() || e.meta_key() || e.shift_key() || e.alt_key() {
                return;
            }
            e.prevent_default();
            ctx_clone.navigate(target.clone());
        })
        .map(|b| b.build())
}
