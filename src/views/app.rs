// ============================================================================
// APP VIEW - Layout + vista de la ruta actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::context::ViewContext;
use crate::dom::{ElementBuilder, append_child};
use crate::router::Route;
use crate::views::shared::render_header;
use crate::views::{render_people_list, render_person_edit, render_settings, render_not_found};

/// Renderizar aplicación completa
pub fn render_app(ctx: &ViewContext) -> Result<Element, JsValue> {
    let route = ctx.router.current();

    let container = ElementBuilder::new("div")?
        .class(&format!("app-container route-{}", route.name()))
        .build();
    append_child(&container, &render_header(ctx)?)?;

    let main = ElementBuilder::new("main")?.class("app-main").build();
    let view = match &route {
        Route::People => render_people_list(ctx)?,
        Route::PersonEdit { id } => render_person_edit(ctx, id)?,
        Route::Settings => render_settings(ctx)?,
        Route::NotFound { path } => render_not_found(ctx, path)?,
    };
    append_child(&main, &view)?;
    append_child(&container, &main)?;

    Ok(container)
}
