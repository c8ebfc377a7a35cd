// ============================================================================
// APP - Controlador principal: dueño del estado y del router
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::context::ViewContext;
use crate::dom::{get_element_by_id, clear_children, append_child, release_listeners, set_document_title};
use crate::router::{BrowserHistory, Router};
use crate::state::AppState;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    ctx: ViewContext,
    root: Element,
}

impl App {
    /// Crear nueva aplicación (estado inicial + ruta actual del navegador)
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        let router = Router::new(&CONFIG.base_url, Rc::new(BrowserHistory::new()));

        // Cualquier cambio del store programa un re-render (batch por tick)
        state.subscribe_to_changes(crate::schedule_render);

        log::info!("✅ [APP] Estado inicial: {} personas", state.people_count());
        Ok(Self {
            ctx: ViewContext::new(state, router),
            root,
        })
    }

    /// Renderizar aplicación completa
    pub fn render(&self) -> Result<(), JsValue> {
        let route = self.ctx.router.current();
        log::debug!("🎬 [APP] render() ruta={}", route.name());

        let released = release_listeners();
        log::debug!("🧹 [APP] {} listeners liberados", released);
        clear_children(&self.root);
        let app_view = render_app(&self.ctx)?;
        append_child(&self.root, &app_view)?;

        set_document_title(&format!("{} · {}", CONFIG.app_title, route.name()));
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.ctx.state
    }

    pub fn router(&self) -> &Router {
        &self.ctx.router
    }

    pub fn context(&self) -> &ViewContext {
        &self.ctx
    }
}
