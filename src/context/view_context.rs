// ============================================================================
// VIEW CONTEXT - Lo que cada vista recibe: store + router
// ============================================================================

use crate::error::AppError;
use crate::router::{Route, Router};
use crate::state::AppState;

/// Handles compartidos (clonar es barato: todo va en Rc)
#[derive(Clone)]
pub struct ViewContext {
    pub state: AppState,
    pub router: Router,
}

impl ViewContext {
    pub fn new(state: AppState, router: Router) -> Self {
        Self { state, router }
    }

    /// Navegar y programar re-render si la ruta cambió
    pub fn navigate(&self, route: Route) {
        match self.router.navigate(route) {
            Ok(true) => crate::schedule_render(),
            Ok(false) => {}
            Err(e) => log::error!("❌ [NAV] Error en pushState: {}", AppError::from(e)),
        }
    }

    pub fn href(&self, route: &Route) -> String {
        self.router.href(route)
    }
}
