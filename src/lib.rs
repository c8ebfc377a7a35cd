// ============================================================================
// PEOPLE AGE FILTER - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Parseo, filtros y formato para las vistas
// - State: Store con Rc<RefCell> + notificaciones
// - Router: Tabla de rutas estática + History API
// - Models: Person y snapshot serializable
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod state;
pub mod utils;
pub mod viewmodels;
mod context;
mod dom;
mod views;
mod app;

use std::cell::{Cell, RefCell};
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::error::AppError;
use crate::router::{BrowserHistory, Route};

pub use crate::utils::format_with_spaces;

// Instancia global de App (un solo hilo en WASM)
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static RENDER_SCHEDULED: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 {} - Rust Puro + MVVM ({})", CONFIG.app_title, CONFIG.environment);

    let app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Back/forward: re-leer la URL y re-renderizar
    BrowserHistory::listen_popstate(|| {
        APP.with(|app_cell| {
            if let Some(ref app) = *app_cell.borrow() {
                app.router().sync_from_location();
            }
        });
        rerender_app();
    })?;

    Ok(())
}

/// Programar un re-render en el próximo tick
/// Varias mutaciones dentro del mismo handler producen un solo render
pub fn schedule_render() {
    if RENDER_SCHEDULED.with(|flag| flag.replace(true)) {
        return;
    }
    gloo_timers::callback::Timeout::new(0, || {
        RENDER_SCHEDULED.with(|flag| flag.set(false));
        rerender_app();
    })
    .forget();
}

/// Re-render completo inmediato
pub fn rerender_app() {
    APP.with(|app_cell| match *app_cell.borrow() {
        Some(ref app) => {
            if let Err(e) = app.render().map_err(AppError::from) {
                log::error!("❌ [RERENDER] Error re-renderizando: {}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

/// Navegar desde JavaScript con un path relativo a la base ("/person/2")
#[wasm_bindgen]
pub fn navigate(path: &str) -> Result<(), JsValue> {
    APP.with(|app_cell| match *app_cell.borrow() {
        Some(ref app) => {
            app.context().navigate(Route::resolve(path));
            Ok(())
        }
        None => Err(JsValue::from_str("App no está inicializada")),
    })
}

/// Snapshot JSON del store (debug desde la consola)
#[wasm_bindgen]
pub fn app_state_json() -> Result<String, JsValue> {
    APP.with(|app_cell| match *app_cell.borrow() {
        Some(ref app) => app
            .state()
            .to_json()
            .map_err(|e| JsValue::from_str(&format!("Error serializando estado: {}", e))),
        None => Err(JsValue::from_str("App no está inicializada")),
    })
}
