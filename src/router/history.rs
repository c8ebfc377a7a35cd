// ============================================================================
// HISTORY - Backends de historial (navegador y memoria)
// ============================================================================

use std::cell::{Cell, RefCell};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Trait común para el historial de navegación
pub trait HistoryBackend {
    /// Pathname actual (incluye la base)
    fn current_path(&self) -> String;

    /// Agregar entrada al historial
    fn push_path(&self, path: &str) -> Result<(), JsValue>;
}

thread_local! {
    // Flag para prevenir múltiples registros del listener global de popstate
    static POPSTATE_REGISTERED: Cell<bool> = const { Cell::new(false) };
}

/// Historial del navegador (History API)
#[derive(Default)]
pub struct BrowserHistory;

impl BrowserHistory {
    pub fn new() -> Self {
        Self
    }

    /// Escuchar back/forward. Solo se registra UNA VEZ por página
    pub fn listen_popstate<F>(handler: F) -> Result<(), JsValue>
    where
        F: Fn() + 'static,
    {
        if POPSTATE_REGISTERED.with(|flag| flag.replace(true)) {
            log::warn!("⚠️ [HISTORY] Listener popstate ya registrado, ignorando");
            return Ok(());
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
            handler();
        }) as Box<dyn FnMut(web_sys::PopStateEvent)>);
        window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        // Listener global registrado una sola vez: forget() no acumula closures
        closure.forget();
        log::info!("✅ [HISTORY] Listener popstate registrado");
        Ok(())
    }
}

impl HistoryBackend for BrowserHistory {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push_path(&self, path: &str) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(path))
    }
}

/// Historial en memoria (fuera del navegador)
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
}

impl MemoryHistory {
    pub fn new(initial_path: &str) -> Self {
        Self {
            entries: RefCell::new(vec![initial_path.to_string()]),
            index: Cell::new(0),
        }
    }

    /// Retroceder una entrada (como el botón "atrás")
    pub fn back(&self) -> bool {
        let index = self.index.get();
        if index == 0 {
            return false;
        }
        self.index.set(index - 1);
        true
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl HistoryBackend for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries.borrow()[self.index.get()].clone()
    }

    fn push_path(&self, path: &str) -> Result<(), JsValue> {
        let mut entries = self.entries.borrow_mut();
        // Igual que el navegador: push descarta las entradas "forward"
        entries.truncate(self.index.get() + 1);
        entries.push(path.to_string());
        self.index.set(entries.len() - 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_after_back_drops_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push_path("/settings").unwrap();
        history.push_path("/person/1").unwrap();
        assert!(history.back());
        history.push_path("/person/2").unwrap();

        assert_eq!(history.entries(), vec!["/", "/settings", "/person/2"]);
        assert_eq!(history.current_path(), "/person/2");
    }

    #[test]
    fn test_back_at_start() {
        let history = MemoryHistory::new("/");
        assert!(!history.back());
        assert_eq!(history.current_path(), "/");
    }
}
