// ============================================================================
// ROUTER - Tabla de rutas estática + navegación por History API
// ============================================================================
// /               -> People
// /person/:id     -> PersonEdit { id }   (id opaco, sin validar)
// /settings       -> Settings
// cualquier otra  -> NotFound { path }
// ============================================================================

pub mod history;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

pub use history::{HistoryBackend, BrowserHistory, MemoryHistory};

/// Vista seleccionada por la URL actual
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    People,
    PersonEdit { id: String },
    Settings,
    NotFound { path: String },
}

impl Route {
    /// Resolver una ruta (relativa a la base) a su vista
    /// Segmentos estáticos sin distinguir mayúsculas, "/" final opcional
    pub fn resolve(path: &str) -> Route {
        let clean = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = clean.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::People,
            [s] if s.eq_ignore_ascii_case("settings") => Route::Settings,
            [p, id] if p.eq_ignore_ascii_case("person") => Route::PersonEdit { id: id.to_string() },
            // Siempre con "/" inicial: un path relativo rompería el pushState
            _ if clean.starts_with('/') => Route::NotFound { path: clean.to_string() },
            _ => Route::NotFound { path: format!("/{}", clean) },
        }
    }

    /// Nombre de la ruta
    pub fn name(&self) -> &'static str {
        match self {
            Route::People => "people",
            Route::PersonEdit { .. } => "person-edit",
            Route::Settings => "settings",
            Route::NotFound { .. } => "not-found",
        }
    }

    /// Path relativo a la base
    pub fn to_path(&self) -> String {
        match self {
            Route::People => "/".to_string(),
            Route::PersonEdit { id } => format!("/person/{}", id),
            Route::Settings => "/settings".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Path absoluto (con base) para usar en href/pushState
    pub fn href(&self, base_url: &str) -> String {
        join_base(base_url, &self.to_path())
    }

    pub fn person(id: u32) -> Route {
        Route::PersonEdit { id: id.to_string() }
    }
}

/// Quitar la base del pathname del navegador
pub fn strip_base(base_url: &str, pathname: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        return pathname.to_string();
    }
    match pathname.strip_prefix(base) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => pathname.to_string(),
    }
}

fn join_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        path.to_string()
    } else if path == "/" {
        format!("{}/", base)
    } else {
        format!("{}{}", base, path)
    }
}

/// Router: ruta actual + backend de historial
#[derive(Clone)]
pub struct Router {
    base_url: String,
    backend: Rc<dyn HistoryBackend>,
    current: Rc<RefCell<Route>>,
}

impl Router {
    pub fn new(base_url: &str, backend: Rc<dyn HistoryBackend>) -> Self {
        let route = Route::resolve(&strip_base(base_url, &backend.current_path()));
        log::info!("🧭 [ROUTER] Ruta inicial: {} ({})", route.name(), route.to_path());
        Self {
            base_url: base_url.to_string(),
            backend,
            current: Rc::new(RefCell::new(route)),
        }
    }

    /// Ruta activa
    pub fn current(&self) -> Route {
        self.current.borrow().clone()
    }

    pub fn href(&self, route: &Route) -> String {
        route.href(&self.base_url)
    }

    /// Navegar a una ruta (pushState). No re-renderiza: eso lo decide quien llama
    /// Devuelve false si ya estábamos en esa ruta
    pub fn navigate(&self, route: Route) -> Result<bool, JsValue> {
        if *self.current.borrow() == route {
            return Ok(false);
        }
        self.backend.push_path(&self.href(&route))?;
        log::info!("🧭 [ROUTER] Navegando a {} ({})", route.name(), route.to_path());
        *self.current.borrow_mut() = route;
        Ok(true)
    }

    /// Re-leer la ubicación (back/forward)
    pub fn sync_from_location(&self) -> Route {
        let route = Route::resolve(&strip_base(&self.base_url, &self.backend.current_path()));
        log::debug!("🧭 [ROUTER] popstate -> {}", route.name());
        *self.current.borrow_mut() = route.clone();
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_table() {
        assert_eq!(Route::resolve("/"), Route::People);
        assert_eq!(Route::resolve(""), Route::People);
        assert_eq!(Route::resolve("/settings"), Route::Settings);
        assert_eq!(Route::resolve("/person/42"), Route::PersonEdit { id: "42".to_string() });
    }

    #[test]
    fn test_resolve_lenient_forms() {
        assert_eq!(Route::resolve("/Settings/"), Route::Settings);
        assert_eq!(Route::resolve("/person/abc?x=1#top"), Route::PersonEdit { id: "abc".to_string() });
        assert_eq!(Route::resolve("/?tab=1"), Route::People);
    }

    #[test]
    fn test_resolve_unmatched() {
        assert_eq!(Route::resolve("/person"), Route::NotFound { path: "/person".to_string() });
        assert_eq!(Route::resolve("/person/1/extra"), Route::NotFound { path: "/person/1/extra".to_string() });
        assert_eq!(Route::resolve("/nope").name(), "not-found");
    }

    #[test]
    fn test_unmatched_relative_path_gets_leading_slash() {
        assert_eq!(Route::resolve("nope"), Route::NotFound { path: "/nope".to_string() });
        assert_eq!(Route::resolve("a/b?x=1"), Route::NotFound { path: "/a/b".to_string() });
        assert_eq!(Route::resolve("nope").href("/app"), "/app/nope");

        let history = Rc::new(MemoryHistory::new("/person/2"));
        let router = Router::new("/", history.clone());
        assert!(router.navigate(Route::resolve("nope")).unwrap());
        assert_eq!(history.current_path(), "/nope");
        assert_eq!(router.sync_from_location(), Route::NotFound { path: "/nope".to_string() });
    }

    #[test]
    fn test_to_path_resolves_back() {
        for route in [Route::People, Route::Settings, Route::person(7)] {
            assert_eq!(Route::resolve(&route.to_path()), route);
        }
    }

    #[test]
    fn test_base_handling() {
        assert_eq!(strip_base("/", "/settings"), "/settings");
        assert_eq!(strip_base("/app", "/app"), "/");
        assert_eq!(strip_base("/app", "/app/person/3"), "/person/3");
        assert_eq!(strip_base("/app", "/application"), "/application");
        assert_eq!(Route::Settings.href("/app"), "/app/settings");
        assert_eq!(Route::People.href("/app"), "/app/");
        assert_eq!(Route::People.href("/"), "/");
    }

    #[test]
    fn test_router_navigation() {
        let history = Rc::new(MemoryHistory::new("/app/person/2"));
        let router = Router::new("/app", history.clone());
        assert_eq!(router.current(), Route::person(2));

        assert!(router.navigate(Route::Settings).unwrap());
        assert!(!router.navigate(Route::Settings).unwrap());
        assert_eq!(history.current_path(), "/app/settings");

        assert!(router.navigate(Route::resolve("/")).unwrap());
        assert_eq!(history.entries(), vec!["/app/person/2", "/app/settings", "/app/"]);

        history.back();
        assert_eq!(router.sync_from_location(), Route::Settings);
        assert_eq!(router.current(), Route::Settings);
    }
}
