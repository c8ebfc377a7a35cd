use serde::{Deserialize, Serialize};

/// Horas promedio por mes (24 * 365 / 12)
pub const DEFAULT_HOURS_PER_MONTH: u64 = 730;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_title: String,
    pub base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub hours_per_month: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: "People".to_string(),
            base_url: "/".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            hours_per_month: DEFAULT_HOURS_PER_MONTH,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("APP_TITLE"),
            option_env!("BASE_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
            option_env!("HOURS_PER_MONTH"),
        )
    }

    /// Construye la configuración a partir de valores crudos, con defaults para lo ausente o inválido
    fn from_values(
        app_title: Option<&str>,
        base_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        hours_per_month: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            app_title: app_title.map(str::to_string).unwrap_or(defaults.app_title),
            base_url: normalize_base_url(base_url.unwrap_or("/")),
            environment: environment.map(str::to_string).unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level.map(str::to_lowercase).unwrap_or(defaults.log_level),
            hours_per_month: hours_per_month
                .and_then(|v| v.parse().ok())
                .filter(|h: &u64| *h > 0)
                .unwrap_or(defaults.hours_per_month),
        }
    }

    /// Nivel de log efectivo para wasm_logger
    pub fn log_level(&self) -> log::Level {
        match self.log_level.as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// Base siempre con "/" inicial y sin "/" final (salvo la raíz)
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_missing() {
        let config = AppConfig::from_values(None, None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(None, None, None, Some("maybe"), Some("loud"), Some("0"));
        assert!(config.is_logging_enabled());
        assert_eq!(config.hours_per_month, DEFAULT_HOURS_PER_MONTH);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::from_values(
            Some("Gente"),
            Some("app/"),
            Some("production"),
            Some("false"),
            Some("DEBUG"),
            Some("720"),
        );
        assert_eq!(config.app_title, "Gente");
        assert_eq!(config.base_url, "/app");
        assert_eq!(config.environment, "production");
        assert!(!config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.hours_per_month, 720);
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("/"), "/");
        assert_eq!(normalize_base_url("/people/"), "/people");
    }
}
