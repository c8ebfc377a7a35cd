// ============================================================================
// ERRORES - Solo en los bordes (parseo de formularios y DOM)
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Identificador de persona inválido: {0:?}")]
    InvalidPersonId(String),

    #[error("Persona {0} no encontrada")]
    PersonNotFound(u32),

    #[error("Valor numérico inválido para {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("El nombre no puede estar vacío")]
    EmptyName,

    #[error("Error DOM: {0}")]
    Dom(String),
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(AppError::PersonNotFound(9).to_string(), "Persona 9 no encontrada");
        let err = AppError::InvalidNumber { field: "ageInHours", value: "abc".to_string() };
        assert_eq!(err.to_string(), "Valor numérico inválido para ageInHours: \"abc\"");
    }

    #[test]
    fn test_dom_message() {
        let err = AppError::Dom("input #edit-person-age no encontrado".to_string());
        assert_eq!(err.to_string(), "Error DOM: input #edit-person-age no encontrado");
    }
}
