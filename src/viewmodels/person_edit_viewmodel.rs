// ============================================================================
// PERSON EDIT VIEWMODEL - Parseo de formularios de persona
// ============================================================================
// Devuelve valores; las vistas deciden qué escribir en el store
// ============================================================================

use crate::error::AppError;
use crate::models::Person;
use crate::state::AppState;

/// Datos de un formulario ya parseado (sin id)
#[derive(Clone, Debug, PartialEq)]
pub struct PersonDraft {
    pub name: String,
    pub age_in_hours: u64,
}

impl PersonDraft {
    pub fn into_person(self, id: u32) -> Person {
        Person::new(id, self.name, self.age_in_hours)
    }
}

/// Parsear un número entero sin signo ignorando espacios ("262 800" vale)
pub fn parse_unsigned<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, AppError> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    compact.parse::<T>().map_err(|_| AppError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Parsear formulario (nombre + edad en horas)
pub fn parse_person_form(name: &str, age_text: &str) -> Result<PersonDraft, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::EmptyName);
    }
    let age_in_hours = parse_unsigned::<u64>("ageInHours", age_text)?;
    Ok(PersonDraft {
        name: name.to_string(),
        age_in_hours,
    })
}

/// Parsear el parámetro :id de la ruta
pub fn parse_person_id(raw: &str) -> Result<u32, AppError> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidPersonId(raw.to_string())),
    }
}

/// Estado de la pantalla de edición
#[derive(Clone, Debug, PartialEq)]
pub struct PersonEditViewModel {
    pub person: Person,
}

impl PersonEditViewModel {
    /// Cargar la persona indicada por el parámetro de ruta
    pub fn load(state: &AppState, raw_id: &str) -> Result<Self, AppError> {
        let id = parse_person_id(raw_id)?;
        let person = state.person(id).ok_or(AppError::PersonNotFound(id))?;
        Ok(Self { person })
    }

    /// Aplicar el formulario al store. Nada se escribe si el parseo falla
    pub fn save(&self, state: &AppState, name: &str, age_text: &str) -> Result<Person, AppError> {
        let updated = parse_person_form(name, age_text)?.into_person(self.person.id);
        if !state.update_person(updated.clone()) {
            return Err(AppError::PersonNotFound(self.person.id));
        }
        Ok(updated)
    }

    pub fn delete(&self, state: &AppState) -> Result<Person, AppError> {
        state
            .remove_person(self.person.id)
            .ok_or(AppError::PersonNotFound(self.person.id))
    }
}
