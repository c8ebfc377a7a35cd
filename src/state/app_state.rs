// ============================================================================
// APP STATE - Estado de la aplicación (personas + umbral de edad)
// ============================================================================
// Un único dueño (App) y handles Rc clonados hacia las vistas.
// Sin validación ni detección de conflictos: la última escritura gana.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{Person, AppStateSnapshot, seed_people};
use crate::state::reactivity::{ReactiveState, Subscribers};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    people: ReactiveState<Vec<Person>>,
    minimum_age_in_months: ReactiveState<u32>,
    change_subscribers: Subscribers,
}

impl AppState {
    /// Crear estado con las personas de ejemplo y umbral 0
    pub fn new() -> Self {
        Self::with_people(seed_people(), 0)
    }

    pub fn with_people(people: Vec<Person>, minimum_age_in_months: u32) -> Self {
        let change_subscribers = Subscribers::new();
        Self {
            people: ReactiveState::with_subscribers(people, change_subscribers.clone()),
            minimum_age_in_months: ReactiveState::with_subscribers(
                minimum_age_in_months,
                change_subscribers.clone(),
            ),
            change_subscribers,
        }
    }

    /// Copia ordenada de las personas actuales
    pub fn people(&self) -> Vec<Person> {
        self.people.snapshot()
    }

    /// Handle compartido: quien lo guarde verá las mutaciones futuras
    pub fn people_handle(&self) -> Rc<RefCell<Vec<Person>>> {
        self.people.get()
    }

    pub fn people_count(&self) -> usize {
        self.people.borrow().len()
    }

    /// Buscar persona por id
    pub fn person(&self, id: u32) -> Option<Person> {
        self.people.borrow().iter().find(|p| p.id == id).cloned()
    }

    /// Agregar persona al final (no se comprueban ids duplicados)
    pub fn add_person(&self, person: Person) {
        log::info!("➕ [STORE] Agregando persona {} ({})", person.id, person.name);
        self.people.update(|people| people.push(person));
    }

    /// Reemplazar en su lugar la persona con el mismo id
    /// Devuelve false si no existe (y no notifica)
    pub fn update_person(&self, person: Person) -> bool {
        let exists = self.people.borrow().iter().any(|p| p.id == person.id);
        if !exists {
            log::warn!("⚠️ [STORE] Persona {} no existe, nada que actualizar", person.id);
            return false;
        }
        log::info!("✏️ [STORE] Actualizando persona {}", person.id);
        self.people.update(|people| {
            if let Some(slot) = people.iter_mut().find(|p| p.id == person.id) {
                *slot = person;
            }
        });
        true
    }

    /// Eliminar la primera persona con ese id
    pub fn remove_person(&self, id: u32) -> Option<Person> {
        let index = self.people.borrow().iter().position(|p| p.id == id)?;
        log::info!("🗑️ [STORE] Eliminando persona {}", id);
        Some(self.people.update(|people| people.remove(index)))
    }

    /// Reemplazar la lista completa
    pub fn set_people(&self, people: Vec<Person>) {
        log::info!("🔄 [STORE] Reemplazando lista ({} personas)", people.len());
        self.people.set(people);
    }

    pub fn minimum_age_in_months(&self) -> u32 {
        *self.minimum_age_in_months.borrow()
    }

    pub fn set_minimum_age_in_months(&self, months: u32) {
        log::info!("🎚️ [STORE] Edad mínima: {} meses", months);
        self.minimum_age_in_months.set(months);
    }

    /// Copia serializable del estado completo
    pub fn snapshot(&self) -> AppStateSnapshot {
        AppStateSnapshot {
            people: self.people(),
            minimum_age_in_months: self.minimum_age_in_months(),
        }
    }

    /// Snapshot en JSON ({ people, minimumAgeInMonths })
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }

    /// Suscribirse a cualquier cambio del estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.subscribe(callback);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting(state: &AppState) -> Rc<Cell<usize>> {
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        state.subscribe_to_changes(move || hits_clone.set(hits_clone.get() + 1));
        hits
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        let ids: Vec<u32> = state.people().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.minimum_age_in_months(), 0);
        assert_eq!(state.person(1).map(|p| p.name), Some("Alice".to_string()));
    }

    #[test]
    fn test_add_person_keeps_order() {
        let state = AppState::new();
        let before = state.people();
        let hits = counting(&state);

        state.add_person(Person::new(4, "Dana", 100));

        let after = state.people();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last(), Some(&Person::new(4, "Dana", 100)));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_handle_observes_mutations() {
        let state = AppState::new();
        let handle = state.people_handle();
        let view_copy = state.clone();

        view_copy.remove_person(2);

        assert_eq!(handle.borrow().len(), 2);
        assert!(state.person(2).is_none());
    }

    #[test]
    fn test_update_in_place() {
        let state = AppState::new();
        let hits = counting(&state);

        assert!(state.update_person(Person::new(2, "Robert", 1)));
        assert!(!state.update_person(Person::new(99, "Nobody", 1)));

        let names: Vec<String> = state.people().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Alice", "Robert", "Charlie"]);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_no_validation_on_write() {
        let state = AppState::new();
        state.add_person(Person::new(1, "", 0));
        assert_eq!(state.people_count(), 4);
        assert_eq!(state.remove_person(1).map(|p| p.name), Some("Alice".to_string()));
        assert_eq!(state.person(1).map(|p| p.name), Some(String::new()));
    }

    #[test]
    fn test_remove_missing() {
        let state = AppState::new();
        let hits = counting(&state);
        assert!(state.remove_person(42).is_none());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_threshold_and_snapshot() {
        let state = AppState::with_people(Vec::new(), 0);
        let hits = counting(&state);
        state.set_minimum_age_in_months(12);
        state.set_people(vec![Person::new(7, "Eve", 10)]);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.minimum_age_in_months, 12);
        assert_eq!(snapshot.people, vec![Person::new(7, "Eve", 10)]);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_to_json_shape() {
        let state = AppState::with_people(vec![Person::new(1, "Alice", 262_800)], 3);
        assert_eq!(
            state.to_json().unwrap(),
            r#"{"people":[{"id":1,"name":"Alice","ageInHours":262800}],"minimumAgeInMonths":3}"#
        );
    }
}
