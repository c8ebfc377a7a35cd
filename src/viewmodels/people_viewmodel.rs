// ============================================================================
// PEOPLE VIEWMODEL - Lista filtrada por edad mínima
// ============================================================================
// Conversión horas <-> meses: responsabilidad de esta capa, no del store
// ============================================================================

use crate::config::CONFIG;
use crate::models::Person;
use crate::state::AppState;
use crate::utils::format_with_spaces;

pub fn months_from_hours(hours: u64, hours_per_month: u64) -> u64 {
    hours / hours_per_month.max(1)
}

pub fn hours_from_months(months: u32, hours_per_month: u64) -> u64 {
    (months as u64).saturating_mul(hours_per_month)
}

/// Siguiente id libre (max + 1). El store nunca genera ids
pub fn next_person_id(people: &[Person]) -> u32 {
    people
        .iter()
        .map(|p| p.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Fila lista para pintar
#[derive(Clone, Debug, PartialEq)]
pub struct PersonRow {
    pub id: u32,
    pub name: String,
    pub age_hours_label: String,
    pub age_months: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PeopleListViewModel {
    pub rows: Vec<PersonRow>,
    pub total: usize,
    pub minimum_age_in_months: u32,
    pub minimum_age_in_hours: u64,
    pub next_id: u32,
}

impl PeopleListViewModel {
    pub fn from_state(state: &AppState) -> Self {
        Self::build(&state.people(), state.minimum_age_in_months(), CONFIG.hours_per_month)
    }

    /// Una persona se muestra si su edad en horas alcanza el umbral convertido a horas
    pub fn build(people: &[Person], minimum_age_in_months: u32, hours_per_month: u64) -> Self {
        let minimum_age_in_hours = hours_from_months(minimum_age_in_months, hours_per_month);
        let rows = people
            .iter()
            .filter(|p| p.age_in_hours >= minimum_age_in_hours)
            .map(|p| PersonRow {
                id: p.id,
                name: p.name.clone(),
                age_hours_label: format_with_spaces(p.age_in_hours),
                age_months: months_from_hours(p.age_in_hours, hours_per_month),
            })
            .collect();

        Self {
            rows,
            total: people.len(),
            minimum_age_in_months,
            minimum_age_in_hours,
            next_id: next_person_id(people),
        }
    }

    pub fn shown(&self) -> usize {
        self.rows.len()
    }

    pub fn hidden(&self) -> usize {
        self.total - self.shown()
    }
}
