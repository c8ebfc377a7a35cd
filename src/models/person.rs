use serde::{Deserialize, Serialize};

/// Una persona registrada en la app
/// El `id` lo asigna quien crea el registro, nunca el store
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: u32,
    pub name: String,
    /// Edad expresada en horas
    pub age_in_hours: u64,
}

impl Person {
    pub fn new(id: u32, name: impl Into<String>, age_in_hours: u64) -> Self {
        Self {
            id,
            name: name.into(),
            age_in_hours,
        }
    }
}

/// Personas con las que arranca cada sesión
pub fn seed_people() -> Vec<Person> {
    vec![
        Person::new(1, "Alice", 262_800),
        Person::new(2, "Bob", 350_400),
        Person::new(3, "Charlie", 219_000),
    ]
}

/// Forma serializable del estado completo (snapshot para debug/export)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AppStateSnapshot {
    pub people: Vec<Person>,
    pub minimum_age_in_months: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_uses_camel_case_keys() {
        let json = serde_json::to_value(Person::new(1, "Alice", 262_800)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Alice", "ageInHours": 262800 }));
    }

    #[test]
    fn test_snapshot_from_json() {
        let snapshot: AppStateSnapshot = serde_json::from_str(
            r#"{"people":[{"id":2,"name":"Bob","ageInHours":350400}],"minimumAgeInMonths":6}"#,
        )
        .unwrap();
        assert_eq!(snapshot.people, vec![Person::new(2, "Bob", 350_400)]);
        assert_eq!(snapshot.minimum_age_in_months, 6);
    }

    #[test]
    fn test_seed_ids() {
        let ids: Vec<u32> = seed_people().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
