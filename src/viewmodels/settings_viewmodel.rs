// ============================================================================
// SETTINGS VIEWMODEL - Umbral de edad mínima
// ============================================================================

use crate::config::CONFIG;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::format_with_spaces;
use crate::viewmodels::people_viewmodel::hours_from_months;
use crate::viewmodels::person_edit_viewmodel::parse_unsigned;

/// Parsear el input del umbral (vacío = 0)
pub fn parse_threshold(raw: &str) -> Result<u32, AppError> {
    if raw.trim().is_empty() {
        return Ok(0);
    }
    parse_unsigned::<u32>("minimumAgeInMonths", raw)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SettingsViewModel {
    pub minimum_age_in_months: u32,
    /// Umbral equivalente en horas, ya formateado
    pub minimum_age_hours_label: String,
}

impl SettingsViewModel {
    pub fn from_state(state: &AppState) -> Self {
        Self::build(state.minimum_age_in_months(), CONFIG.hours_per_month)
    }

    pub fn build(minimum_age_in_months: u32, hours_per_month: u64) -> Self {
        Self {
            minimum_age_in_months,
            minimum_age_hours_label: format_with_spaces(hours_from_months(
                minimum_age_in_months,
                hours_per_month,
            )),
        }
    }

    /// Aplicar el input al store; con error no se escribe nada
    pub fn apply(state: &AppState, raw: &str) -> Result<u32, AppError> {
        let months = parse_threshold(raw)?;
        if months != state.minimum_age_in_months() {
            state.set_minimum_age_in_months(months);
        }
        Ok(months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold(""), Ok(0));
        assert_eq!(parse_threshold(" 12 "), Ok(12));
        assert!(parse_threshold("-3").is_err());
        assert!(parse_threshold("1.5").is_err());
    }

    #[test]
    fn test_build_label() {
        let vm = SettingsViewModel::build(12, 730);
        assert_eq!(vm.minimum_age_hours_label, "8 760");
        assert_eq!(SettingsViewModel::build(0, 730).minimum_age_hours_label, "0");
    }

    #[test]
    fn test_apply_writes_store() {
        let state = AppState::new();
        assert_eq!(SettingsViewModel::apply(&state, "24"), Ok(24));
        assert_eq!(state.minimum_age_in_months(), 24);

        assert!(SettingsViewModel::apply(&state, "abc").is_err());
        assert_eq!(state.minimum_age_in_months(), 24);

        assert_eq!(SettingsViewModel::apply(&state, ""), Ok(0));
        assert_eq!(state.minimum_age_in_months(), 0);
    }

    #[test]
    fn test_apply_rejects_partial_numbers() {
        let state = AppState::new();
        SettingsViewModel::apply(&state, "6").unwrap();

        // Textos que un <input type="number"> reportaría como ""
        for raw in ["e", "1e", "--", "+", "1e3", "6 meses"] {
            let err = SettingsViewModel::apply(&state, raw).unwrap_err();
            assert_eq!(
                err,
                AppError::InvalidNumber { field: "minimumAgeInMonths", value: raw.to_string() }
            );
            assert_eq!(state.minimum_age_in_months(), 6);
        }
    }
}
