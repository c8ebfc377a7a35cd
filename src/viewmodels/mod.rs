pub mod people_viewmodel;
pub mod person_edit_viewmodel;
pub mod settings_viewmodel;

pub use people_viewmodel::{PeopleListViewModel, PersonRow, next_person_id};
pub use person_edit_viewmodel::{PersonEditViewModel, PersonDraft, parse_person_form, parse_person_id};
pub use settings_viewmodel::{SettingsViewModel, parse_threshold};
