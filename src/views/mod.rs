pub mod app;
pub mod shared;
pub mod people_list;
pub mod person_edit;
pub mod settings;
pub mod not_found;

pub use app::render_app;
pub use people_list::render_people_list;
pub use person_edit::render_person_edit;
pub use settings::render_settings;
pub use not_found::render_not_found;
