pub mod person;

pub use person::{Person, AppStateSnapshot, seed_people};
