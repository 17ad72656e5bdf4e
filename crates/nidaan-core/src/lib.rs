//! Domain logic shared by the Nidaan UI: static catalogs (symptoms, first-aid
//! guides, translation strings), media classification, and the pure derivation
//! of results-screen rows from an analysis response. Everything here is
//! browser-free so it can be unit-tested natively.

pub mod analysis;
pub mod first_aid;
pub mod i18n;
pub mod language;
pub mod media;
pub mod symptoms;
