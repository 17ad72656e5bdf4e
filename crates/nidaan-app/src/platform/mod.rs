pub mod api;
pub mod capture;
pub mod prefs;
pub mod voice;
