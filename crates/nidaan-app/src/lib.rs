pub mod app;
pub mod components;
pub mod platform;
pub mod state;
