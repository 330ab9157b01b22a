pub mod settings;
pub mod store;
pub mod time;
