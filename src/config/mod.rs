//! Configuration loading (`.lockbox.toml` + environment overrides).

pub mod settings;

pub use settings::Settings;
