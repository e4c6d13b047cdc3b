pub mod alerts;
pub mod config_path;
pub mod history;
