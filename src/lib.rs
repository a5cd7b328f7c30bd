pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::entry::GreetEngine;
pub use domain::model::{RunSettings, RunSummary};
pub use utils::error::{AppError, Result};
