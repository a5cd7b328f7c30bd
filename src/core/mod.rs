pub mod entry;
pub mod routine;

pub use crate::domain::model::{RunSettings, RunSummary};
pub use crate::domain::ports::SettingsProvider;
pub use crate::utils::error::Result;
