use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_single_line, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT: i32 = 5;
pub const DEFAULT_ITERATIONS: u32 = 5;
pub const DEFAULT_LABEL: &str = "Recursing";
pub const DEFAULT_GREETING: &str = "Hello, World!";
pub const MAX_ITERATIONS: u32 = 10_000;

/// 一次執行所需的全部參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSettings {
    pub input: i32,
    pub iterations: u32,
    pub label: String,
    pub greeting: String,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT,
            iterations: DEFAULT_ITERATIONS,
            label: DEFAULT_LABEL.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub doubled: i32,
    pub lines_written: u32,
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validate_range("run.iterations", self.iterations, 0, MAX_ITERATIONS)?;

        validate_non_empty_string("run.label", &self.label)?;
        validate_single_line("run.label", &self.label)?;

        validate_non_empty_string("run.greeting", &self.greeting)?;
        validate_single_line("run.greeting", &self.greeting)?;

        Ok(())
    }
}
