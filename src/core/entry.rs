use crate::core::routine::double_and_report;
use crate::domain::model::{RunSettings, RunSummary};
use crate::utils::error::Result;
use std::io::Write;

pub struct GreetEngine {
    settings: RunSettings,
}

impl GreetEngine {
    pub fn new(settings: RunSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// 執行倍增迴圈後輸出問候語。倍增結果不會印出，只回傳給呼叫端。
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        tracing::debug!("Running with {:?}", self.settings);

        let doubled = double_and_report(
            out,
            self.settings.input,
            self.settings.iterations,
            &self.settings.label,
        )?;

        writeln!(out, "{}", self.settings.greeting)?;
        out.flush()?;

        tracing::info!("✅ Wrote {} iteration lines", self.settings.iterations);

        Ok(RunSummary {
            doubled,
            lines_written: self.settings.iterations,
        })
    }
}

impl Default for GreetEngine {
    fn default() -> Self {
        Self::new(RunSettings::default())
    }
}
