use crate::domain::model::RunSettings;

/// 設定來源 (CLI、TOML) 的共同介面，未指定的欄位回傳 None
pub trait SettingsProvider {
    fn input(&self) -> Option<i32>;
    fn iterations(&self) -> Option<u32>;
    fn label(&self) -> Option<&str>;
    fn greeting(&self) -> Option<&str>;

    /// 把本來源有指定的欄位覆蓋到 `base` 上
    fn apply_to(&self, base: RunSettings) -> RunSettings {
        RunSettings {
            input: self.input().unwrap_or(base.input),
            iterations: self.iterations().unwrap_or(base.iterations),
            label: self.label().map(str::to_string).unwrap_or(base.label),
            greeting: self.greeting().map(str::to_string).unwrap_or(base.greeting),
        }
    }
}
