use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Doubling {input} overflows a 32-bit integer")]
    ArithmeticOverflow { input: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Computation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::IoError(_) => ErrorCategory::Io,
            AppError::ConfigParseError { .. } | AppError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AppError::ArithmeticOverflow { .. } => ErrorCategory::Computation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::IoError(_) => ErrorSeverity::Critical,
            AppError::ConfigParseError { .. } | AppError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            AppError::ArithmeticOverflow { .. } => ErrorSeverity::Medium,
        }
    }

    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::IoError(e) => format!("Could not read or write: {}", e),
            AppError::ConfigParseError { message } => {
                format!("The settings file is not valid TOML: {}", message)
            }
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            AppError::ArithmeticOverflow { input } => {
                format!("Input {} is too large to double", input)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::IoError(_) => "Check that the config path exists and stdout is writable",
            AppError::ConfigParseError { .. } => "Fix the TOML syntax; all keys live under [run]",
            AppError::InvalidConfigValueError { .. } => {
                "Adjust the value in the settings file or on the command line"
            }
            AppError::ArithmeticOverflow { .. } => {
                "Use an input between -1073741824 and 1073741823"
            }
        }
    }

    /// 依嚴重程度決定程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
