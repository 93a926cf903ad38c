//! Error handling for brutalforce


use thiserror::Error;

/// Main error type for brutalforce
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrutalForceError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Symbol '{symbol}' at position {position} is not in the alphabet")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("Ordinal index of a {length}-symbol candidate does not fit in 128 bits")]
    IndexOverflow { length: usize },

    #[error("Prompt error: {message}")]
    Prompt { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BrutalForceError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unknown_symbol(symbol: char, position: usize) -> Self {
        Self::UnknownSymbol { symbol, position }
    }

    pub fn index_overflow(length: usize) -> Self {
        Self::IndexOverflow { length }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error means a target string cannot be placed in the enumeration order
    pub fn is_unencodable(&self) -> bool {
        matches!(self, Self::UnknownSymbol { .. } | Self::IndexOverflow { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your flags, .env file or BRUTALFORCE_* variables", message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::UnknownSymbol { symbol, position } => {
                format!("⚠️  Target symbol '{}' (position {}) is outside the alphabet\n💡 Pick a larger alphabet with --alphabet", symbol, position)
            }
            Self::IndexOverflow { length } => {
                format!("⚠️  A {}-symbol target is too long to track\n💡 Use a shorter target", length)
            }
            Self::Prompt { message } => {
                format!("❌ Prompt failed: {}\n💡 Pass the target with --target or use --no-prompt", message)
            }
            Self::Io { message } => {
                format!("❌ IO error: {}", message)
            }
            Self::Serialization { message } => {
                format!("❌ Could not serialize the snapshot: {}", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

impl From<std::io::Error> for BrutalForceError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<serde_json::Error> for BrutalForceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for BrutalForceError {
    fn from(err: inquire::InquireError) -> Self {
        Self::prompt(err.to_string())
    }
}

impl From<tokio::task::JoinError> for BrutalForceError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Engine task failed: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BrutalForceError>;



/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::BrutalForceError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::BrutalForceError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::BrutalForceError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::BrutalForceError::validation(format!($fmt, $($arg)*))
    };
}
