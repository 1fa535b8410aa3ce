use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Size error: {0}")]
    Size(#[from] SizeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerdeJsonError),
}

/// 构造或解析 [`SizeValue`](crate::SizeValue) 时的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    #[error("size in SizeValue may not be negative")]
    NegativeSize(i64),

    #[error("failed to parse '{input}'")]
    Parse {
        input: String,
        #[source]
        source: NumberFormatError,
    },
}

/// [`SizeError::Parse`] 底层的数字解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberFormatError {
    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),

    #[error("invalid number: {0}")]
    Float(#[from] ParseFloatError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] IoError),

    #[error("Failed to write config file: {0}")]
    WriteFailed(#[source] IoError),

    #[error("Failed to parse config: {0}")]
    ParseFailed(String),

    #[error("Failed to serialize config: {0}")]
    SerializeFailed(String),

    #[error("Missing size entry: {0}")]
    MissingKey(String),

    #[error("Configuration directory not found")]
    NoConfigDir,
}

impl SizeError {
    pub(crate) fn parse(input: impl Into<String>, source: impl Into<NumberFormatError>) -> Self {
        SizeError::Parse {
            input: input.into(),
            source: source.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SizeError::NegativeSize(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, SizeError::Parse { .. })
    }

    /// 解析失败时的原始输入
    pub fn input(&self) -> Option<&str> {
        match self {
            SizeError::Parse { input, .. } => Some(input),
            SizeError::NegativeSize(_) => None,
        }
    }
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Size(_) => 2,
            Error::Config(_) => 3,
            Error::Io(_) | Error::Serialization(_) => 1,
        }
    }
}

// Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;
pub type SizeResult<T> = std::result::Result<T, SizeError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
