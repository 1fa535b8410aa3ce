//! 带单位的字节大小：解析与格式化。
//!
//! [`SizeValue`] 保存非负数值及其单位 [`SizeUnit`]，单位按 1024 递增：
//! kilo、mega、giga、tera、peta。
//!
//! ```
//! use size_value::SizeValue;
//!
//! let limit = SizeValue::parse("2.5m").unwrap();
//! assert_eq!(limit.singles(), 2_621_440);
//! assert_eq!(limit.to_string(), "2.5m");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{Error, Result, SizeError};
pub use models::{C0, C1, C2, C3, C4, C5, SizeUnit, SizeValue, multiplier_for};
