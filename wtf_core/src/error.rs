//! 配置错误。
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// 数值型覆盖项无法解析。
    #[error("invalid value `{value}` for {key}: {source}")]
    InvalidNumber {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid layout `{0}` (expected `bottom` or `top`)")]
    InvalidLayout(String),
}
