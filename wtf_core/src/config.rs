//! `config`：匹配与布局相关的可调项。
//!
//! 默认值即推荐值；CLI 可通过环境变量覆盖：
//! - `WTF_MAX_INACCURACY`：非负整数，过滤阈值
//! - `WTF_LAYOUT`：`bottom`（列表自下而上，默认）或 `top`
use std::str::FromStr;

use crate::error::ConfigError;

pub const MAX_INACCURACY_VAR: &str = "WTF_MAX_INACCURACY";
pub const LAYOUT_VAR: &str = "WTF_LAYOUT";

/// 列表方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// 查询行在最底部，列表向上生长
    #[default]
    BottomUp,
    /// 查询行在最顶部，列表向下生长
    TopDown,
}

impl FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bottom" | "btm" => Ok(Layout::BottomUp),
            "top" => Ok(Layout::TopDown),
            _ => Err(ConfigError::InvalidLayout(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// 条目被过滤掉之前允许的最大 inaccuracy
    pub max_inaccuracy: usize,
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_inaccuracy: 1,
            layout: Layout::default(),
        }
    }
}

impl Config {
    pub fn max_inaccuracy(mut self, n: usize) -> Self {
        self.max_inaccuracy = n;
        self
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// 从进程环境读取覆盖项。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 用任意查找函数读取覆盖项（未设置的项保持默认）。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(MAX_INACCURACY_VAR) {
            config.max_inaccuracy =
                raw.trim()
                    .parse()
                    .map_err(|source| ConfigError::InvalidNumber {
                        key: MAX_INACCURACY_VAR,
                        value: raw.clone(),
                        source,
                    })?;
        }
        if let Some(raw) = lookup(LAYOUT_VAR) {
            config.layout = raw.parse()?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_recommended_values() {
        let c = Config::default();
        assert_eq!(c.max_inaccuracy, 1);
        assert_eq!(c.layout, Layout::BottomUp);
    }

    #[test]
    fn lookup_overrides_both_keys() {
        let c = Config::from_lookup(|k| match k {
            MAX_INACCURACY_VAR => Some(" 3 ".into()),
            LAYOUT_VAR => Some("TOP".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(c, Config::default().max_inaccuracy(3).layout(Layout::TopDown));
    }

    #[test]
    fn bad_number_is_reported_with_key() {
        let err = Config::from_lookup(|k| (k == MAX_INACCURACY_VAR).then(|| "-1".into()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { key: MAX_INACCURACY_VAR, .. }));
        assert!(err.to_string().contains("WTF_MAX_INACCURACY"));
    }

    #[test]
    fn bad_layout_is_rejected() {
        let err = "sideways".parse::<Layout>().unwrap_err();
        assert_eq!(err.to_string(), "invalid layout `sideways` (expected `bottom` or `top`)");
    }
}
