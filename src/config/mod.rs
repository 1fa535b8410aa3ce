mod utils;

pub use utils::{CONFIG_ENV_VAR, ConfigUtils};

use crate::error::{ConfigError, ConfigResult};
use crate::models::SizeValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 命名的大小配置，YAML 格式：
///
/// ```yaml
/// sizes:
///   max_body: 10m
///   chunk: 512k
///   header_limit: 8192
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeConfig {
    #[serde(default)]
    pub sizes: BTreeMap<String, SizeValue>,
}

impl SizeConfig {
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        // 空文件视为空配置
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::SerializeFailed(e.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<SizeValue> {
        self.sizes.get(key).copied()
    }

    pub fn get_or(&self, key: &str, default: SizeValue) -> SizeValue {
        self.get(key).unwrap_or(default)
    }

    pub fn require(&self, key: &str) -> ConfigResult<SizeValue> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: SizeValue) -> Option<SizeValue> {
        self.sizes.insert(key.into(), value)
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
    config: SizeConfig,
}

impl ConfigManager {
    /// 按 [`ConfigUtils::resolve_config_path`] 选定的路径加载配置
    pub fn discover() -> ConfigResult<Self> {
        Self::new_with_path(ConfigUtils::resolve_config_path()?)
    }

    pub fn new_with_path(config_path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let mut manager = Self {
            config_path: config_path.into(),
            config: SizeConfig::default(),
        };
        manager.load()?;
        Ok(manager)
    }

    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "配置文件不存在，使用空配置");
            self.config = SizeConfig::default();
            return Ok(());
        }
        let content = fs::read_to_string(&self.config_path).map_err(ConfigError::ReadFailed)?;
        self.config = SizeConfig::from_yaml_str(&content)?;
        info!(
            path = %self.config_path.display(),
            entries = self.config.sizes.len(),
            "加载大小配置"
        );
        Ok(())
    }

    pub fn save(&self) -> ConfigResult<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(ConfigError::WriteFailed)?;
            }
        }
        let content = self.config.to_yaml_string()?;
        fs::write(&self.config_path, content).map_err(ConfigError::WriteFailed)?;
        debug!(path = %self.config_path.display(), "写入大小配置");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &SizeConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SizeConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SizeUnit;

    #[test]
    fn test_from_yaml_mixed_forms() {
        let yaml = "sizes:\n  max_body: 10m\n  chunk: 512k\n  header_limit: 8192\n";
        let config = SizeConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.get("max_body").unwrap().singles(), 10 * 1024 * 1024);
        assert_eq!(config.get("chunk").unwrap().singles(), 512 * 1024);
        assert_eq!(config.get("header_limit").unwrap().singles(), 8192);
        assert_eq!(config.get("missing"), None);
    }

    #[test]
    fn test_empty_and_bad_yaml() {
        assert_eq!(SizeConfig::from_yaml_str("").unwrap(), SizeConfig::default());
        assert_eq!(SizeConfig::from_yaml_str("{}").unwrap(), SizeConfig::default());

        let err = SizeConfig::from_yaml_str("sizes:\n  bad: lots\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(msg) if msg.contains("failed to parse 'lots'")));

        let err = SizeConfig::from_yaml_str("sizes:\n  neg: -4\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));

        let err = SizeConfig::from_yaml_str("sizes:\n  half: 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(msg) if msg.contains("1.5k")));
    }

    #[test]
    fn test_whole_float_is_byte_count() {
        let config = SizeConfig::from_yaml_str("sizes:\n  big: 1000.0\n  two: 2.0\n").unwrap();
        assert_eq!(config.require("big").unwrap().singles(), 1000);
        assert_eq!(config.require("two").unwrap().singles(), 2);
    }

    #[test]
    fn test_get_or_and_require() {
        let mut config = SizeConfig::default();
        let kilo = SizeValue::new(4, SizeUnit::Kilo).unwrap();
        assert_eq!(config.insert("buf", kilo), None);

        assert_eq!(config.get_or("buf", SizeValue::ZERO), kilo);
        assert_eq!(config.get_or("other", SizeValue::ZERO), SizeValue::ZERO);
        assert_eq!(config.require("buf").unwrap(), kilo);
        assert!(matches!(
            config.require("other").unwrap_err(),
            ConfigError::MissingKey(key) if key == "other"
        ));
    }

    #[test]
    fn test_yaml_writes_byte_counts() {
        let mut config = SizeConfig::default();
        config.insert("buf", SizeValue::new(2, SizeUnit::Kilo).unwrap());
        let yaml = config.to_yaml_string().unwrap();
        assert!(yaml.contains("buf: 2048"), "unexpected yaml: {yaml}");

        let reloaded = SizeConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(reloaded.get("buf").unwrap().singles(), 2048);
    }
}
