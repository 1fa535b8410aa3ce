use crate::error::{ConfigError, ConfigResult};
use std::path::PathBuf;
use tracing::debug;

pub const CONFIG_ENV_VAR: &str = "SIZE_VALUE_CONFIG";
const LOCAL_CONFIG_NAME: &str = "size-value.yaml";

pub struct ConfigUtils;

impl ConfigUtils {
    /// 标准配置路径：<config_dir>/size-value/config.yaml
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("size-value").join("config.yaml"))
    }

    /// 环境变量 SIZE_VALUE_CONFIG 指定的路径（未设置或为空时返回 None）
    pub fn env_config_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// 最终使用的配置路径。
    ///
    /// 环境变量指定的路径即使文件不存在也优先使用，其次是已存在的
    /// ./size-value.yaml 或标准路径下的文件，都没有时返回标准路径。
    pub fn resolve_config_path() -> ConfigResult<PathBuf> {
        if let Some(env_path) = Self::env_config_path() {
            if !env_path.exists() {
                debug!(path = %env_path.display(), "{} 指向的配置文件不存在", CONFIG_ENV_VAR);
            }
            return Ok(env_path);
        }
        match Self::find_config_files().into_iter().next() {
            Some(path) => Ok(path),
            None => Self::default_config_path(),
        }
    }

    /// 查找配置文件，按优先级排序
    pub fn find_config_files() -> Vec<PathBuf> {
        Self::collect_config_files(
            Self::env_config_path(),
            std::env::current_dir().ok(),
            Self::default_config_path().ok(),
        )
    }

    /// 按 环境变量 -> 当前目录 -> 标准路径 的顺序收集已存在的配置文件
    pub fn collect_config_files(
        env_path: Option<PathBuf>,
        current_dir: Option<PathBuf>,
        standard_path: Option<PathBuf>,
    ) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        if let Some(path) = env_path {
            if path.exists() {
                config_files.push(path);
            } else {
                debug!(path = %path.display(), "跳过不存在的环境变量配置路径");
            }
        }

        if let Some(current_dir) = current_dir {
            let local_config = current_dir.join(LOCAL_CONFIG_NAME);
            if local_config.exists() {
                config_files.push(local_config);
            }
        }

        if let Some(standard_path) = standard_path {
            if standard_path.exists() {
                config_files.push(standard_path);
            }
        }

        config_files
    }

    /// 生成示例配置文件
    pub fn generate_default_config() -> String {
        [
            "# named sizes, as byte counts or with a k/m/g/t/p suffix",
            "sizes:",
            "  max_body: 10m",
            "  chunk: 512k",
            "  header_limit: 8192",
            "",
        ]
        .join("\n")
    }
}
