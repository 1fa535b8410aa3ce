use crate::config::{ConfigManager, ConfigUtils, SizeConfig};
use crate::error::{ConfigError, Result};
use prettytable::{Table, format, row};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn cmd_show_config(
    config_path: Option<PathBuf>,
    key: Option<String>,
    json: bool,
    init: bool,
) -> Result<()> {
    // --config 或环境变量显式指定的路径必须存在（--init 除外）
    let named = config_path.or_else(ConfigUtils::env_config_path);
    let path = match &named {
        Some(path) => path.clone(),
        None => ConfigUtils::resolve_config_path()?,
    };
    if init {
        init_config_file(&path)?;
    } else if named.is_some() && !path.exists() {
        return Err(ConfigError::FileNotFound(path).into());
    }
    let manager = ConfigManager::new_with_path(path)?;

    println!("{}", config_output(manager.config(), key.as_deref(), json)?);
    Ok(())
}

fn init_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, ConfigUtils::generate_default_config())?;
    info!(path = %path.display(), "已生成示例配置");
    Ok(())
}

pub fn config_output(config: &SizeConfig, key: Option<&str>, json: bool) -> Result<String> {
    if let Some(key) = key {
        let value = config.require(key)?;
        return Ok(if json {
            serde_json::to_string(&value)?
        } else {
            format!("{} ({} bytes)", value, value.singles())
        });
    }

    if json {
        return Ok(serde_json::to_string_pretty(config)?);
    }

    if config.sizes.is_empty() {
        return Ok("暂无大小配置".to_string());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["名称", "大小", "字节"]);
    for (name, value) in &config.sizes {
        table.add_row(row![name, value, value.singles()]);
    }
    Ok(table.to_string())
}
