#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// 每个测试使用独立的临时配置路径
pub fn temp_config_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("size_value_test");
    path.push(format!("config_{}.yaml", uuid::Uuid::new_v4()));
    path
}
