//! 配置管理模块
//!
//! 提供TOML配置文件的读取、写入和自动发现功能。
//! 日志一律走 `tracing`，标准输出只留给转换结果。

use crate::error::{Result, TranslationError};
use crate::types::TranslationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 自动发现时依次尝试的配置文件
pub const DEFAULT_CONFIG_LOCATIONS: [&str; 2] = ["zh-converter.toml", ".zh-converter.toml"];

/// 应用配置结构
///
/// # 示例
///
/// ```rust
/// use zh_converter::AppConfig;
///
/// let config: AppConfig = toml::from_str(r#"
/// [translation]
/// providers = ["mymemory", "google"]
/// request_timeout_secs = 10
/// "#).unwrap();
///
/// assert_eq!(config.translation.providers.len(), 2);
/// assert_eq!(config.translation.request_timeout_secs, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 翻译配置
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TranslationError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            TranslationError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| TranslationError::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content).map_err(|e| {
            TranslationError::Config(format!("failed to write {}: {}", path.display(), e))
        })
    }

    /// Load configuration from the first default location that parses
    pub fn load_from_default_locations() -> Self {
        Self::load_from_locations(&DEFAULT_CONFIG_LOCATIONS)
    }

    pub fn load_from_locations<P: AsRef<Path>>(locations: &[P]) -> Self {
        for path in locations {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from: {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        Self::default()
    }

    /// Generate example configuration file
    pub fn generate_example_config<P: AsRef<Path>>(path: P) -> Result<()> {
        Self::default().save_to_file(path)
    }
}
