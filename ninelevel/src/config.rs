use crate::Error;
use crate::request::BASE_URL;
use ninelevel_common::retry::RetryConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 配置文件，所有字段都可省略
///
/// ```toml
/// timeout_secs = 10
/// max_concurrency = 8
/// out_dir = "./lessons"
///
/// [retry]
/// max_attempts = 3
/// initial_delay_ms = 200
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_concurrency: Option<usize>,
    pub out_dir: PathBuf,
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            timeout_secs: 30,
            max_concurrency: None,
            out_dir: PathBuf::from("."),
            retry: RetryConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let s = std::fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
