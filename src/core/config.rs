//! # Configuration Module / 配置模块
//!
//! The TOML-backed harness configuration. Every field has a default, so an
//! empty file and a missing file both yield a usable configuration;
//! command-line options override whatever the file provides.
//!
//! 基于 TOML 的执行器配置。每个字段都有默认值，因此空文件和缺失的
//! 文件都会产生可用的配置；命令行选项会覆盖文件提供的内容。

use crate::infra::t;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The config file picked up from the working directory when no explicit
/// `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "UnitRunner.toml";

/// The default per-run budget of recorded assumption misses.
pub const DEFAULT_ASSUME_MAX: u32 = 5;

/// Harness configuration loaded from a TOML file.
/// 从 TOML 文件加载的执行器配置。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HarnessConfig {
    /// The language for the harness's output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 执行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// Whether console output uses ANSI colors. Defaults to `true`.
    /// 控制台输出是否使用 ANSI 颜色。默认为 `true`。
    #[serde(default = "default_color")]
    pub color: bool,

    /// The per-run budget of recorded assumption misses before the run is
    /// aborted. Defaults to [`DEFAULT_ASSUME_MAX`].
    ///
    /// 在运行被中止前，每次运行允许记录的假设未命中预算。
    /// 默认为 [`DEFAULT_ASSUME_MAX`]。
    #[serde(default = "default_assume_max")]
    pub assume_max: u32,

    /// An optional path the HTML report is written to at summary time.
    /// 可选路径，摘要阶段将 HTML 报告写入该位置。
    #[serde(default)]
    pub html_report: Option<PathBuf>,

    /// An optional path the JSON report is written to at summary time.
    /// 可选路径，摘要阶段将 JSON 报告写入该位置。
    #[serde(default)]
    pub json_report: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            language: default_language(),
            color: default_color(),
            assume_max: default_assume_max(),
            html_report: None,
            json_report: None,
        }
    }
}

impl HarnessConfig {
    /// Loads the configuration from an explicit TOML file path.
    /// 从显式的 TOML 文件路径加载配置。
    pub fn from_file(path: &Path) -> Result<HarnessConfig> {
        // For config parsing, we don't have the locale yet. Use English as a default.
        let locale = "en";
        let content = fs::read_to_string(path)
            .with_context(|| t!("config.read_failed", locale = locale, path = path.display()))?;

        toml::from_str(&content).with_context(|| t!("config.parse_failed", locale = locale))
    }

    /// Loads `UnitRunner.toml` from the working directory when it exists,
    /// otherwise falls back to the built-in defaults.
    pub fn load_default() -> Result<HarnessConfig> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(HarnessConfig::default())
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_color() -> bool {
    true
}

fn default_assume_max() -> u32 {
    DEFAULT_ASSUME_MAX
}
