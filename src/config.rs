//! 配置加载
//!
//! 默认值即为固定行为：报告写入 `report.json`，列出前 5 种扩展名和前 10 个最大文件。

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

use crate::theme::Theme;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "FOLDERSTAT_CONFIG";
/// 当前目录下的默认配置文件
pub const DEFAULT_CONFIG_FILE: &str = "folderstat.toml";

/// 全部配置
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub theme: Theme,
}

/// 报告相关配置
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// JSON 报告输出路径
    pub path: PathBuf,
    /// 摘要中列出的扩展名数量
    pub top_extensions: usize,
    /// 最大文件列表长度
    pub largest_files: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("report.json"),
            top_extensions: 5,
            largest_files: 10,
        }
    }
}

impl ReportConfig {
    fn validate(&self) -> anyhow::Result<()> {
        if self.path.as_os_str().is_empty() {
            anyhow::bail!("report.path must not be empty");
        }
        if self.top_extensions == 0 {
            anyhow::bail!("report.top_extensions must be at least 1");
        }
        if self.largest_files == 0 {
            anyhow::bail!("report.largest_files must be at least 1");
        }
        Ok(())
    }
}

impl Config {
    /// 从文件加载配置
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// 解析并校验 TOML
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.report.validate()?;
        self.theme.validate()?;
        Ok(())
    }
}

/// 依次尝试环境变量、当前目录的配置文件，最后使用默认配置
pub fn load_config_from_env_or_default() -> Config {
    if let Ok(path) = env::var(CONFIG_ENV) {
        match Config::load_from_file(Path::new(&path)) {
            Ok(config) => return config,
            Err(e) => warn!("Ignoring config {path}: {e}"),
        }
    }

    let local = Path::new(DEFAULT_CONFIG_FILE);
    if local.exists() {
        match Config::load_from_file(local) {
            Ok(config) => return config,
            Err(e) => warn!("Ignoring config {}: {e}", local.display()),
        }
    }

    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Color;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.report, ReportConfig::default());
        assert_eq!(config.report.path, PathBuf::from("report.json"));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [report]
            largest_files = 3

            [theme]
            path = { r = 10, g = 20, b = 30 }
            "#,
        )
        .unwrap();

        assert_eq!(config.report.largest_files, 3);
        assert_eq!(config.report.top_extensions, 5);
        assert_eq!(config.theme.path, Color::RGB { r: 10, g: 20, b: 30 });
        assert_eq!(config.theme.size, Theme::default().size);
    }

    #[test]
    fn zero_limits_are_rejected() {
        assert!(Config::from_toml("[report]\ntop_extensions = 0\n").is_err());
        assert!(Config::from_toml("[report]\nlargest_files = 0\n").is_err());
    }

    #[test]
    fn unknown_color_is_rejected() {
        let err = Config::from_toml("[theme]\nheading = { name = \"mauve\" }\n").unwrap_err();
        assert!(err.to_string().contains("mauve"));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folderstat.toml");
        fs::write(&path, "[report]\npath = \"out/stats.json\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.report.path, PathBuf::from("out/stats.json"));
    }
}
