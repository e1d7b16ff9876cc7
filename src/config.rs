use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chart::ChartMode;
use crate::validation::DEFAULT_HORIZON_YEARS;

pub const CONFIG_FILE: &str = "config.toml";

/// GUI 테마.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    /// 운영체제 설정을 따름
    #[default]
    System,
    Light,
    Dark,
}

/// 애플리케이션 설정을 표현한다. 누락된 항목은 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto" | "en-us" | "th-th"
    pub language: String,
    /// 언어팩(TOML) 디렉터리
    pub language_pack_dir: Option<String>,
    pub theme: Theme,
    pub chart_mode: ChartMode,
    pub default_horizon_years: u32,
    /// km/년
    pub default_annual_km: f64,
    /// 외부 프리셋 JSON 경로. 없으면 내장 카탈로그
    pub preset_catalog: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            theme: Theme::System,
            chart_mode: ChartMode::Line,
            default_horizon_years: DEFAULT_HORIZON_YEARS,
            default_annual_km: 12000.0,
            preset_catalog: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn preset_path(&self) -> Option<PathBuf> {
        self.preset_catalog.as_deref().map(PathBuf::from)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        Config::load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!("default config written to {CONFIG_FILE}");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config {
            language: "th-th".into(),
            theme: Theme::Dark,
            chart_mode: ChartMode::Pie,
            default_horizon_years: 10,
            preset_catalog: Some("my_presets.json".into()),
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "language = \"en-us\"\ntheme = \"Light\"\n").unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.default_horizon_years, 5);
        assert_eq!(cfg.default_annual_km, 12000.0);
        assert!(cfg.preset_path().is_none());
    }

    #[test]
    fn broken_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_horizon_years = \"five\"").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }
}
