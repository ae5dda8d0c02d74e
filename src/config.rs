use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::dimension::ContingencyPercent;
use crate::units::LengthUnit;

/// 기본 설정 파일 경로(작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 새로 추가하는 행의 단위
    pub default_unit: LengthUnit,
    /// 시작 시 여유율 [%]
    pub default_contingency_percent: ContingencyPercent,
    /// GUI 창 투명도(0.3~1.0)
    pub window_alpha: f32,
    /// GUI 창을 항상 위에 표시
    pub always_on_top: bool,
    /// tracing 필터 문자열 (예: "info", "tile_area_calculator=debug")
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_unit: LengthUnit::Centimeter,
            default_contingency_percent: ContingencyPercent::DEFAULT,
            window_alpha: 1.0,
            always_on_top: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 허용 범위로 보정된 창 투명도.
    pub fn clamped_window_alpha(&self) -> f32 {
        if self.window_alpha.is_finite() {
            self.window_alpha.clamp(0.3, 1.0)
        } else {
            1.0
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정을 어디서 얻었는지. 로그 설정이 끝난 뒤 호출자가 기록한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// 기존 파일에서 읽음
    Loaded,
    /// 파일이 없어 기본값으로 새로 씀
    Created,
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_create(path: impl AsRef<Path>) -> Result<(Config, ConfigSource), ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        Ok((load_from(path)?, ConfigSource::Loaded))
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        Ok((cfg, ConfigSource::Created))
    }
}

pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to(cfg: &Config, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}
