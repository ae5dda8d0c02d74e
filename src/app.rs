use std::path::Path;
use thiserror::Error;

use crate::area::{AreaMemo, AreaResult};
use crate::config::{self, Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::dimension::{ContingencyPercent, DimensionEntry, DimensionList};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위/치수 해석 오류
    #[error("입력 해석 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 로그 초기화 오류
    #[error("로그 초기화 오류: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// 한 화면(또는 한 CLI 세션)의 입력 상태와 계산 캐시.
#[derive(Debug)]
pub struct Session {
    pub entries: DimensionList,
    pub contingency: ContingencyPercent,
    memo: AreaMemo,
}

impl Session {
    /// 설정값으로 시작 상태를 만든다. 예시 행 하나가 들어 있다.
    pub fn from_config(config: &Config) -> Self {
        Self {
            entries: DimensionList::with_initial_entry(config.default_unit),
            contingency: config.default_contingency_percent,
            memo: AreaMemo::new(),
        }
    }

    /// 행이 하나도 없는 상태.
    pub fn empty(config: &Config) -> Self {
        Self {
            entries: DimensionList::new(config.default_unit),
            contingency: config.default_contingency_percent,
            memo: AreaMemo::new(),
        }
    }

    pub fn set_contingency(&mut self, percent: u8) {
        self.contingency = ContingencyPercent::new(percent);
    }

    /// 현재 입력의 총 면적.
    pub fn total(&mut self) -> AreaResult {
        self.memo.get(&self.entries, self.contingency)
    }
}

/// 명령행의 `--entry` 목록으로 세션을 구성한다.
pub fn session_from_specs(
    config: &Config,
    specs: &[String],
    contingency: Option<u8>,
) -> Result<Session, AppError> {
    let mut session = Session::empty(config);
    for spec in specs {
        let parsed = conversion::parse_entry_spec(spec, config.default_unit)?;
        session
            .entries
            .push(DimensionEntry::new(parsed.length, parsed.height, parsed.unit));
    }
    if let Some(p) = contingency {
        session.set_contingency(p);
    }
    Ok(session)
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    let mut session = Session::from_config(config);
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::ShowTotals => ui_cli::handle_show(&mut session),
            MenuChoice::AddEntry => ui_cli::handle_add(&mut session)?,
            MenuChoice::EditEntry => ui_cli::handle_edit(&mut session)?,
            MenuChoice::RemoveEntry => ui_cli::handle_remove(&mut session)?,
            MenuChoice::Contingency => ui_cli::handle_contingency(&mut session)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config, &mut session)?;
                config::save_to(config, config_path)?;
            }
            MenuChoice::Exit => {
                config::save_to(config, config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::LengthUnit;

    #[test]
    fn session_starts_with_sample_entry() {
        let cfg = Config::default();
        let mut session = Session::from_config(&cfg);
        assert_eq!(session.entries.len(), 1);
        assert_eq!(session.contingency.value(), 15);
        // 2.4 m x 1.2 m = 2.88 m², 15% 여유 → 3.312 m²
        assert!((session.total().m2 - 3.312).abs() < 1e-9);
    }

    #[test]
    fn specs_build_entries_in_order() {
        let cfg = Config::default();
        let specs = vec!["200x100mm".to_string(), "10x10".to_string()];
        let mut session = session_from_specs(&cfg, &specs, Some(0)).unwrap();
        assert_eq!(session.entries.len(), 2);
        assert_eq!(session.entries.entries()[1].unit, LengthUnit::Centimeter);
        assert!((session.total().mm2 - 30_000.0).abs() < 1e-9);
    }

    #[test]
    fn bad_spec_is_reported() {
        let cfg = Config::default();
        let err = session_from_specs(&cfg, &["12 by 4".to_string()], None).unwrap_err();
        assert!(matches!(err, AppError::Conversion(_)));
    }

    #[test]
    fn contingency_flag_is_clamped() {
        let cfg = Config::default();
        let session = session_from_specs(&cfg, &[], Some(99)).unwrap();
        assert_eq!(session.contingency.value(), 50);
    }
}
