use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tile_area_calculator::{app, config, logging, ui_cli};

/// 타일 등 자재 소요 면적을 계산한다.
#[derive(Debug, Parser)]
#[command(name = "tile_area_calculator_cli", version, about)]
struct Cli {
    /// 치수 `길이x높이[단위]` (예: 2400x1200mm). 여러 번 지정 가능.
    /// 하나도 없으면 대화형 메뉴를 연다.
    #[arg(short, long = "entry", value_name = "LxH[UNIT]")]
    entries: Vec<String>,

    /// 여유율 [%], 0~50
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=50))]
    contingency: Option<u8>,

    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 로그 필터 (설정 파일 값보다 우선)
    #[arg(long)]
    log_level: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    match try_run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let (mut cfg, source) = config::load_or_create(&cli.config)?;
    logging::init(cli.log_level.as_deref().unwrap_or(&cfg.log_level))?;
    tracing::info!(path = %cli.config.display(), ?source, "설정 준비");
    tracing::debug!(?cfg, "설정 값");

    if cli.entries.is_empty() {
        tracing::info!(config = %cli.config.display(), "대화형 모드 시작");
        return app::run(&mut cfg, &cli.config);
    }

    let mut session = app::session_from_specs(&cfg, &cli.entries, cli.contingency)?;
    let total = session.total();
    tracing::info!(
        entries = session.entries.len(),
        contingency = session.contingency.value(),
        mm2 = total.mm2,
        "총 면적 계산"
    );
    print!("{}", ui_cli::render_entries(&session));
    println!("\n여유율 {} 포함 총 필요 면적:", session.contingency);
    print!("{}", ui_cli::render_totals(&total));
    Ok(())
}
