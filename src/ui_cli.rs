use std::fmt::Write as _;
use std::io::{self, Write};

use crate::app::{AppError, Session};
use crate::area::{entry_area_mm2, AreaResult};
use crate::config::Config;
use crate::conversion;
use crate::dimension::{ContingencyPercent, DimensionField};
use crate::format::{format_area, format_number};
use crate::units::{AreaUnit, LengthUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowTotals,
    AddEntry,
    EditEntry,
    RemoveEntry,
    Contingency,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Tile Area Calculator ===");
    println!("1) 치수 목록/총 면적 보기");
    println!("2) 치수 추가");
    println!("3) 치수 수정");
    println!("4) 치수 삭제");
    println!("5) 여유율 설정");
    println!("6) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::ShowTotals),
            "2" => return Ok(MenuChoice::AddEntry),
            "3" => return Ok(MenuChoice::EditEntry),
            "4" => return Ok(MenuChoice::RemoveEntry),
            "5" => return Ok(MenuChoice::Contingency),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 목록과 총 면적을 출력한다.
pub fn handle_show(session: &mut Session) {
    print!("{}", render_entries(session));
    let total = session.total();
    println!("\n여유율 {} 포함 총 필요 면적:", session.contingency);
    print!("{}", render_totals(&total));
}

/// 행 번호(1부터)와 함께 치수 목록을 문자열로 만든다.
pub fn render_entries(session: &Session) -> String {
    let mut out = String::new();
    if session.entries.is_empty() {
        out.push_str("(입력된 치수가 없습니다)\n");
        return out;
    }
    for (i, e) in session.entries.entries().iter().enumerate() {
        let length = if e.length.is_empty() { "-" } else { e.length.as_str() };
        let height = if e.height.is_empty() { "-" } else { e.height.as_str() };
        let _ = writeln!(
            out,
            "{:>2}) {} x {} {}  = {}",
            i + 1,
            length,
            height,
            e.unit,
            format_area(entry_area_mm2(e), AreaUnit::SquareMillimeter)
        );
    }
    out
}

/// 세 단위의 총 면적을 큰 단위부터 나열한다.
pub fn render_totals(total: &AreaResult) -> String {
    let mut out = String::new();
    for unit in AreaUnit::DISPLAY_ORDER {
        let _ = writeln!(
            out,
            "  {:<20} {} {}",
            unit.label(),
            format_number(total.in_unit(unit)),
            unit.symbol()
        );
    }
    out
}

/// 새 행을 추가하고 값을 입력받는다.
pub fn handle_add(session: &mut Session) -> Result<(), AppError> {
    let unit = read_length_unit(session.entries.default_unit())?;
    let length = read_line("길이: ")?;
    let height = read_line("높이: ")?;
    let id = session.entries.add();
    session
        .entries
        .update(id, DimensionField::Unit(unit));
    session
        .entries
        .update(id, DimensionField::Length(length.trim().to_string()));
    session
        .entries
        .update(id, DimensionField::Height(height.trim().to_string()));
    tracing::debug!(%id, "치수 추가");
    warn_if_not_numeric(&length);
    warn_if_not_numeric(&height);
    Ok(())
}

/// 기존 행의 필드를 바꾼다. 빈 입력은 기존 값을 유지한다.
pub fn handle_edit(session: &mut Session) -> Result<(), AppError> {
    let Some(id) = select_entry(session, "수정할 번호: ")? else {
        return Ok(());
    };
    let length = read_line("새 길이 (유지하려면 엔터): ")?;
    if !length.trim().is_empty() {
        warn_if_not_numeric(&length);
        session
            .entries
            .update(id, DimensionField::Length(length.trim().to_string()));
    }
    let height = read_line("새 높이 (유지하려면 엔터): ")?;
    if !height.trim().is_empty() {
        warn_if_not_numeric(&height);
        session
            .entries
            .update(id, DimensionField::Height(height.trim().to_string()));
    }
    let unit = read_line("새 단위 mm/cm/m (유지하려면 엔터): ")?;
    if !unit.trim().is_empty() {
        match conversion::parse_length_unit(&unit) {
            Ok(u) => {
                session.entries.update(id, DimensionField::Unit(u));
            }
            Err(e) => println!("{e} (단위는 변경하지 않습니다)"),
        }
    }
    tracing::debug!(%id, "치수 수정");
    Ok(())
}

pub fn handle_remove(session: &mut Session) -> Result<(), AppError> {
    if let Some(id) = select_entry(session, "삭제할 번호: ")? {
        session.entries.remove(id);
        tracing::debug!(%id, "치수 삭제");
    }
    Ok(())
}

pub fn handle_contingency(session: &mut Session) -> Result<(), AppError> {
    println!("현재 여유율: {}", session.contingency);
    println!("절단, 실수, 향후 보수를 위한 여분입니다. 보통 10~15%를 사용합니다.");
    let prompt = format!(
        "여유율 [{}~{}%]: ",
        ContingencyPercent::MIN,
        ContingencyPercent::MAX
    );
    loop {
        let s = read_line(&prompt)?;
        match s.trim().parse::<u8>() {
            Ok(p) if p <= ContingencyPercent::MAX => {
                session.set_contingency(p);
                return Ok(());
            }
            _ => println!(
                "{}~{} 사이의 정수를 입력하세요.",
                ContingencyPercent::MIN,
                ContingencyPercent::MAX
            ),
        }
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config, session: &mut Session) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("새 행의 기본 단위: {}", cfg.default_unit);
    println!("시작 여유율: {}", cfg.default_contingency_percent);
    let unit = read_line("기본 단위 변경 mm/cm/m (취소하려면 엔터): ")?;
    if !unit.trim().is_empty() {
        match conversion::parse_length_unit(&unit) {
            Ok(u) => {
                cfg.default_unit = u;
                session.entries.set_default_unit(u);
            }
            Err(e) => println!("{e} (변경하지 않습니다)"),
        }
    }
    let pct = read_line("시작 여유율 변경 (취소하려면 엔터): ")?;
    if !pct.trim().is_empty() {
        match pct.trim().parse::<u8>() {
            Ok(p) => cfg.default_contingency_percent = ContingencyPercent::new(p),
            Err(_) => println!("잘못된 입력이므로 변경하지 않습니다."),
        }
    }
    println!(
        "기본 단위 {}, 시작 여유율 {} 로 설정되었습니다.",
        cfg.default_unit, cfg.default_contingency_percent
    );
    Ok(())
}

fn select_entry(session: &Session, prompt: &str) -> Result<Option<uuid::Uuid>, AppError> {
    if session.entries.is_empty() {
        println!("(입력된 치수가 없습니다)");
        return Ok(None);
    }
    print!("{}", render_entries(session));
    let sel = read_line(prompt)?;
    let picked = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| session.entries.entries().get(i))
        .map(|e| e.id);
    if picked.is_none() {
        println!("잘못된 선택입니다.");
    }
    Ok(picked)
}

fn warn_if_not_numeric(text: &str) {
    if conversion::try_parse_magnitude(text).is_none() {
        println!("참고: '{}' 은(는) 숫자가 아니므로 0으로 계산됩니다.", text.trim());
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "표준 입력이 닫혔습니다").into());
    }
    Ok(buf)
}

fn read_length_unit(default: LengthUnit) -> Result<LengthUnit, AppError> {
    let options: Vec<&str> = LengthUnit::ALL.iter().map(|u| u.symbol()).collect();
    let sel = read_line(&format!(
        "단위 {} (기본 {default}): ",
        options.join("/")
    ))?;
    if sel.trim().is_empty() {
        return Ok(default);
    }
    Ok(conversion::parse_length_unit(&sel).unwrap_or_else(|e| {
        println!("{e}, 기본 단위 {default} 를 사용합니다.");
        default
    }))
}
