use thiserror::Error;

use crate::units::LengthUnit;

/// 단위/치수 문자열 해석 시 발생 가능한 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// `길이x높이[단위]` 형식이 아닌 치수 문자열
    #[error("치수 형식 오류 (예: 2400x1200mm): {0}")]
    MalformedEntry(String),
    /// 0 이상의 유한한 숫자가 아닌 값
    #[error("숫자가 아닌 값: {0}")]
    InvalidMagnitude(String),
}

/// 0 이상의 유한한 10진수로 해석되면 그 값을 반환한다.
///
/// 음수 부호, `inf`/`NaN`, 뒤에 붙은 문자 등은 모두 `None`이다.
pub fn try_parse_magnitude(text: &str) -> Option<f64> {
    let t = text.trim();
    if t.is_empty() || t.starts_with('-') {
        return None;
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => None,
    }
}

/// 입력 중간 상태(빈 칸, 반쯤 입력된 숫자)를 0으로 취급하는 관대한 해석.
pub fn parse_magnitude(text: &str) -> f64 {
    try_parse_magnitude(text).unwrap_or(0.0)
}

/// 단위 문자열(`mm`, `cm`, `m` 등)을 enum으로 변환한다.
pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "mm" | "millimeter" | "millimeters" | "millimetre" => Ok(LengthUnit::Millimeter),
        "cm" | "centimeter" | "centimeters" | "centimetre" => Ok(LengthUnit::Centimeter),
        "m" | "meter" | "meters" | "metre" => Ok(LengthUnit::Meter),
        other => Err(ConversionError::UnknownUnit(other.to_string())),
    }
}

/// CLI에서 받은 한 개의 치수 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySpec {
    pub length: String,
    pub height: String,
    pub unit: LengthUnit,
}

/// `2400x1200mm`, `2.4*1.2 m`, `100×100` 형태의 문자열을 해석한다.
///
/// 단위가 생략되면 `default_unit`을 사용한다. 폼 입력과 달리 명령행 인자는
/// 잘못된 숫자를 0으로 바꾸지 않고 오류로 돌려준다.
pub fn parse_entry_spec(spec: &str, default_unit: LengthUnit) -> Result<EntrySpec, ConversionError> {
    let s = spec.trim();
    let split_at = s
        .find(|c: char| c.is_ascii_alphabetic() && c != 'x' && c != 'X' && c != 'e' && c != 'E')
        .unwrap_or(s.len());
    let (dims, unit_str) = s.split_at(split_at);
    let unit = if unit_str.trim().is_empty() {
        default_unit
    } else {
        parse_length_unit(unit_str)?
    };

    let mut parts = dims.split(['x', 'X', '*', '×']);
    let (length, height) = match (parts.next(), parts.next(), parts.next()) {
        (Some(l), Some(h), None) => (l.trim(), h.trim()),
        _ => return Err(ConversionError::MalformedEntry(spec.to_string())),
    };
    for part in [length, height] {
        if try_parse_magnitude(part).is_none() {
            return Err(ConversionError::InvalidMagnitude(part.to_string()));
        }
    }
    Ok(EntrySpec {
        length: length.to_string(),
        height: height.to_string(),
        unit,
    })
}
