use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 밀리미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
}

impl LengthUnit {
    /// 선택 목록에 표시되는 순서.
    pub const ALL: [LengthUnit; 3] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
    ];

    /// 1 단위가 몇 밀리미터인지 반환한다.
    pub fn factor_to_mm(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 1.0,
            LengthUnit::Centimeter => 10.0,
            LengthUnit::Meter => 1000.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
        }
    }
}

/// 길이 값을 다른 단위로 환산한다 (밀리미터 경유).
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.factor_to_mm() / to.factor_to_mm()
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_follow_metric_prefixes() {
        assert_eq!(LengthUnit::Millimeter.factor_to_mm(), 1.0);
        assert_eq!(LengthUnit::Centimeter.factor_to_mm(), 10.0);
        assert_eq!(LengthUnit::Meter.factor_to_mm(), 1000.0);
    }

    #[test]
    fn convert_goes_through_millimeters() {
        assert!((convert_length(2.4, LengthUnit::Meter, LengthUnit::Centimeter) - 240.0).abs() < 1e-9);
        assert!((convert_length(35.0, LengthUnit::Millimeter, LengthUnit::Meter) - 0.035).abs() < 1e-12);
        assert_eq!(convert_length(7.5, LengthUnit::Centimeter, LengthUnit::Centimeter), 7.5);
    }

    #[test]
    fn serde_uses_symbols() {
        #[derive(Serialize, Deserialize)]
        struct Wrap {
            unit: LengthUnit,
        }
        let text = toml::to_string(&Wrap { unit: LengthUnit::Centimeter }).unwrap();
        assert_eq!(text.trim(), "unit = \"cm\"");
        let back: Wrap = toml::from_str("unit = \"m\"").unwrap();
        assert_eq!(back.unit, LengthUnit::Meter);
    }
}
