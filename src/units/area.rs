use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱밀리미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    #[serde(rename = "mm2")]
    SquareMillimeter,
    #[serde(rename = "cm2")]
    SquareCentimeter,
    #[serde(rename = "m2")]
    SquareMeter,
}

impl AreaUnit {
    /// 결과 카드가 표시되는 순서(큰 단위 먼저).
    pub const DISPLAY_ORDER: [AreaUnit; 3] = [
        AreaUnit::SquareMeter,
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareMillimeter,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMillimeter => "mm²",
            AreaUnit::SquareCentimeter => "cm²",
            AreaUnit::SquareMeter => "m²",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AreaUnit::SquareMillimeter => "Square Millimeters",
            AreaUnit::SquareCentimeter => "Square Centimeters",
            AreaUnit::SquareMeter => "Square Meters",
        }
    }
}

/// 제곱밀리미터 값을 지정 단위로 환산한다.
pub fn from_square_millimeter(value_mm2: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMillimeter => value_mm2,
        AreaUnit::SquareCentimeter => value_mm2 / 100.0,
        AreaUnit::SquareMeter => value_mm2 / 1_000_000.0,
    }
}
