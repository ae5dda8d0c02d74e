//! 치수 목록을 합산해 필요한 총 면적을 계산한다.
//!
//! 모든 행을 먼저 제곱밀리미터로 정규화해 한 번만 합산하고, cm²/m² 값은
//! 그 합계를 나누어서만 얻는다. 잘못된 숫자는 0으로 취급하므로 어떤 입력에도
//! 오류를 만들지 않는다.

use crate::conversion::parse_magnitude;
use crate::dimension::{ContingencyPercent, DimensionEntry, DimensionList};
use crate::units::{from_square_millimeter, AreaUnit};

/// 여유율이 반영된 총 면적. 세 값은 모두 같은 물리량이다.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AreaResult {
    pub mm2: f64,
    pub cm2: f64,
    pub m2: f64,
}

impl AreaResult {
    /// 제곱밀리미터 합계에서 나머지 두 단위를 유도한다.
    pub fn from_mm2(mm2: f64) -> Self {
        Self {
            mm2,
            cm2: from_square_millimeter(mm2, AreaUnit::SquareCentimeter),
            m2: from_square_millimeter(mm2, AreaUnit::SquareMeter),
        }
    }

    pub fn in_unit(&self, unit: AreaUnit) -> f64 {
        match unit {
            AreaUnit::SquareMillimeter => self.mm2,
            AreaUnit::SquareCentimeter => self.cm2,
            AreaUnit::SquareMeter => self.m2,
        }
    }
}

/// 한 행의 면적 [mm²].
pub fn entry_area_mm2(entry: &DimensionEntry) -> f64 {
    let factor = entry.unit.factor_to_mm();
    let length_mm = parse_magnitude(&entry.length) * factor;
    let height_mm = parse_magnitude(&entry.height) * factor;
    length_mm * height_mm
}

/// 여유율을 적용하기 전 합계 [mm²].
pub fn raw_area_mm2(entries: &[DimensionEntry]) -> f64 {
    entries.iter().map(entry_area_mm2).sum()
}

/// 총 면적을 계산한다. 빈 목록이면 0을 반환한다.
pub fn aggregate(entries: &[DimensionEntry], contingency: ContingencyPercent) -> AreaResult {
    let total_mm2 = raw_area_mm2(entries);
    AreaResult::from_mm2(total_mm2 * contingency.factor())
}

/// 마지막 계산 결과를 (목록 revision, 여유율) 기준으로 보관한다.
///
/// 한 개의 `DimensionList`와 짝지어 사용해야 한다. revision은 목록마다
/// 독립적으로 증가하기 때문이다.
#[derive(Debug, Default)]
pub struct AreaMemo {
    last: Option<(u64, ContingencyPercent, AreaResult)>,
}

impl AreaMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, list: &DimensionList, contingency: ContingencyPercent) -> AreaResult {
        if let Some((rev, pct, result)) = self.last {
            if rev == list.revision() && pct == contingency {
                return result;
            }
        }
        let result = aggregate(list.entries(), contingency);
        self.last = Some((list.revision(), contingency, result));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::DimensionField;
    use crate::units::LengthUnit;

    fn entry(length: &str, height: &str, unit: LengthUnit) -> DimensionEntry {
        DimensionEntry::new(length, height, unit)
    }

    fn pct(p: u8) -> ContingencyPercent {
        ContingencyPercent::new(p)
    }

    #[test]
    fn empty_list_is_zero_for_any_contingency() {
        for p in [0, 1, 15, 50] {
            assert_eq!(aggregate(&[], pct(p)), AreaResult::default());
        }
    }

    #[test]
    fn zero_side_contributes_nothing() {
        for unit in LengthUnit::ALL {
            for p in [0, 15, 50] {
                let r = aggregate(&[entry("0", "123", unit), entry("987", "0", unit)], pct(p));
                assert_eq!(r.mm2, 0.0);
            }
        }
    }

    #[test]
    fn zero_contingency_equals_raw_sum() {
        let entries = [
            entry("2400", "1200", LengthUnit::Millimeter),
            entry("1.5", "0.75", LengthUnit::Meter),
        ];
        assert_eq!(aggregate(&entries, pct(0)).mm2, raw_area_mm2(&entries));
    }

    #[test]
    fn square_meter_in_centimeters() {
        let r = aggregate(&[entry("100", "100", LengthUnit::Centimeter)], pct(0));
        assert!((r.mm2 - 1_000_000.0).abs() < 1e-6);
        assert!((r.cm2 - 10_000.0).abs() < 1e-9);
        assert!((r.m2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn contingency_fifteen_percent() {
        let r = aggregate(&[entry("1000", "1000", LengthUnit::Millimeter)], pct(15));
        assert!((r.mm2 - 1_150_000.0).abs() < 1e-6, "mm2={}", r.mm2);
    }

    #[test]
    fn malformed_text_does_not_poison_total() {
        let r = aggregate(
            &[
                entry("abc", "50", LengthUnit::Millimeter),
                entry("10", "10", LengthUnit::Millimeter),
            ],
            pct(0),
        );
        assert!(r.mm2.is_finite());
        assert_eq!(r.mm2, 100.0);
    }

    #[test]
    fn mixed_units_are_summed_in_millimeters() {
        let r = aggregate(
            &[
                entry("200", "100", LengthUnit::Millimeter),
                entry("10", "10", LengthUnit::Centimeter),
            ],
            pct(0),
        );
        assert!((r.mm2 - 30_000.0).abs() < 1e-9);
    }

    #[test]
    fn scaled_units_are_exact_divisions() {
        let r = aggregate(
            &[
                entry("2400", "1200", LengthUnit::Millimeter),
                entry("3.3", "2.7", LengthUnit::Meter),
                entry("45.5", "12", LengthUnit::Centimeter),
            ],
            pct(37),
        );
        assert_eq!(r.cm2, r.mm2 / 100.0);
        assert_eq!(r.m2, r.mm2 / 1_000_000.0);
        assert_eq!(r.in_unit(AreaUnit::SquareCentimeter), r.cm2);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let entries = [
            entry("0.1", "0.2", LengthUnit::Meter),
            entry("33.3", "7", LengthUnit::Centimeter),
        ];
        let a = aggregate(&entries, pct(12));
        let b = aggregate(&entries, pct(12));
        assert_eq!(a.mm2.to_bits(), b.mm2.to_bits());
        assert_eq!(a.cm2.to_bits(), b.cm2.to_bits());
        assert_eq!(a.m2.to_bits(), b.m2.to_bits());
    }

    #[test]
    fn memo_tracks_list_changes() {
        let mut list = DimensionList::new(LengthUnit::Millimeter);
        let id = list.add();
        let mut memo = AreaMemo::new();
        assert_eq!(memo.get(&list, pct(0)).mm2, 0.0);

        list.update(id, DimensionField::Length("10".into()));
        list.update(id, DimensionField::Height("20".into()));
        assert_eq!(memo.get(&list, pct(0)).mm2, 200.0);
        assert!((memo.get(&list, pct(50)).mm2 - 300.0).abs() < 1e-9);
        assert_eq!(memo.get(&list, pct(50)), aggregate(list.entries(), pct(50)));
    }
}
