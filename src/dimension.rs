//! 폼 상태(치수 행 목록, 여유율)를 명시적으로 소유하는 컨트롤러.
//!
//! GUI/CLI가 이 구조체를 소유하고, 계산 모듈에는 읽기 전용 슬라이스만 넘긴다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::units::LengthUnit;

/// 한 개의 직사각형 면적 입력 행.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionEntry {
    pub id: Uuid,
    /// 사용자가 입력한 원문 그대로의 길이
    pub length: String,
    /// 사용자가 입력한 원문 그대로의 높이
    pub height: String,
    pub unit: LengthUnit,
}

impl DimensionEntry {
    /// 빈 입력 행을 만든다.
    pub fn empty(unit: LengthUnit) -> Self {
        Self::new("", "", unit)
    }

    pub fn new(length: impl Into<String>, height: impl Into<String>, unit: LengthUnit) -> Self {
        Self {
            id: Uuid::new_v4(),
            length: length.into(),
            height: height.into(),
            unit,
        }
    }
}

/// 행 단위 편집. 필드를 통째로 교체한다.
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionField {
    Length(String),
    Height(String),
    Unit(LengthUnit),
}

/// 원자재 여유율 [%]. 0~50 범위로 제한된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct ContingencyPercent(u8);

impl ContingencyPercent {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 50;
    pub const DEFAULT: ContingencyPercent = ContingencyPercent(15);
    pub const ZERO: ContingencyPercent = ContingencyPercent(0);

    /// 범위를 넘는 값은 50으로 잘라낸다.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// `1 + p/100` 배율.
    pub fn factor(self) -> f64 {
        1.0 + f64::from(self.0) / 100.0
    }
}

impl Default for ContingencyPercent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for ContingencyPercent {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<ContingencyPercent> for u8 {
    fn from(value: ContingencyPercent) -> Self {
        value.0
    }
}

impl std::fmt::Display for ContingencyPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// 입력 행 목록. 변경될 때마다 `revision`이 증가한다.
#[derive(Debug, Clone)]
pub struct DimensionList {
    entries: Vec<DimensionEntry>,
    default_unit: LengthUnit,
    revision: u64,
}

impl DimensionList {
    pub fn new(default_unit: LengthUnit) -> Self {
        Self {
            entries: Vec::new(),
            default_unit,
            revision: 0,
        }
    }

    /// 처음 화면에 보여줄 예시 행(2400 x 1200 mm)을 포함한 목록.
    pub fn with_initial_entry(default_unit: LengthUnit) -> Self {
        let mut list = Self::new(default_unit);
        list.entries
            .push(DimensionEntry::new("2400", "1200", LengthUnit::Millimeter));
        list
    }

    pub fn entries(&self) -> &[DimensionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn default_unit(&self) -> LengthUnit {
        self.default_unit
    }

    /// 이후 추가되는 행의 기본 단위만 바꾼다. 기존 행은 그대로 둔다.
    pub fn set_default_unit(&mut self, unit: LengthUnit) {
        self.default_unit = unit;
    }

    pub fn get(&self, id: Uuid) -> Option<&DimensionEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// 빈 행을 추가하고 그 id를 반환한다.
    pub fn add(&mut self) -> Uuid {
        self.push(DimensionEntry::empty(self.default_unit))
    }

    pub fn push(&mut self, entry: DimensionEntry) -> Uuid {
        let id = entry.id;
        self.entries.push(entry);
        self.bump();
        id
    }

    /// id에 해당하는 행을 삭제한다. 없는 id면 false.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            self.bump();
        }
        removed
    }

    /// 한 필드를 교체한다. 없는 id면 false.
    pub fn update(&mut self, id: Uuid, field: DimensionField) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        match field {
            DimensionField::Length(v) => entry.length = v,
            DimensionField::Height(v) => entry.height = v,
            DimensionField::Unit(u) => entry.unit = u,
        }
        self.bump();
        true
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
