//! 면적 합산 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 사용한다.

pub mod app;
pub mod area;
pub mod config;
pub mod conversion;
pub mod dimension;
pub mod format;
pub mod logging;
pub mod ui_cli;
pub mod units;
