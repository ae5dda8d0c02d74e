//! 단위 정의 및 변환 모듈 모음.

pub mod area;
pub mod length;

pub use area::{from_square_millimeter, AreaUnit};
pub use length::{convert_length, LengthUnit};
