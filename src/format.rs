//! 결과 값을 화면 표시용 문자열로 만든다 (en-US 형식).

use crate::units::AreaUnit;

/// 표시할 최대 소수 자릿수.
pub const MAX_FRACTION_DIGITS: usize = 4;

const GROUP_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';

/// 숫자를 천 단위 구분 기호와 최대 4자리 소수로 표시한다.
///
/// 값을 왕복 가능한 가장 짧은 10진 표기로 바꾼 뒤, 그 표기의 소수
/// 5번째 자리에서 0에서 먼 쪽으로 반올림한다. 끝의 0과 불필요한
/// 소수점은 제거한다. 예: `1234567.891249` → `"1,234,567.8912"`,
/// `2.5` → `"2.5"`, `3.0` → `"3"`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // f64의 Display는 지수 표기 없이 가장 짧은 왕복 표기를 낸다.
    let shortest = format!("{}", n.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let mut int_len = int_part.len();
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(
            frac_part
                .bytes()
                .chain(std::iter::repeat(b'0'))
                .take(MAX_FRACTION_DIGITS),
        )
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(MAX_FRACTION_DIGITS)
        .is_some_and(|d| *d >= b'5');
    if round_up && !carry_one(&mut digits) {
        digits.insert(0, 1);
        int_len += 1;
    }

    let (int_digits, frac_digits) = digits.split_at(int_len);
    let frac_len = frac_digits
        .iter()
        .rposition(|d| *d != 0)
        .map_or(0, |last| last + 1);

    let mut out = String::with_capacity(int_len + int_len / 3 + frac_len + 2);
    if n < 0.0 && digits.iter().any(|d| *d != 0) {
        out.push('-');
    }
    for (i, d) in int_digits.iter().enumerate() {
        if i > 0 && (int_len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(char::from(b'0' + d));
    }
    if frac_len > 0 {
        out.push(DECIMAL_SEPARATOR);
        out.extend(frac_digits[..frac_len].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

/// 마지막 자리에 1을 더한다. 맨 앞까지 올림이 넘치면 false.
fn carry_one(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return true;
        }
    }
    false
}

/// 값 뒤에 면적 단위 기호를 붙인다.
pub fn format_area(value: f64, unit: AreaUnit) -> String {
    format!("{} {}", format_number(value), unit.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_get_group_separators() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(3_312_000.0), "3,312,000");
        assert_eq!(format_number(1_150_000.0), "1,150,000");
    }

    #[test]
    fn fraction_is_trimmed_to_four_digits() {
        assert_eq!(format_number(2.88), "2.88");
        assert_eq!(format_number(0.123456), "0.1235");
        assert_eq!(format_number(1234.56789), "1,234.5679");
        assert_eq!(format_number(3.000001), "3");
        assert_eq!(format_number(0.00004), "0");
    }

    #[test]
    fn rounding_carries_into_integer_part() {
        assert_eq!(format_number(9.99996), "10");
        assert_eq!(format_number(999.99999), "1,000");
        assert_eq!(format_number(99_999.99999), "100,000");
    }

    #[test]
    fn exact_half_rounds_away_from_zero() {
        // 1 + 1/32 = 1.03125 는 이진수로 정확히 표현된다.
        assert_eq!(format_number(1.03125), "1.0313");
        assert_eq!(format_number(0.03125), "0.0313");
    }

    #[test]
    fn decimal_half_rounds_up_like_browser_output() {
        // 이진 전개로는 절반보다 조금 작지만 10진 표기는 정확히 절반인 값들.
        assert_eq!(format_number(0.00015), "0.0002");
        assert_eq!(format_number(2.00005), "2.0001");
        assert_eq!(format_number(8.00015), "8.0002");
        assert_eq!(format_number(3.00005), "3.0001");
    }

    #[test]
    fn tiny_and_huge_values_have_no_exponent() {
        assert_eq!(format_number(1e-7), "0");
        assert_eq!(format_number(1e21), "1,000,000,000,000,000,000,000");
    }

    #[test]
    fn negative_and_non_finite() {
        assert_eq!(format_number(-1234.5), "-1,234.5");
        assert_eq!(format_number(-0.00001), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "∞");
    }

    #[test]
    fn area_gets_unit_symbol() {
        assert_eq!(format_area(3.312, AreaUnit::SquareMeter), "3.312 m²");
        assert_eq!(format_area(33_120.0, AreaUnit::SquareCentimeter), "33,120 cm²");
    }
}
