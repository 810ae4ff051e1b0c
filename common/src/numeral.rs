//! 漢数字⇔算用数字の変換
//!
//! - 段番号: 算用数字（1〜99）→ 漢数字（十進の「十」表記）
//! - 號番号: 漢数字 → 算用数字
//!   - 位取り文字（十・百・千）を含まない場合は1文字ずつ置換（三〇一 → 301）
//!   - 位取り文字を含む場合は位取りとして計算（二十一 → 21）

const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// 段番号を漢数字にする
///
/// 0 は「零」、1〜99 は「十」を使った表記、それ以外は `None`。
pub fn segment_numeral(n: u32) -> Option<String> {
    let tens = (n / 10) as usize;
    let ones = (n % 10) as usize;

    let mut out = String::new();
    match n {
        0..=9 => out.push(DIGITS[ones]),
        10..=99 => {
            if tens > 1 {
                out.push(DIGITS[tens]);
            }
            out.push('十');
            if ones != 0 {
                out.push(DIGITS[ones]);
            }
        }
        _ => return None,
    }
    Some(out)
}

/// 漢数字1文字の値（零・〇・一〜九）
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '零' | '〇' => Some(0),
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

/// 位取り文字の値（十・百・千）
pub fn unit_value(c: char) -> Option<u32> {
    match c {
        '十' => Some(10),
        '百' => Some(100),
        '千' => Some(1000),
        _ => None,
    }
}

/// 漢数字列の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralRun<'a> {
    /// 数字のみ（1文字ずつ置換する）
    DigitRun(&'a str),
    /// 十・百・千を含む（位取りとして計算する）
    HasUnitMarkers(&'a str),
}

impl<'a> NumeralRun<'a> {
    /// 文字集合を見て変換方式を決める
    pub fn classify(run: &'a str) -> Self {
        if run.chars().any(|c| unit_value(c).is_some()) {
            NumeralRun::HasUnitMarkers(run)
        } else {
            NumeralRun::DigitRun(run)
        }
    }

    /// 算用数字の文字列にする
    pub fn to_arabic(&self) -> String {
        match *self {
            NumeralRun::DigitRun(run) => transliterate_digits(run),
            NumeralRun::HasUnitMarkers(run) => parse_place_value(run).to_string(),
        }
    }
}

/// 1文字ずつ算用数字に置換する（位取りは行わない）
pub fn transliterate_digits(run: &str) -> String {
    run.chars()
        .map(|c| match digit_value(c).and_then(|d| char::from_digit(d, 10)) {
            Some(d) => d,
            None => c,
        })
        .collect()
}

/// 位取り表記として数値を計算する
///
/// 位取り文字の直前に数字がなければ1とみなす（十五 → 15）。
pub fn parse_place_value(run: &str) -> u32 {
    let mut total = 0;
    let mut pending: Option<u32> = None;

    for c in run.chars() {
        if let Some(d) = digit_value(c) {
            pending = Some(d);
        } else if let Some(unit) = unit_value(c) {
            total += pending.take().unwrap_or(1) * unit;
        }
    }

    total + pending.unwrap_or(0)
}

/// 漢数字列を算用数字の文字列に変換する
pub fn chinese_to_arabic(run: &str) -> String {
    NumeralRun::classify(run).to_arabic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_segment_numeral_single_digit() {
        assert_eq!(segment_numeral(1).as_deref(), Some("一"));
        assert_eq!(segment_numeral(9).as_deref(), Some("九"));
        assert_eq!(segment_numeral(0).as_deref(), Some("零"));
    }

    #[test]
    fn test_segment_numeral_teens_and_tens() {
        assert_eq!(segment_numeral(10).as_deref(), Some("十"));
        assert_eq!(segment_numeral(16).as_deref(), Some("十六"));
        assert_eq!(segment_numeral(20).as_deref(), Some("二十"));
        assert_eq!(segment_numeral(47).as_deref(), Some("四十七"));
        assert_eq!(segment_numeral(99).as_deref(), Some("九十九"));
    }

    #[test]
    fn test_segment_numeral_out_of_range() {
        assert_eq!(segment_numeral(100), None);
        assert_eq!(segment_numeral(1234), None);
    }

    #[test]
    fn test_segment_numeral_injective() {
        let rendered: HashSet<String> = (1..=99).filter_map(segment_numeral).collect();
        assert_eq!(rendered.len(), 99);
    }

    #[test]
    fn test_classify() {
        assert_eq!(NumeralRun::classify("三〇一"), NumeralRun::DigitRun("三〇一"));
        assert_eq!(NumeralRun::classify("二十一"), NumeralRun::HasUnitMarkers("二十一"));
        assert_eq!(NumeralRun::classify("一百"), NumeralRun::HasUnitMarkers("一百"));
    }

    #[test]
    fn test_digit_run_is_transliterated() {
        assert_eq!(chinese_to_arabic("三〇一"), "301");
        assert_eq!(chinese_to_arabic("七六"), "76");
        assert_eq!(chinese_to_arabic("零五"), "05");
    }

    #[test]
    fn test_place_value() {
        assert_eq!(chinese_to_arabic("十"), "10");
        assert_eq!(chinese_to_arabic("十五"), "15");
        assert_eq!(chinese_to_arabic("二十一"), "21");
        assert_eq!(chinese_to_arabic("一百零五"), "105");
        assert_eq!(chinese_to_arabic("三百"), "300");
        assert_eq!(chinese_to_arabic("千二百"), "1200");
    }

    #[test]
    fn test_segment_round_trip_through_place_value() {
        for n in 1..=99 {
            let text = segment_numeral(n).unwrap();
            assert_eq!(chinese_to_arabic(&text), n.to_string(), "n = {}", n);
        }
    }
}
