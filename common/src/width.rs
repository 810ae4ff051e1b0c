//! 文字幅の変換と表示幅
//!
//! - 全角→半角変換（U+3000 と U+FF01〜U+FF5E）
//! - 東アジア幅（W/F）を2桁とする表示幅の計算と空白埋め

use unicode_width::UnicodeWidthChar;

/// 全角英数・記号と全角空白を半角に変換する
///
/// 対象外の文字はそのまま残すため、何度適用しても結果は変わらない。
pub fn half_width(text: &str) -> String {
    text.chars()
        .map(|c| match c as u32 {
            0x3000 => ' ',
            code @ 0xFF01..=0xFF5E => char::from_u32(code - 0xFEE0).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// 1文字の表示幅（全角・ワイド文字は2、それ以外は1）
fn char_columns(c: char) -> usize {
    match c.width() {
        Some(2) => 2,
        _ => 1,
    }
}

/// 文字列の表示幅
pub fn visual_width(text: &str) -> usize {
    text.chars().map(char_columns).sum()
}

/// 表示幅が `target_width` に達するまで末尾に半角空白を足す
///
/// すでに幅が足りている場合は切り詰めずにそのまま返す。
pub fn pad(text: &str, target_width: usize) -> String {
    let width = visual_width(text);
    let mut padded = String::with_capacity(text.len() + target_width.saturating_sub(width));
    padded.push_str(text);
    for _ in width..target_width {
        padded.push(' ');
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_width_digits_and_letters() {
        assert_eq!(half_width("中正路１２３號"), "中正路123號");
        assert_eq!(half_width("ＡＢｃ－１"), "ABc-1");
        assert_eq!(half_width("，"), ",");
    }

    #[test]
    fn test_half_width_ideographic_space() {
        assert_eq!(half_width("中壢區　中正路"), "中壢區 中正路");
    }

    #[test]
    fn test_half_width_boundaries() {
        // U+FF01（！）とU+FF5E（～）は範囲内、U+FF5F は範囲外
        assert_eq!(half_width("\u{FF01}\u{FF5E}\u{FF5F}"), "!~\u{FF5F}");
        assert_eq!(half_width(""), "");
    }

    #[test]
    fn test_half_width_is_idempotent() {
        let samples = ["桃園市中壢區中正路１段０７６號", "ｆｏｏ　ｂａｒ", "plain", ""];
        for s in samples {
            let once = half_width(s);
            assert_eq!(half_width(&once), once);
        }
    }

    #[test]
    fn test_visual_width() {
        assert_eq!(visual_width("abc"), 3);
        assert_eq!(visual_width("中正路"), 6);
        assert_eq!(visual_width("中正路76號"), 10);
        assert_eq!(visual_width("１"), 2);
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab", 5), "ab   ");
        assert_eq!(pad("中正", 6), "中正  ");
        assert_eq!(visual_width(&pad("中壢區中正路76號", 50)), 50);
    }

    #[test]
    fn test_pad_no_truncation() {
        assert_eq!(pad("中正路76號", 4), "中正路76號");
        assert_eq!(pad("abcd", 4), "abcd");
    }
}
