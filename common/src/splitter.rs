//! 問い合わせ前の住所簡略化
//!
//! ## 処理フロー
//! 1. 全角→半角
//! 2. 區の直後の里名、鄰番号を削除
//! 3. 最初に現れる區切り文字（號・及・、・.）で本体と後綴に分割
//! 4. 本体の「-」→「之」、段番号の漢数字化、號番号の算用数字化
//! 5. 號の直前の先頭ゼロを削除

use crate::rules::{apply_rules, pre_split_rules, query_rules, BUILDING_LEADING_ZERO};
use crate::width::half_width;

/// 號（建物番号）
pub const BUILDING_MARKER: char = '號';

/// 分割に使う文字
pub const SPLIT_MARKERS: [char; 4] = [BUILDING_MARKER, '及', '、', '.'];

/// 簡略化の結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimplifiedAddress {
    /// 入力そのまま（前後の空白のみ除去）
    pub original: String,
    /// 問い合わせ用の住所
    pub query: String,
    /// 號以降の後綴（例: 「及2樓」）
    pub suffix: String,
}

/// 最初の區切り文字で分割する
///
/// 號で分割した場合は號を本体側に含め、それ以外の文字は後綴側に含める。
pub fn split_at_marker(address: &str) -> (&str, &str) {
    match address
        .char_indices()
        .find(|(_, c)| SPLIT_MARKERS.contains(c))
    {
        Some((index, BUILDING_MARKER)) => {
            let end = index + BUILDING_MARKER.len_utf8();
            (&address[..end], &address[end..])
        }
        Some((index, _)) => (&address[..index], &address[index..]),
        None => (address, ""),
    }
}

/// 住所を問い合わせ用に簡略化する
pub fn simplify(raw: &str) -> SimplifiedAddress {
    let address = apply_rules(&pre_split_rules(), &half_width(raw));
    let (head, tail) = split_at_marker(&address);

    let query = half_width(&apply_rules(&query_rules(), head));
    let suffix = half_width(tail);

    SimplifiedAddress {
        original: raw.trim().to_string(),
        query: BUILDING_LEADING_ZERO.apply(&query).trim().to_string(),
        suffix: BUILDING_LEADING_ZERO.apply(&suffix).trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_strips_village_after_district() {
        let result = simplify("桃園區中正里76號");
        assert_eq!(result.query, "桃園區76號");
        assert_eq!(result.suffix, "");
        assert_eq!(result.original, "桃園區中正里76號");
    }

    #[test]
    fn test_simplify_strips_neighborhood_code_unconditionally() {
        // 例外里でも問い合わせ前の鄰番号は削除する
        let result = simplify("中壢區高上里5鄰中正路12號");
        assert_eq!(result.query, "中壢區中正路12號");
    }

    #[test]
    fn test_simplify_segment_and_leading_zero() {
        let result = simplify("中正路1段076號");
        assert_eq!(result.query, "中正路一段76號");
    }

    #[test]
    fn test_simplify_full_width_input() {
        let result = simplify("中壢區中正路１段０７６號　２樓");
        assert_eq!(result.query, "中壢區中正路一段76號");
        assert_eq!(result.suffix, "2樓");
    }

    #[test]
    fn test_simplify_suffix_after_building_marker() {
        let result = simplify("中壢區中正路76號及2樓");
        assert_eq!(result.query, "中壢區中正路76號");
        assert_eq!(result.suffix, "及2樓");
    }

    #[test]
    fn test_marker_precedence_building_first() {
        let result = simplify("中正路76號、78號");
        assert_eq!(result.query, "中正路76號");
        assert_eq!(result.suffix, "、78號");
    }

    #[test]
    fn test_marker_precedence_comma_first() {
        let result = simplify("中正路76、78號");
        assert_eq!(result.query, "中正路76");
        assert_eq!(result.suffix, "、78號");
    }

    #[test]
    fn test_simplify_without_markers() {
        let result = simplify("  中壢區中正路  ");
        assert_eq!(result.query, "中壢區中正路");
        assert_eq!(result.suffix, "");
        assert_eq!(result.original, "中壢區中正路");
    }

    #[test]
    fn test_simplify_hyphen_only_in_query() {
        let result = simplify("中正路5-1號3-2室");
        assert_eq!(result.query, "中正路5之1號");
        assert_eq!(result.suffix, "3-2室");
    }

    #[test]
    fn test_simplify_chinese_building_number() {
        assert_eq!(simplify("中正路三〇一號").query, "中正路301號");
        assert_eq!(simplify("中正路二段二十一號").query, "中正路二段21號");
    }

    #[test]
    fn test_simplify_dot_marker() {
        let result = simplify("中正路76.5樓");
        assert_eq!(result.query, "中正路76");
        assert_eq!(result.suffix, ".5樓");
    }

    #[test]
    fn test_simplify_suffix_leading_zero() {
        let result = simplify("中正路76號及078號");
        assert_eq!(result.suffix, "及78號");
    }

    #[test]
    fn test_simplify_is_stable_on_query() {
        let once = simplify("桃園區中正里3鄰中正路1段076號");
        let twice = simplify(&once.query);
        assert_eq!(twice.query, once.query);
    }

    #[test]
    fn test_simplify_empty() {
        assert_eq!(simplify(""), SimplifiedAddress::default());
    }
}
