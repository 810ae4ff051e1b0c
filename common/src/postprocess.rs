//! 問い合わせ後の住所組み立てと整形
//!
//! - 完整地址 = 市名 + 問い合わせ結果 + 後綴（結果が市名で始まる場合は市名を重ねない）
//! - 短縮住所 = 完整地址から「里」〜「鄰」を除去（例外里を除く）して整形
//! - 結果がない場合は元の住所に「里」があればそれを使う

use crate::exception::{remove_neighborhood, ExceptionRules};
use crate::rules::{apply_rules, short_address_rules, COMMA, HAS_NEIGHBORHOOD_CODE};
use crate::splitter::SimplifiedAddress;
use crate::types::{AddressRecord, FullAddress, RowOutcome, CITY_NAME, QUERY_FAILED};
use crate::width::half_width;

/// 村里の標示
const VILLAGE_MARKER: char = '里';

fn with_city_prefix(city: &str, address: &str) -> String {
    if address.starts_with(city) {
        address.to_string()
    } else {
        format!("{}{}", city, address)
    }
}

/// 問い合わせ結果と後綴から完整地址を組み立てる
pub fn assemble_full_address(city: &str, result: &str, suffix: &str) -> String {
    let full = format!("{}{}", with_city_prefix(city, result), suffix);
    COMMA.apply(&half_width(&full))
}

/// 書き込み用に短縮住所を整形する
pub fn format_short_address(address: &str) -> String {
    apply_rules(&short_address_rules(), &half_width(address))
        .trim()
        .to_string()
}

/// 結果がない場合の代替住所
///
/// 元の住所に「里」があれば市名を付けて返し、なければ「查詢失敗」。
pub fn fallback(original: &str) -> String {
    fallback_for_city(CITY_NAME, original)
}

fn fallback_for_city(city: &str, original: &str) -> String {
    if original.contains(VILLAGE_MARKER) {
        with_city_prefix(city, original)
    } else {
        QUERY_FAILED.to_string()
    }
}

/// 例外里を考慮した代替住所
///
/// 例外里の住所は鄰番号がなければ使えないため「查詢失敗」とする。
pub fn fallback_with_exceptions(original: &str, rules: &ExceptionRules) -> String {
    fallback_with_exceptions_for_city(CITY_NAME, original, rules)
}

fn fallback_with_exceptions_for_city(city: &str, original: &str, rules: &ExceptionRules) -> String {
    if original.contains(VILLAGE_MARKER)
        && rules.matches(original).is_some()
        && !HAS_NEIGHBORHOOD_CODE.is_match(&half_width(original))
    {
        return QUERY_FAILED.to_string();
    }
    fallback_for_city(city, original)
}

/// 1行分の結果を組み立てる
///
/// * `address` - 簡略化済みの住所（空入力の場合は `None`）
/// * `outcome` - 問い合わせの結果
pub fn resolve_row(
    address: Option<&SimplifiedAddress>,
    raw: &str,
    outcome: RowOutcome,
    rules: &ExceptionRules,
    city: &str,
) -> AddressRecord {
    let (full_address, short) = match (outcome, address) {
        (RowOutcome::Blank, _) | (_, None) => (FullAddress::Blank, String::new()),
        (RowOutcome::Found(result), Some(address)) => {
            let full = assemble_full_address(city, &result, &address.suffix);
            let short = remove_neighborhood(&full, rules);
            (FullAddress::Resolved(full), short)
        }
        (RowOutcome::NotFound, Some(address)) => (
            FullAddress::NotFound,
            fallback_with_exceptions_for_city(city, &address.original, rules),
        ),
        (RowOutcome::Failed, Some(_)) => (
            FullAddress::Failed,
            fallback_with_exceptions_for_city(city, raw, rules),
        ),
    };

    AddressRecord {
        full_address,
        short_address: format_short_address(&short),
    }
}

/// 空欄とみなす入力か
pub fn is_blank_input(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed == "nan"
}
