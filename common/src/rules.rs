//! 住所の書き換えルール
//!
//! 各ルールは「正規表現 + 置換関数」の組で、順番に適用する。
//! 適用順に意味があるため、ルールごとに単体テストを置く。

use crate::numeral::{chinese_to_arabic, segment_numeral};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// 書き換えルール
pub struct RewriteRule {
    /// ルール名（ログ・テスト用）
    pub name: &'static str,
    pattern: Regex,
    rewrite: fn(&Captures) -> String,
}

impl RewriteRule {
    pub fn new(name: &'static str, pattern: Regex, rewrite: fn(&Captures) -> String) -> Self {
        Self { name, pattern, rewrite }
    }

    /// 一致箇所をすべて置換する
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| (self.rewrite)(caps))
            .into_owned()
    }
}

impl std::fmt::Debug for RewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// ルール列を順に適用する
pub fn apply_rules(rules: &[&RewriteRule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

lazy_static! {
    /// 「○○區××里」→「○○區」（區の直後の里名を削除）
    pub static ref VILLAGE_AFTER_DISTRICT: RewriteRule = RewriteRule::new(
        "village_after_district",
        Regex::new(r"([\x{4e00}-\x{9fff}]{1,5}區)[\x{4e00}-\x{9fff}]{1,2}里").unwrap(),
        |caps| caps[1].to_string(),
    );

    /// 「5鄰」などの鄰番号を削除
    pub static ref NEIGHBORHOOD_CODE: RewriteRule = RewriteRule::new(
        "neighborhood_code",
        Regex::new(r"[0-9]{1,3}鄰").unwrap(),
        |_| String::new(),
    );

    /// 「-」→「之」（5-1號 → 5之1號）
    pub static ref HYPHEN_TO_ZHI: RewriteRule = RewriteRule::new(
        "hyphen_to_zhi",
        Regex::new(r"-").unwrap(),
        |_| "之".to_string(),
    );

    /// 路・街・道の直後の段番号を漢数字にする（1段 → 一段）
    pub static ref ROAD_SEGMENT: RewriteRule = RewriteRule::new(
        "road_segment",
        Regex::new(r"([路街道])([0-9]+)段").unwrap(),
        |caps| {
            let digits = &caps[2];
            let trimmed = digits.trim_start_matches('0');
            let numeral = if trimmed.is_empty() {
                segment_numeral(0)
            } else {
                trimmed.parse::<u32>().ok().and_then(segment_numeral)
            };
            format!("{}{}段", &caps[1], numeral.as_deref().unwrap_or(digits))
        },
    );

    /// 號の直前の漢数字を算用数字にする（三〇一號 → 301號）
    pub static ref BUILDING_NUMERAL: RewriteRule = RewriteRule::new(
        "building_numeral",
        Regex::new(r"([零〇一二三四五六七八九十百千]+)號").unwrap(),
        |caps| format!("{}號", chinese_to_arabic(&caps[1])),
    );

    /// 號の直前の数字の先頭ゼロを削除（016號 → 16號）
    pub static ref BUILDING_LEADING_ZERO: RewriteRule = RewriteRule::new(
        "building_leading_zero",
        Regex::new(r"(^|[^0-9])0+([0-9]+號)").unwrap(),
        |caps| format!("{}{}", &caps[1], &caps[2]),
    );

    /// 鄰の直前の数字の先頭ゼロを削除（003鄰 → 3鄰）
    pub static ref NEIGHBORHOOD_LEADING_ZERO: RewriteRule = RewriteRule::new(
        "neighborhood_leading_zero",
        Regex::new(r"(^|[^0-9])0+([0-9]+鄰)").unwrap(),
        |caps| format!("{}{}", &caps[1], &caps[2]),
    );

    /// 半角空白を削除
    pub static ref SPACES: RewriteRule = RewriteRule::new(
        "spaces",
        Regex::new(r" ").unwrap(),
        |_| String::new(),
    );

    /// 半角「,」→ 全角「，」
    pub static ref COMMA: RewriteRule = RewriteRule::new(
        "comma",
        Regex::new(r",").unwrap(),
        |_| "，".to_string(),
    );

    /// 単独の1桁段番号を漢数字にする（3段 → 三段、13段はそのまま）
    pub static ref LONE_SEGMENT_DIGIT: RewriteRule = RewriteRule::new(
        "lone_segment_digit",
        Regex::new(r"(^|[^0-9])([1-9])段").unwrap(),
        |caps| {
            let numeral = caps[2]
                .parse::<u32>()
                .ok()
                .and_then(segment_numeral)
                .unwrap_or_else(|| caps[2].to_string());
            format!("{}{}段", &caps[1], numeral)
        },
    );

    /// 「里」から次の「鄰」までを「里」だけにする
    pub static ref VILLAGE_TO_NEIGHBORHOOD: RewriteRule = RewriteRule::new(
        "village_to_neighborhood",
        Regex::new(r"里.*?鄰").unwrap(),
        |_| "里".to_string(),
    );

    /// 「<数字>鄰」を含むか判定する
    pub static ref HAS_NEIGHBORHOOD_CODE: Regex = Regex::new(r"[0-9]+鄰").unwrap();
}

/// 分割前に適用するルール（里名・鄰番号の削除）
pub fn pre_split_rules() -> [&'static RewriteRule; 2] {
    [&*VILLAGE_AFTER_DISTRICT, &*NEIGHBORHOOD_CODE]
}

/// 問い合わせ用文字列に適用するルール
pub fn query_rules() -> [&'static RewriteRule; 3] {
    [&*HYPHEN_TO_ZHI, &*ROAD_SEGMENT, &*BUILDING_NUMERAL]
}

/// 書き込み用の短縮住所に適用するルール（半角変換の後）
pub fn short_address_rules() -> [&'static RewriteRule; 6] {
    [
        &*SPACES,
        &*HYPHEN_TO_ZHI,
        &*COMMA,
        &*NEIGHBORHOOD_LEADING_ZERO,
        &*BUILDING_LEADING_ZERO,
        &*LONE_SEGMENT_DIGIT,
    ]
}
