//! 一括処理
//!
//! 1行ずつ「簡略化 → 查詢 → 組み立て → 書き込み → 保存」を行う。
//! 查詢のエラーはその行だけの失敗として記録し、処理は続ける。
//! 途中経過の出力は呼び出し側の `log` に渡す（一括処理ではプログレスバー経由）。

use crate::error::Result;
use crate::lookup::{AddressLookup, LookupOutcome};
use crate::workbook::{
    AddressSheet, FIRST_DATA_ROW, FULL_ADDRESS_COLUMN, SEQUENCE_COLUMN, SHORT_ADDRESS_COLUMN,
};
use address_common::{
    is_blank_input, pad, resolve_row, simplify, AddressRecord, ExceptionRules, FullAddress,
    RowOutcome, CITY_NAME,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 一括処理のオプション
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub city_name: String,
    /// コンソール出力で住所を揃える幅
    pub pad_width: usize,
    /// 查詢の前に待つ時間
    pub query_interval: Duration,
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            city_name: CITY_NAME.to_string(),
            pad_width: 50,
            query_interval: Duration::from_secs(5),
            verbose: false,
        }
    }
}

/// 処理件数の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub found: usize,
    pub not_found: usize,
    pub failed: usize,
    pub blank: usize,
}

impl RunSummary {
    fn record(&mut self, full_address: &FullAddress) {
        self.total += 1;
        match full_address {
            FullAddress::Blank => self.blank += 1,
            FullAddress::Resolved(_) => self.found += 1,
            FullAddress::NotFound => self.not_found += 1,
            FullAddress::Failed => self.failed += 1,
        }
    }
}

/// 1件の住所を処理する
///
/// タイムアウトの警告は常に、簡略化と查詢の経過は `verbose` のときだけ `log` に渡す。
pub async fn process_address<L: AddressLookup>(
    lookup: &mut L,
    raw: Option<&str>,
    rules: &ExceptionRules,
    options: &RunOptions,
    log: &dyn Fn(&str),
) -> AddressRecord {
    let raw = match raw {
        Some(raw) if !is_blank_input(raw) => raw,
        _ => return resolve_row(None, "", RowOutcome::Blank, rules, &options.city_name),
    };

    let simplified = simplify(raw);
    if options.verbose {
        log(&format!(
            "  簡略化: {} → {}（後綴: {}）",
            simplified.original, simplified.query, simplified.suffix
        ));
    }

    if !options.query_interval.is_zero() {
        tokio::time::sleep(options.query_interval).await;
    }

    let outcome = match lookup.lookup(&simplified.query).await {
        Ok(LookupOutcome::TimedOut) => {
            log(&format!("  ⚠ 查詢がタイムアウトしました: {}", simplified.query));
            RowOutcome::NotFound
        }
        Ok(outcome) => {
            if options.verbose {
                log(&format!("  查詢結果: {:?}", outcome));
            }
            RowOutcome::from(outcome)
        }
        Err(e) => {
            if options.verbose {
                log(&format!("  {}", e));
            }
            RowOutcome::Failed
        }
    };

    resolve_row(Some(&simplified), raw, outcome, rules, &options.city_name)
}

/// コンソール出力用の1行
pub fn format_progress_line(
    index: usize,
    raw: Option<&str>,
    record: &AddressRecord,
    pad_width: usize,
) -> String {
    match (raw, &record.full_address) {
        (Some(raw), full) if *full != FullAddress::Blank => {
            format!("{:04}. {} → {}", index, pad(raw, pad_width), full)
        }
        _ => format!("{:04}. 空白資料", index),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} ({eta})") {
        bar.set_style(style);
    }
    bar
}

/// シートのB欄を順に処理し、A・C・D欄に書き込む
///
/// 1件処理するごとに保存するため、途中で止めてもそこまでの結果は残る。
pub async fn run_sheet<L: AddressLookup>(
    sheet: &mut AddressSheet,
    lookup: &mut L,
    rules: &ExceptionRules,
    options: &RunOptions,
) -> Result<RunSummary> {
    let addresses = sheet.input_addresses();
    let mut summary = RunSummary::default();
    let bar = progress_bar(addresses.len());

    for (offset, raw) in addresses.iter().enumerate() {
        let index = offset + 1;
        let row = offset + FIRST_DATA_ROW;
        let raw = raw.as_deref();

        let log = |line: &str| bar.println(line);
        let record = process_address(lookup, raw, rules, options, &log).await;
        bar.println(format_progress_line(index, raw, &record, options.pad_width));

        sheet.write_cell(row, SEQUENCE_COLUMN, index);
        sheet.write_cell(row, FULL_ADDRESS_COLUMN, record.full_address.to_string());
        sheet.write_cell(row, SHORT_ADDRESS_COLUMN, record.short_address.clone());
        sheet.save()?;

        summary.record(&record.full_address);
        bar.inc(1);
    }

    bar.finish_and_clear();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_record() {
        let mut summary = RunSummary::default();
        summary.record(&FullAddress::Resolved("桃園市".into()));
        summary.record(&FullAddress::NotFound);
        summary.record(&FullAddress::Failed);
        summary.record(&FullAddress::Blank);
        assert_eq!(
            summary,
            RunSummary { total: 4, found: 1, not_found: 1, failed: 1, blank: 1 }
        );
    }

    #[test]
    fn test_format_progress_line() {
        let record = AddressRecord {
            full_address: FullAddress::NotFound,
            short_address: String::new(),
        };
        let line = format_progress_line(7, Some("中正路76號"), &record, 14);
        assert_eq!(line, "0007. 中正路76號     → 查無結果");

        let blank = AddressRecord {
            full_address: FullAddress::Blank,
            short_address: String::new(),
        };
        assert_eq!(format_progress_line(12, None, &blank, 50), "0012. 空白資料");
    }
}
