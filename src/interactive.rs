//! 対話式の1件查詢
//!
//! 住所を1件ずつ入力して查詢結果を表示する。空入力または `q` で終了。

use crate::error::{AddressFinderError, Result};
use crate::lookup::AddressLookup;
use crate::runner::{format_progress_line, process_address, RunOptions};
use address_common::ExceptionRules;
use dialoguer::Input;

/// 入力が終了指示か
pub fn is_quit(input: &str) -> bool {
    let input = input.trim();
    input.is_empty() || input.eq_ignore_ascii_case("q")
}

pub async fn run_interactive<L: AddressLookup>(
    lookup: &mut L,
    rules: &ExceptionRules,
    options: &RunOptions,
) -> Result<usize> {
    println!("===============今天想去哪阿?===============");
    println!("操作: 住所を入力して[Enter] / 空入力または[q]で終了\n");

    let mut count = 0;
    loop {
        let input = Input::<String>::new()
            .with_prompt("給我地址")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AddressFinderError::Prompt(e.to_string()))?;

        if is_quit(&input) {
            break;
        }

        count += 1;
        let log = |line: &str| println!("{}", line);
        let record = process_address(lookup, Some(input.as_str()), rules, options, &log).await;
        let line = format_progress_line(count, Some(input.trim()), &record, options.pad_width);
        println!("{}", line);
        if !record.short_address.is_empty() {
            println!("      不含鄰: {}", record.short_address);
        }
        println!();
    }

    println!("✔ {}件查詢しました", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quit() {
        assert!(is_quit(""));
        assert!(is_quit("  "));
        assert!(is_quit("q"));
        assert!(is_quit("Q"));
        assert!(!is_quit("中壢區中正路76號"));
    }
}
