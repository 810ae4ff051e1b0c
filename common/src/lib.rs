//! Taoyuan Address Common Library
//!
//! 桃園市の住所を戸政の門牌查詢に投げる前後の正規化処理。
//! CLI（ブラウザ操作・スプレッドシート入出力）から独立した純粋な文字列変換のみを持つ。
//!
//! ```
//! use address_common::simplify;
//!
//! let simplified = simplify("中正路1段076號");
//! assert_eq!(simplified.query, "中正路一段76號");
//! ```

pub mod error;
pub mod exception;
pub mod numeral;
pub mod postprocess;
pub mod rules;
pub mod splitter;
pub mod types;
pub mod width;

pub use error::{Error, Result};
pub use exception::{remove_neighborhood, ExceptionRules};
pub use numeral::{chinese_to_arabic, segment_numeral, NumeralRun};
pub use postprocess::{
    assemble_full_address, fallback, fallback_with_exceptions, format_short_address,
    is_blank_input, resolve_row,
};
pub use splitter::{simplify, split_at_marker, SimplifiedAddress};
pub use types::{
    AddressRecord, FullAddress, LookupOutcome, RowOutcome, CITY_NAME, NO_RESULT, QUERY_FAILED,
};
pub use width::{half_width, pad, visual_width};
