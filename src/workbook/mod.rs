//! 住所スプレッドシートの読み書き
//!
//! - 読み込み: calamine（全シートを読み込み、先頭シートを住所シートとして扱う）
//! - 書き込み: rust_xlsxwriter（1件ごとにブック全体を書き直す。他のシートもそのまま残す）
//!
//! 行・列は1始まり。1行目は見出し行。

use crate::error::{AddressFinderError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

/// 連番の列（A）
pub const SEQUENCE_COLUMN: usize = 1;
/// 入力住所の列（B）
pub const INPUT_COLUMN: usize = 2;
/// 完整地址の列（C）
pub const FULL_ADDRESS_COLUMN: usize = 3;
/// 不含鄰的地址の列（D）
pub const SHORT_ADDRESS_COLUMN: usize = 4;
/// データの開始行
pub const FIRST_DATA_ROW: usize = 2;

const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// セルの値
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    /// Excelのシリアル日時
    DateTime(f64),
}

impl CellValue {
    /// 文字列として取得（空セルは `None`）
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(text) => Some(text.clone()),
            CellValue::Number(n) | CellValue::DateTime(n) if n.fract() == 0.0 => {
                Some(format!("{}", *n as i64))
            }
            CellValue::Number(n) | CellValue::DateTime(n) => Some(n.to_string()),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::String(s) if s.is_empty() => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Text(b.to_string()),
            Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        if text.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(text.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::from(text.as_str())
    }
}

impl From<usize> for CellValue {
    fn from(n: usize) -> Self {
        CellValue::Number(n as f64)
    }
}

/// シート1枚分のセル
#[derive(Debug, Clone, Default)]
struct SheetCells {
    name: String,
    rows: Vec<Vec<CellValue>>,
}

impl SheetCells {
    fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        if row == 0 || col == 0 {
            return None;
        }
        self.rows.get(row - 1).and_then(|r| r.get(col - 1))
    }

    fn set(&mut self, row: usize, col: usize, value: CellValue) {
        if row == 0 || col == 0 {
            return;
        }
        if self.rows.len() < row {
            self.rows.resize_with(row, Vec::new);
        }
        let cells = &mut self.rows[row - 1];
        if cells.len() < col {
            cells.resize_with(col, CellValue::default);
        }
        cells[col - 1] = value;
    }
}

/// メモリ上に展開したブック
///
/// 先頭シートが住所シート。`read_cell` / `write_cell` は先頭シートを対象にする。
#[derive(Debug, Clone)]
pub struct AddressSheet {
    path: PathBuf,
    sheets: Vec<SheetCells>,
}

impl AddressSheet {
    /// 空のシートを作る（保存先のみ指定）
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheets: vec![SheetCells {
                name: DEFAULT_SHEET_NAME.to_string(),
                rows: Vec::new(),
            }],
        }
    }

    /// 全シートを読み込む
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AddressFinderError::FileNotFound(path.display().to_string()));
        }

        let mut workbook = open_workbook_auto(path)
            .map_err(|e| AddressFinderError::WorkbookRead(format!("{}: {}", path.display(), e)))?;
        let names = workbook.sheet_names();
        if names.is_empty() {
            return Err(AddressFinderError::WorkbookRead("シートがありません".into()));
        }

        let mut sheets = Vec::with_capacity(names.len());
        for name in names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| AddressFinderError::WorkbookRead(format!("{}: {}", name, e)))?;

            let mut rows = Vec::new();
            if let Some((last_row, last_col)) = range.end() {
                for row in 0..=last_row {
                    let values = (0..=last_col)
                        .map(|col| {
                            range
                                .get_value((row, col))
                                .map(CellValue::from)
                                .unwrap_or_default()
                        })
                        .collect();
                    rows.push(values);
                }
            }
            sheets.push(SheetCells { name, rows });
        }

        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存先を変更する
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// 住所シート（先頭シート）の名前
    pub fn sheet_name(&self) -> &str {
        &self.address_sheet().name
    }

    /// ブック内の全シート名（読み込み順）
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// 最終行（1始まり、空シートは0）
    pub fn max_row(&self) -> usize {
        self.address_sheet().rows.len()
    }

    pub fn read_cell(&self, row: usize, col: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.address_sheet().get(row, col).unwrap_or(EMPTY)
    }

    /// 任意のシートのセルを読む（シートが無ければ空セル）
    pub fn read_sheet_cell(&self, sheet_name: &str, row: usize, col: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.sheets
            .iter()
            .find(|s| s.name == sheet_name)
            .and_then(|s| s.get(row, col))
            .unwrap_or(EMPTY)
    }

    pub fn write_cell(&mut self, row: usize, col: usize, value: impl Into<CellValue>) {
        self.sheets[0].set(row, col, value.into());
    }

    /// B欄の入力住所（2行目〜最終行）
    pub fn input_addresses(&self) -> Vec<Option<String>> {
        (FIRST_DATA_ROW..=self.max_row())
            .map(|row| self.read_cell(row, INPUT_COLUMN).as_text())
            .collect()
    }

    /// ブック全体を書き出す
    pub fn save(&self) -> Result<()> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let date = Format::new().set_num_format("yyyy-mm-dd");
        let date_time = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

        for (index, sheet) in self.sheets.iter().enumerate() {
            let is_address_sheet = index == 0;
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet.name.as_str())?;
            if is_address_sheet {
                worksheet.set_column_width((INPUT_COLUMN - 1) as u16, 40)?;
                worksheet.set_column_width((FULL_ADDRESS_COLUMN - 1) as u16, 50)?;
                worksheet.set_column_width((SHORT_ADDRESS_COLUMN - 1) as u16, 50)?;
            }

            for (r, row) in sheet.rows.iter().enumerate() {
                for (c, cell) in row.iter().enumerate() {
                    let (r, c) = (r as u32, c as u16);
                    match cell {
                        CellValue::Empty => {}
                        CellValue::Text(text) if is_address_sheet && r == 0 => {
                            worksheet.write_string_with_format(r, c, text, &header)?;
                        }
                        CellValue::Text(text) => {
                            worksheet.write_string(r, c, text)?;
                        }
                        CellValue::Number(n) => {
                            worksheet.write_number(r, c, *n)?;
                        }
                        CellValue::DateTime(n) if n.fract() == 0.0 => {
                            worksheet.write_number_with_format(r, c, *n, &date)?;
                        }
                        CellValue::DateTime(n) => {
                            worksheet.write_number_with_format(r, c, *n, &date_time)?;
                        }
                    }
                }
            }
        }

        workbook.save(&self.path)?;
        Ok(())
    }

    fn address_sheet(&self) -> &SheetCells {
        &self.sheets[0]
    }
}

/// 上書き前にバックアップを作る（`<名前>.<日時>.bak.<拡張子>`）
pub fn backup(path: &Path) -> Result<PathBuf> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("address_data");
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("xlsx");
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");

    let backup_path = path.with_file_name(format!("{}.{}.bak.{}", stem, stamp, extension));
    std::fs::copy(path, &backup_path)?;
    Ok(backup_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read_cell() {
        let mut sheet = AddressSheet::new("test.xlsx");
        sheet.write_cell(1, 2, "查詢地址");
        sheet.write_cell(3, 4, "桃園市中壢區中正路76號");

        assert_eq!(sheet.max_row(), 3);
        assert_eq!(sheet.read_cell(1, 2), &CellValue::Text("查詢地址".into()));
        assert_eq!(sheet.read_cell(2, 2), &CellValue::Empty);
        assert_eq!(sheet.read_cell(3, 4).as_text().as_deref(), Some("桃園市中壢區中正路76號"));
        assert_eq!(sheet.read_cell(0, 0), &CellValue::Empty);
    }

    #[test]
    fn test_input_addresses() {
        let mut sheet = AddressSheet::new("test.xlsx");
        sheet.write_cell(1, 2, "查詢地址");
        sheet.write_cell(2, 2, "中壢區中正路76號");
        sheet.write_cell(4, 2, "桃園區中山路1號");

        assert_eq!(
            sheet.input_addresses(),
            vec![
                Some("中壢區中正路76號".to_string()),
                None,
                Some("桃園區中山路1號".to_string()),
            ]
        );
    }

    #[test]
    fn test_cell_value_as_text() {
        assert_eq!(CellValue::Number(12.0).as_text().as_deref(), Some("12"));
        assert_eq!(CellValue::Number(1.5).as_text().as_deref(), Some("1.5"));
        assert_eq!(CellValue::from(""), CellValue::Empty);
        assert_eq!(CellValue::from(3usize), CellValue::Number(3.0));
        assert_eq!(CellValue::DateTime(45000.0).as_text().as_deref(), Some("45000"));
    }

    #[test]
    fn test_write_cell_targets_first_sheet() {
        let mut sheet = AddressSheet::new("test.xlsx");
        sheet.write_cell(2, 3, "桃園市中壢區中正路76號");

        assert_eq!(sheet.sheet_names(), vec!["Sheet1"]);
        assert_eq!(
            sheet.read_sheet_cell("Sheet1", 2, 3),
            &CellValue::Text("桃園市中壢區中正路76號".into())
        );
        assert_eq!(sheet.read_sheet_cell("客戶", 2, 3), &CellValue::Empty);
    }
}
