use calamine::{Data, ExcelDateTime};
use chrono::{NaiveDateTime, Timelike};
use std::path::PathBuf;

/// スプレッドシートのセル値（型付き）
///
/// 照合の直前に [`CellValue::to_text`] で一度だけ文字列化する。
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(ExcelDateTime),
    /// ISO形式の日付・期間（文字列のまま保持）
    Iso(String),
    /// `#DIV/0!` などのセルエラー
    Error(String),
}

impl CellValue {
    /// 照合・出力用の文字列表現
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) | CellValue::Iso(s) | CellValue::Error(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => format_float(*f),
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(dt) => format_excel_datetime(dt),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) => CellValue::Float(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::DateTime(dt.clone()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Iso(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}

/// 整数値の浮動小数は小数点なしで表示（30.0 → "30"）
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

fn format_excel_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        let total = (dt.as_f64() * 86_400.0).round() as i64;
        return format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60);
    }

    let naive: Option<NaiveDateTime> = dt.as_datetime();
    match naive {
        Some(naive) => format_datetime(&naive),
        None => format_float(dt.as_f64()),
    }
}

/// 日付セルの表示（秒未満は切り捨て、日付のみでも 00:00:00 を付ける）
fn format_datetime(naive: &NaiveDateTime) -> String {
    let whole_seconds = naive.with_nanosecond(0).unwrap_or(*naive);
    whole_seconds.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// ヒットした1行（翻訳済みヘッダー → 値）
///
/// 挿入順を保持する。同じキーが再度来た場合は値だけ上書きし、位置は最初のまま。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchedRow {
    fields: Vec<(String, String)>,
}

impl MatchedRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: String) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// 1ファイル分の検索結果
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub file_name: String,
    pub rows: Vec<MatchedRow>,
}
