//! 行照合モジュール
//!
//! クエリ（大文字小文字を区別しない部分一致）で各行を判定し、
//! ヒットした行を翻訳済みヘッダーと組み合わせて [`MatchedRow`] にする。

mod types;

pub use types::{CellValue, FileResult, MatchedRow};

/// フルネームとみなす列範囲（0始まりで2〜4列目）
const FULL_NAME_COLUMNS: std::ops::Range<usize> = 2..5;

/// 空セルの表示値
pub const MISSING_VALUE: &str = "None";

/// 検索クエリ
#[derive(Debug, Clone)]
pub struct Query {
    raw: String,
    needle: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// 入力されたままのクエリ
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// フルネーム列またはいずれかのセルにクエリが含まれるか
    pub fn is_match<S: AsRef<str>>(&self, row: &[S]) -> bool {
        if full_name(row).contains(&self.needle) {
            return true;
        }

        row.iter()
            .any(|cell| cell.as_ref().to_lowercase().contains(&self.needle))
    }
}

/// 両端の `\` と `"` を取り除く
pub fn trim_escapes(value: &str) -> &str {
    value.trim_matches(|c| c == '\\' || c == '"')
}

/// 3〜5列目を空白で連結したフルネーム（小文字化済み）
///
/// 列が足りない行は存在する分だけを連結する。
pub fn full_name<S: AsRef<str>>(row: &[S]) -> String {
    let start = FULL_NAME_COLUMNS.start.min(row.len());
    let end = FULL_NAME_COLUMNS.end.min(row.len());
    let joined = row[start..end]
        .iter()
        .map(|cell| cell.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    trim_escapes(&joined).to_lowercase()
}

/// ヘッダーと値を組み合わせてヒット行を作る
///
/// 長さが異なる場合は短い方に合わせる（余った列は捨てる）。
pub fn build_matched_row<H: AsRef<str>, S: AsRef<str>>(headers: &[H], row: &[S]) -> MatchedRow {
    let mut matched = MatchedRow::new();
    for (header, value) in headers.iter().zip(row.iter()) {
        let value = trim_escapes(value.as_ref());
        let value = if value.is_empty() { MISSING_VALUE } else { value };
        matched.insert(trim_escapes(header.as_ref()).to_string(), value.to_string());
    }
    matched
}
