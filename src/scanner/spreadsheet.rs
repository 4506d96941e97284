//! XLSX（先頭シート）の読み込み
//!
//! 1行目をヘッダー、2行目以降をデータ行として扱う。
//! セル値は [`CellValue`] を経由して文字列化してから照合する。

use super::{CandidateFile, FileScan, RowCollector};
use crate::error::{DoxbaseError, Result};
use crate::matcher::{CellValue, Query};
use crate::progress;
use crate::translator::{translate_headers, Translator};
use calamine::{open_workbook, Data, Reader, Xlsx};
use tracing::debug;

pub(super) fn scan<T>(file: &CandidateFile, query: &Query, translator: &T) -> Result<FileScan>
where
    T: Translator + ?Sized,
{
    let mut workbook: Xlsx<_> = open_workbook(&file.path)?;
    // アクティブシートではなく、常にブック内の最初のシートを読む
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DoxbaseError::NoWorksheet(file.path.display().to_string()))??;

    // calamine は最初の非空セルから範囲を切り出すため、A列からの位置に揃える
    let leading_columns = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    let mut rows = range.rows();

    let header_cells = rows
        .next()
        .ok_or_else(|| DoxbaseError::EmptyFile(file.path.display().to_string()))?;
    let headers = translate_headers(&row_texts(header_cells, leading_columns), translator)?;

    let data_rows = range.height().saturating_sub(1) as u64;
    debug!(file = %file.file_name, rows = data_rows, "worksheet loaded");

    let bar = progress::row_bar(&file.file_name, data_rows);
    let mut collector = RowCollector::new(query, headers);

    for cells in rows {
        collector.push(&row_texts(cells, leading_columns));
        progress::advance(&bar);
    }

    bar.finish_and_clear();
    Ok(collector.finish())
}

fn row_texts(cells: &[Data], leading_columns: usize) -> Vec<String> {
    std::iter::repeat(String::new())
        .take(leading_columns)
        .chain(cells.iter().map(|cell| CellValue::from(cell).to_text()))
        .collect()
}
