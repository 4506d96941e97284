//! 行スキャンの進捗表示

use indicatif::{ProgressBar, ProgressStyle};

/// 行数が分かっている場合（XLSX）
pub fn row_bar(file_name: &str, total_rows: u64) -> ProgressBar {
    let bar = ProgressBar::new(total_rows);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{msg} [{bar:40}] {pos}/{len} строк ({elapsed})")
    {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar.set_message(format!("Обработка {}", file_name));
    bar
}

/// 行数が事前に分からない場合（CSV）
pub fn row_spinner(file_name: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}: {pos} строк ({elapsed})") {
        bar.set_style(style);
    }
    bar.set_message(format!("Обработка {}", file_name));
    bar
}

/// 1行処理するごとに呼ぶ（スピナーも同じスレッドで回す）
pub fn advance(bar: &ProgressBar) {
    bar.inc(1);
}
