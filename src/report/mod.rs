//! 検索結果レポート
//!
//! ファイル（found_data.txt）とコンソールに同じ内容を書き出す。
//! 1ファイルのヒット件数が上限を超える場合、コンソールには案内1行だけを出す。

pub mod layout;

use crate::error::Result;
use crate::matcher::MatchedRow;
use crate::search::SearchReport;
use layout::{LABEL_ELAPSED, LABEL_FILE, LABEL_QUERY, LABEL_TOTAL};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// 所要時間の表示（60秒未満は秒のみ、それ以上は分＋秒）
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{:.2} секунд", secs)
    } else {
        let minutes = (secs / 60.0).floor();
        format!("{} минут {:.2} секунд", minutes as u64, secs - minutes * 60.0)
    }
}

/// 1レコード分のブロック（前後の空行を含む）
fn record_block(row: &MatchedRow) -> String {
    let mut block = format!("\n{}\n", layout::record_top());
    for (key, value) in row.iter() {
        block.push_str(&layout::record_field(key, value));
        block.push('\n');
    }
    block.push_str(&layout::record_bottom());
    block.push_str("\n\n");
    block
}

/// レポートを書き出す
///
/// `file` には全レコード、`console` には件数上限を考慮した内容を書く。
pub fn write_report<F, C>(
    report: &SearchReport,
    output_name: &str,
    console_limit: usize,
    file: &mut F,
    console: &mut C,
) -> io::Result<()>
where
    F: Write,
    C: Write,
{
    for result in &report.files {
        let header = [
            format!("{}: {}", LABEL_FILE, result.file_name),
            format!("{}: {}", LABEL_QUERY, report.query),
        ];
        write!(console, "{}", layout::double_box(&header))?;
        writeln!(file, "{}", header[0])?;
        writeln!(file, "{}\n", header[1])?;

        let mirror = result.rows.len() <= console_limit;
        if !mirror {
            writeln!(
                console,
                "Размер информации слишком большой ({} записей), смотрите файл: {}",
                result.rows.len(),
                output_name
            )?;
        }

        for row in &result.rows {
            let block = record_block(row);
            file.write_all(block.as_bytes())?;
            if mirror {
                console.write_all(block.as_bytes())?;
            }
        }
    }

    let summary = format!(
        "\n{}: {}\n{}: {}\n",
        LABEL_TOTAL,
        report.total_matches(),
        LABEL_ELAPSED,
        format_elapsed(report.elapsed)
    );
    file.write_all(summary.as_bytes())?;
    console.write_all(summary.as_bytes())?;
    writeln!(console, "\nРезультаты сохранены в файле: {}", output_name)?;

    Ok(())
}

/// レポートファイルを上書き作成し、標準出力にも表示
pub fn save_report(report: &SearchReport, output_path: &Path, console_limit: usize) -> Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    let stdout = io::stdout();
    let mut console = stdout.lock();

    write_report(
        report,
        &output_path.display().to_string(),
        console_limit,
        &mut writer,
        &mut console,
    )?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_seconds() {
        assert_eq!(format_elapsed(Duration::from_millis(1234)), "1.23 секунд");
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0.00 секунд");
        assert_eq!(format_elapsed(Duration::from_millis(59_990)), "59.99 секунд");
    }

    #[test]
    fn test_format_elapsed_minutes() {
        assert_eq!(format_elapsed(Duration::from_secs(60)), "1 минут 0.00 секунд");
        assert_eq!(format_elapsed(Duration::from_millis(125_500)), "2 минут 5.50 секунд");
    }

    #[test]
    fn test_record_block() {
        let mut row = MatchedRow::new();
        row.insert("Имя".into(), "Иван".into());
        row.insert("Возраст".into(), "30".into());

        let block = record_block(&row);
        let lines: Vec<&str> = block.split('\n').collect();
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with('┏'));
        assert_eq!(lines[2], "┣ Имя: Иван");
        assert_eq!(lines[3], "┣ Возраст: 30");
        assert!(lines[4].starts_with('┗'));
        assert!(block.ends_with("\n\n"));
    }
}
