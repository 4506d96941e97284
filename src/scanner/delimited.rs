//! CSV（区切り文字付きテキスト）の読み込み

use super::{CandidateFile, FileScan, RowCollector};
use crate::error::{DoxbaseError, Result};
use crate::matcher::Query;
use crate::progress;
use crate::sniffer::{sniff_delimiter, Delimiter};
use crate::translator::{translate_headers, Translator};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(super) fn scan<T>(file: &CandidateFile, query: &Query, translator: &T) -> Result<FileScan>
where
    T: Translator + ?Sized,
{
    let first_line = read_first_line(&file.path)?
        .ok_or_else(|| DoxbaseError::EmptyFile(file.path.display().to_string()))?;
    let delimiter = sniff_delimiter(first_line.trim());
    debug!(file = %file.file_name, %delimiter, "delimiter detected");

    let mut reader = csv_reader(&file.path, delimiter)?;
    let mut records = reader.records();

    let header_record = match records.next() {
        Some(record) => record?,
        None => return Err(DoxbaseError::EmptyFile(file.path.display().to_string())),
    };
    let headers = translate_headers(&header_record.iter().collect::<Vec<_>>(), translator)?;

    let bar = progress::row_spinner(&file.file_name);
    let mut collector = RowCollector::new(query, headers);

    for record in records {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                bar.finish_and_clear();
                return Err(e.into());
            }
        };
        collector.push(&record.iter().collect::<Vec<_>>());
        progress::advance(&bar);
    }

    bar.finish_and_clear();
    Ok(collector.finish())
}

/// BOMを除いた先頭行（空ファイルなら None）
///
/// `\r` 単独の改行も行末とみなす。
fn read_first_line(path: &Path) -> Result<Option<String>> {
    let mut reader = open_without_bom(path)?;
    let mut line = Vec::new();
    let mut read_any = false;

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        read_any = true;
        match buf.iter().position(|&b| b == b'\r' || b == b'\n') {
            Some(end) => {
                line.extend_from_slice(&buf[..end]);
                break;
            }
            None => {
                line.extend_from_slice(buf);
                let len = buf.len();
                reader.consume(len);
            }
        }
    }

    if !read_any {
        return Ok(None);
    }
    let line = String::from_utf8(line)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(Some(line))
}

fn open_without_bom(path: &Path) -> Result<BufReader<File>> {
    let mut reader = BufReader::new(File::open(path)?);
    if reader.fill_buf()?.starts_with(UTF8_BOM) {
        reader.consume(UTF8_BOM.len());
    }
    Ok(reader)
}

/// 列数の揃わない行も許容し、フィールド長の上限は設けない
fn csv_reader(path: &Path, delimiter: Delimiter) -> Result<csv::Reader<BufReader<File>>> {
    Ok(csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(open_without_bom(path)?))
}
