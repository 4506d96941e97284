mod delimited;
mod spreadsheet;

use crate::error::{DoxbaseError, Result};
use crate::matcher::{build_matched_row, MatchedRow, Query};
use crate::translator::Translator;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// 検索対象のファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// 区切り文字付きテキスト（.csv）
    Delimited,
    /// スプレッドシート（.xlsx）
    Spreadsheet,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "csv" => Some(FileKind::Delimited),
            "xlsx" => Some(FileKind::Spreadsheet),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: FileKind,
}

/// 1ファイルの走査結果
#[derive(Debug, Clone, Default)]
pub struct FileScan {
    pub rows: Vec<MatchedRow>,
    /// 走査したデータ行数（ヘッダー除く）
    pub rows_scanned: usize,
    /// ヘッダーと列数が一致しなかった行数
    pub mismatched_rows: usize,
}

/// フォルダ直下の .csv / .xlsx を列挙（再帰しない、ファイル名順）
pub fn scan_folder(folder: &Path) -> Result<Vec<CandidateFile>> {
    if !folder.is_dir() {
        return Err(DoxbaseError::FolderNotFound(folder.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(kind) = FileKind::from_path(path) {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            files.push(CandidateFile {
                path: path.to_path_buf(),
                file_name,
                kind,
            });
        }
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    debug!(folder = %folder.display(), count = files.len(), "candidate files");

    Ok(files)
}

/// 1ファイルを形式別に読み、ヒット行を返す
pub fn search_file<T>(file: &CandidateFile, query: &Query, translator: &T) -> Result<FileScan>
where
    T: Translator + ?Sized,
{
    let scan = match file.kind {
        FileKind::Delimited => delimited::scan(file, query, translator)?,
        FileKind::Spreadsheet => spreadsheet::scan(file, query, translator)?,
    };

    if scan.mismatched_rows > 0 {
        warn!(
            file = %file.file_name,
            rows = scan.mismatched_rows,
            "column count differs from header; extra columns dropped"
        );
    }

    Ok(scan)
}

/// 行ごとの照合と集計（形式共通）
struct RowCollector<'a> {
    query: &'a Query,
    headers: Vec<String>,
    scan: FileScan,
}

impl<'a> RowCollector<'a> {
    fn new(query: &'a Query, headers: Vec<String>) -> Self {
        Self {
            query,
            headers,
            scan: FileScan::default(),
        }
    }

    fn push<S: AsRef<str>>(&mut self, row: &[S]) {
        self.scan.rows_scanned += 1;
        if row.len() != self.headers.len() {
            self.scan.mismatched_rows += 1;
        }
        if self.query.is_match(row) {
            self.scan.rows.push(build_matched_row(&self.headers, row));
        }
    }

    fn finish(self) -> FileScan {
        self.scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_file_kind() {
        assert_eq!(FileKind::from_path(Path::new("a.csv")), Some(FileKind::Delimited));
        assert_eq!(FileKind::from_path(Path::new("a.CSV")), Some(FileKind::Delimited));
        assert_eq!(FileKind::from_path(Path::new("a.xlsx")), Some(FileKind::Spreadsheet));
        assert_eq!(FileKind::from_path(Path::new("a.xls")), None);
        assert_eq!(FileKind::from_path(Path::new("found_data.txt")), None);
        assert_eq!(FileKind::from_path(Path::new("csv")), None);
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(DoxbaseError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_filters_and_sorts() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("b.xlsx")).unwrap();
        File::create(dir.path().join("a.csv")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        fs::create_dir(dir.path().join("nested.csv")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("deep.csv")).unwrap();

        let files = scan_folder(dir.path()).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.csv", "b.xlsx"]);
        assert_eq!(files[0].kind, FileKind::Delimited);
        assert_eq!(files[1].kind, FileKind::Spreadsheet);
    }

    #[test]
    fn test_row_collector_counts_mismatch() {
        let query = Query::new("x");
        let mut collector = RowCollector::new(&query, vec!["A".into(), "B".into()]);
        collector.push(&["x", "y"]);
        collector.push(&["x"]);
        collector.push(&["a", "b", "c"]);

        let scan = collector.finish();
        assert_eq!(scan.rows_scanned, 3);
        assert_eq!(scan.mismatched_rows, 2);
        assert_eq!(scan.rows.len(), 2);
    }
}
