//! 検索セッション
//!
//! フォルダ内の対象ファイルを順に走査し、結果と所要時間をまとめる。
//! ファイル単位の失敗は記録して次のファイルへ進む。

use crate::error::Result;
use crate::matcher::{FileResult, MatchedRow, Query};
use crate::scanner::{self, CandidateFile};
use crate::translator::Translator;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// 処理に失敗したファイル
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub file_name: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub query: String,
    /// ヒットのあったファイルのみ（走査順）
    pub files: Vec<FileResult>,
    pub failures: Vec<FileFailure>,
    /// ヘッダーと列数が合わない行のあったファイル（ファイル名, 行数）
    pub column_mismatches: Vec<(String, usize)>,
    pub files_scanned: usize,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn total_matches(&self) -> usize {
        self.files.iter().map(|f| f.rows.len()).sum()
    }
}

#[derive(Debug)]
pub enum SearchOutcome {
    /// 対象ファイルが1つも無い（レポートは作らない）
    NoFiles,
    Completed(SearchReport),
}

pub fn run_search<T>(folder: &Path, query: &str, translator: &T) -> Result<SearchOutcome>
where
    T: Translator + ?Sized,
{
    let started = Instant::now();
    let candidates = scanner::scan_folder(folder)?;

    if candidates.is_empty() {
        info!(folder = %folder.display(), "no csv/xlsx files");
        return Ok(SearchOutcome::NoFiles);
    }

    let query = Query::new(query);
    let mut files = Vec::new();
    let mut failures = Vec::new();
    let mut column_mismatches = Vec::new();

    for candidate in &candidates {
        match scanner::search_file(candidate, &query, translator) {
            Ok(scan) => {
                info!(
                    file = %candidate.file_name,
                    rows = scan.rows_scanned,
                    matches = scan.rows.len(),
                    "file scanned"
                );
                if scan.mismatched_rows > 0 {
                    column_mismatches.push((candidate.file_name.clone(), scan.mismatched_rows));
                }
                if !scan.rows.is_empty() {
                    files.push(file_result(candidate, scan.rows));
                }
            }
            Err(e) => {
                warn!(file = %candidate.file_name, error = %e, "file skipped");
                failures.push(FileFailure {
                    file_name: candidate.file_name.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(SearchOutcome::Completed(SearchReport {
        query: query.as_str().to_string(),
        files,
        failures,
        column_mismatches,
        files_scanned: candidates.len(),
        elapsed: started.elapsed(),
    }))
}

fn file_result(candidate: &CandidateFile, rows: Vec<MatchedRow>) -> FileResult {
    FileResult {
        path: candidate.path.clone(),
        file_name: candidate.file_name.clone(),
        rows,
    }
}
