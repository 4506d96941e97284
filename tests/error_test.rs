//! エラーケーステスト
//!
//! ファイル単位の失敗が検索全体を止めないことと、エラー型の変換を検証

use doxbase::error::DoxbaseError;
use doxbase::scanner;
use doxbase::search::{run_search, SearchOutcome};
use doxbase::translator::{PassthroughTranslator, TranslationError, Translator};
use std::path::Path;
use tempfile::tempdir;

/// 特定のヘッダーだけ翻訳に失敗する
struct FlakyTranslator;

impl Translator for FlakyTranslator {
    fn translate(&self, text: &str) -> Result<String, TranslationError> {
        if text == "Broken" {
            Err(TranslationError::Other("service unavailable".into()))
        } else {
            Ok(text.to_string())
        }
    }
}

/// 存在しないフォルダ
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result, Err(DoxbaseError::FolderNotFound(_))));
}

/// 存在しないフォルダでの検索はセッション全体のエラー
#[test]
fn test_search_nonexistent_folder() {
    let result = run_search(Path::new("/nonexistent/path/12345"), "x", &PassthroughTranslator);
    assert!(result.is_err());
}

/// 翻訳失敗はそのファイルだけを除外する
#[test]
fn test_translation_failure_is_isolated() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("a_bad.csv"), "id;broken\n1;target\n").unwrap();
    std::fs::write(dir.path().join("b_good.csv"), "id;name\n2;target\n").unwrap();

    let outcome = run_search(dir.path(), "target", &FlakyTranslator).unwrap();
    let report = match outcome {
        SearchOutcome::Completed(report) => report,
        SearchOutcome::NoFiles => panic!("files expected"),
    };

    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].file_name, "a_bad.csv");
    assert!(report.failures[0].message.contains("service unavailable"));

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].file_name, "b_good.csv");
    assert_eq!(report.total_matches(), 1);
}

/// 壊れたXLSXもそのファイルだけを除外する
#[test]
fn test_corrupt_xlsx_is_isolated() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("broken.xlsx"), "this is not a zip archive").unwrap();
    std::fs::write(dir.path().join("ok.csv"), "a;b\nfound;x\n").unwrap();

    let outcome = run_search(dir.path(), "found", &PassthroughTranslator).unwrap();
    let SearchOutcome::Completed(report) = outcome else {
        panic!("files expected");
    };

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].file_name, "broken.xlsx");
    assert_eq!(report.total_matches(), 1);
}

/// 空ファイルはエラーとして報告される
#[test]
fn test_empty_csv_reported() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("empty.csv"), "").unwrap();

    let SearchOutcome::Completed(report) = run_search(dir.path(), "x", &PassthroughTranslator).unwrap() else {
        panic!("files expected");
    };
    assert_eq!(report.failures.len(), 1);
    assert!(report.files.is_empty());
}

/// DoxbaseErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        DoxbaseError::Config("тест".to_string()),
        DoxbaseError::FolderNotFound("/path/to/folder".to_string()),
        DoxbaseError::EmptyFile("a.csv".to_string()),
        DoxbaseError::NoWorksheet("b.xlsx".to_string()),
        DoxbaseError::Prompt("eof".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: DoxbaseError = io_err.into();

    assert!(matches!(err, DoxbaseError::Io(_)));
    assert!(format!("{}", err).contains("file not found"));
}

/// 翻訳エラーからの変換
#[test]
fn test_translation_error_conversion() {
    let err: DoxbaseError = TranslationError::Other("offline".into()).into();

    assert!(matches!(err, DoxbaseError::Translation(_)));
    assert!(format!("{}", err).contains("offline"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: DoxbaseError = json_err.into();

    assert!(matches!(err, DoxbaseError::JsonParse(_)));
}
