//! 対話メニュー
//!
//! メニュー → クエリ入力 → 検索 → Enter待ち を繰り返す。
//! 状態（設定・翻訳器・出力先）は [`App`] が持つ。

use crate::config::Config;
use crate::error::{DoxbaseError, Result};
use crate::report;
use crate::search::{run_search, SearchOutcome, SearchReport};
use crate::translator::Translator;
use dialoguer::Input;
use std::path::PathBuf;

const BANNER: &str = r#"
 ____   _____  __  __  ____    _    ____  _____
|  _ \ / _ \ \/ / | __ )  / \  / ___|| ____|
| | | | | | \  /  |  _ \ / _ \ \___ \|  _|
| |_| | |_| /  \  | |_) / ___ \ ___) | |___
|____/ \___/_/\_\ |____/_/   \_\____/|_____|
"#;

const MENU: &str = "\n1. Пробив по базе.\n2. Выход\n";

/// メニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Search,
    Exit,
}

pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Search),
        "2" => Some(MenuChoice::Exit),
        _ => None,
    }
}

pub struct App {
    config: Config,
    folder: PathBuf,
    output: PathBuf,
    translator: Box<dyn Translator>,
    verbose: bool,
}

impl App {
    pub fn new(config: Config, folder: PathBuf, translator: Box<dyn Translator>, verbose: bool) -> Self {
        let output = config.output_file.clone();
        Self {
            config,
            folder,
            output,
            translator,
            verbose,
        }
    }

    /// レポートの出力先を変更
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = output;
        self
    }

    /// 対話ループ（「2」で終了）
    pub fn run(&self) -> Result<()> {
        loop {
            println!("{}", BANNER);
            println!("{}", MENU);

            let choice = prompt("Выберите опцию")?;
            match parse_menu_choice(&choice) {
                Some(MenuChoice::Search) => {
                    // 空のクエリは全行に一致する
                    let query = prompt("Введите запрос")?;
                    self.search(&query)?;
                    prompt("Нажмите Enter для возврата в меню...")?;
                }
                Some(MenuChoice::Exit) => break,
                None => println!("Неверный выбор, попробуйте снова."),
            }
        }

        Ok(())
    }

    /// 1回分の検索とレポート出力
    pub fn search(&self, query: &str) -> Result<Option<SearchReport>> {
        let report = match run_search(&self.folder, query, &self.translator)? {
            SearchOutcome::NoFiles => {
                println!("\nНет CSV или XLSX файлов в текущей директории.\n");
                return Ok(None);
            }
            SearchOutcome::Completed(report) => report,
        };

        for failure in &report.failures {
            println!("Ошибка при обработке файла {}: {}", failure.file_name, failure.message);
        }

        if self.verbose {
            println!("Просмотрено файлов: {}", report.files_scanned);
            for (file_name, rows) in &report.column_mismatches {
                println!(
                    "⚠ {}: {} строк с числом столбцов, отличным от заголовка (лишние столбцы отброшены)",
                    file_name, rows
                );
            }
        }

        report::save_report(&report, &self.output, self.config.console_limit)?;
        Ok(Some(report))
    }
}

fn prompt(text: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(text)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| DoxbaseError::Prompt(e.to_string()))
}
