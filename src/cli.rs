use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "doxbase")]
#[command(about = "Поиск по CSV/XLSX файлам с переводом заголовков", long_about = None)]
pub struct Cli {
    /// 省略時は対話メニューを起動
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 翻訳先言語（設定ファイルより優先）
    #[arg(long, global = true)]
    pub target_lang: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 1回だけ検索してレポートを出力
    Search {
        /// 検索クエリ
        #[arg(required = true)]
        query: String,

        /// 検索対象フォルダ（デフォルト: カレント）
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// レポートファイル（デフォルト: 設定値 found_data.txt）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ヘッダーを翻訳しない
        #[arg(long)]
        no_translate: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 翻訳先言語を設定
        #[arg(long)]
        set_target_lang: Option<String>,

        /// コンソール表示の件数上限を設定
        #[arg(long)]
        set_console_limit: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["doxbase"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::try_parse_from([
            "doxbase", "search", "Иванов", "--dir", "/data", "--no-translate", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Search { query, dir, output, no_translate }) => {
                assert_eq!(query, "Иванов");
                assert_eq!(dir, PathBuf::from("/data"));
                assert!(output.is_none());
                assert!(no_translate);
            }
            _ => panic!("search subcommand expected"),
        }
    }

    #[test]
    fn test_global_target_lang() {
        let cli = Cli::try_parse_from(["doxbase", "--target-lang", "en", "config", "--show"]).unwrap();
        assert_eq!(cli.target_lang.as_deref(), Some("en"));
    }
}
