use crate::error::{DoxbaseError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 既定の翻訳先言語
pub const DEFAULT_TARGET_LANG: &str = "ru";
/// 既定のレポートファイル名
pub const DEFAULT_OUTPUT_FILE: &str = "found_data.txt";
/// 1ファイルあたりのコンソール表示上限（超えたらファイル参照の案内のみ）
pub const DEFAULT_CONSOLE_LIMIT: usize = 100;
/// Google翻訳の公開エンドポイント
pub const DEFAULT_TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub target_lang: String,
    pub output_file: PathBuf,
    pub console_limit: usize,
    pub translate_headers: bool,
    pub translate_endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_lang: DEFAULT_TARGET_LANG.into(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            console_limit: DEFAULT_CONSOLE_LIMIT,
            translate_headers: true,
            translate_endpoint: DEFAULT_TRANSLATE_ENDPOINT.into(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 設定ファイルを読み込む（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| DoxbaseError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DoxbaseError::Config("домашний каталог не найден".into()))?;
        Ok(home.join(".config").join("doxbase").join("config.json"))
    }

    pub fn set_target_lang(&mut self, lang: String) -> Result<()> {
        let lang = lang.trim().to_string();
        if lang.is_empty() {
            return Err(DoxbaseError::Config("пустой код языка".into()));
        }
        self.target_lang = lang;
        self.save()
    }

    pub fn set_console_limit(&mut self, limit: usize) -> Result<()> {
        self.console_limit = limit;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config.target_lang, "ru");
        assert_eq!(config.output_file, PathBuf::from("found_data.txt"));
        assert_eq!(config.console_limit, 100);
        assert!(config.translate_headers);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            target_lang: "en".into(),
            console_limit: 5,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.target_lang, "en");
        assert_eq!(loaded.console_limit, 5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"target_lang": "de"}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.target_lang, "de");
        assert_eq!(loaded.timeout_seconds, 30);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, DoxbaseError::Config(_)));
    }
}
