use crate::translator::TranslationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoxbaseError {
    #[error("Ошибка конфигурации: {0}")]
    Config(String),

    #[error("Папка не найдена: {0}")]
    FolderNotFound(String),

    #[error("Файл пуст (нет строки заголовков): {0}")]
    EmptyFile(String),

    #[error("В книге нет листов: {0}")]
    NoWorksheet(String),

    #[error("Ошибка чтения CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Ошибка чтения XLSX: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    #[error("Ошибка перевода: {0}")]
    Translation(#[from] TranslationError),

    #[error("Ошибка разбора JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка ввода: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, DoxbaseError>;
