//! ヘッダー翻訳モジュール
//!
//! 翻訳サービスは [`Translator`] トレイトの裏に隠す。
//! 本番は Google翻訳、テストや `--no-translate` では素通しの実装を使う。

mod google;

pub use google::{parse_gtx_response, GoogleTranslator};

use crate::config::Config;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("HTTPクライアント初期化失敗: {0}")]
    Client(String),

    #[error("翻訳リクエスト失敗: {0}")]
    Request(#[from] reqwest::Error),

    #[error("翻訳レスポンスが不正: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Other(String),
}

/// 翻訳サービス
pub trait Translator {
    /// 1件のテキストを翻訳先言語に翻訳
    fn translate(&self, text: &str) -> Result<String, TranslationError>;
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate(&self, text: &str) -> Result<String, TranslationError> {
        (**self).translate(text)
    }
}

/// 翻訳せずにそのまま返す
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(&self, text: &str) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}

/// 設定に応じた翻訳器を生成
pub fn build_translator(config: &Config, no_translate: bool) -> Result<Box<dyn Translator>, TranslationError> {
    if no_translate || !config.translate_headers {
        debug!("header translation disabled");
        return Ok(Box::new(PassthroughTranslator));
    }

    let translator = GoogleTranslator::new(
        &config.translate_endpoint,
        &config.target_lang,
        config.timeout_seconds,
    )?;
    debug!(target_lang = translator.target(), endpoint = %config.translate_endpoint, "google translator ready");
    Ok(Box::new(translator))
}

/// ヘッダー名の正規化（`_` → 空白、先頭1文字だけ大文字）
pub fn normalize_header(header: &str) -> String {
    let spaced = header.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// ヘッダー列を順に翻訳
///
/// 1件でも失敗したらファイル全体を失敗扱いにする（リトライなし）。
pub fn translate_headers<S, T>(headers: &[S], translator: &T) -> Result<Vec<String>, TranslationError>
where
    S: AsRef<str>,
    T: Translator + ?Sized,
{
    headers
        .iter()
        .map(|header| {
            let normalized = normalize_header(header.as_ref());
            if normalized.trim().is_empty() {
                return Ok(normalized);
            }
            translator.translate(&normalized)
        })
        .collect()
}
