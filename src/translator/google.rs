//! Google翻訳（translate_a/single, client=gtx）連携
//!
//! レスポンスはネストしたJSON配列:
//! `[[["訳文","原文",null,null,10], ...], null, "en", ...]`
//! 先頭要素の各セグメントの0番目を連結したものが訳文。

use super::{TranslationError, Translator};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// 翻訳元言語（自動判定）
const SOURCE_LANG: &str = "auto";

pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
    target: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: &str, target: &str, timeout_seconds: u64) -> Result<Self, TranslationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| TranslationError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            target: target.to_string(),
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", SOURCE_LANG),
                ("tl", self.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?
            .error_for_status()?;

        let payload: serde_json::Value = response.json()?;
        let translated = parse_gtx_response(&payload)?;
        debug!(source = text, translated = %translated, "header translated");
        Ok(translated)
    }
}

/// gtxレスポンスから訳文を取り出す
pub fn parse_gtx_response(payload: &serde_json::Value) -> Result<String, TranslationError> {
    let segments = payload
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslationError::MalformedResponse("сегменты перевода отсутствуют".into()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|s| s.as_str()))
        .collect();

    if translated.is_empty() {
        return Err(TranslationError::MalformedResponse("пустой перевод".into()));
    }

    Ok(translated)
}
