use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::database::{Translation, TranslationEntry};
use crate::errors::ProviderError;
use crate::providers::Dictionary;

/// Default Yandex Dictionary JSON endpoint
pub const DEFAULT_ENDPOINT: &str = "https://dictionary.yandex.net/api/v1/dicservice.json";

/// Yandex Dictionary client
pub struct YandexDictionary {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Service base URL, without the trailing `/lookup`
    endpoint: String,
    /// Language pair such as `de-ru`
    lang: String,
}

/// Top-level lookup response
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    /// Dictionary articles, best match first
    #[serde(default)]
    pub def: Vec<Definition>,
}

/// One dictionary article
#[derive(Debug, Deserialize)]
pub struct Definition {
    /// Headword
    pub text: String,
    /// Part of speech of the headword
    #[serde(default)]
    pub pos: Option<String>,
    /// Grammatical gender
    #[serde(default, rename = "gen")]
    pub gender: Option<String>,
    /// Translations of the headword
    #[serde(default)]
    pub tr: Vec<TranslationItem>,
}

/// One translation sense
#[derive(Debug, Deserialize)]
pub struct TranslationItem {
    /// Translated text
    pub text: String,
    /// Part of speech of the translation
    #[serde(default)]
    pub pos: Option<String>,
    /// Usage examples
    #[serde(default)]
    pub ex: Option<Vec<Example>>,
}

/// Usage example with its own translations
#[derive(Debug, Deserialize)]
pub struct Example {
    /// Example phrase in the source language
    pub text: String,
    /// Translations of the phrase
    #[serde(default)]
    pub tr: Vec<ExampleTranslation>,
}

/// Translation of an example phrase
#[derive(Debug, Deserialize)]
pub struct ExampleTranslation {
    /// Translated phrase
    pub text: String,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Format examples as "phrase — translation", keeping `None` when there are none
fn prepare_examples(examples: Option<Vec<Example>>) -> Option<Vec<String>> {
    let examples = examples.filter(|examples| !examples.is_empty())?;

    Some(
        examples
            .into_iter()
            .map(|example| match example.tr.first() {
                Some(tr) => format!("{} — {}", example.text, tr.text),
                None => example.text,
            })
            .collect(),
    )
}

/// Map a raw lookup response body into a translation payload
///
/// Only the first dictionary article is used. An empty article list means
/// the word is unknown.
pub fn parse_lookup_response(body: &str) -> Result<Option<Translation>, ProviderError> {
    let response: LookupResponse = serde_json::from_str(body)?;

    let Some(definition) = response.def.into_iter().next() else {
        return Ok(None);
    };

    let fallback_kind = definition.pos.clone().unwrap_or_default();
    let translations = definition
        .tr
        .into_iter()
        .map(|item| TranslationEntry {
            kind: item.pos.unwrap_or_else(|| fallback_kind.clone()),
            text: item.text,
            examples: prepare_examples(item.ex),
        })
        .collect();

    Ok(Some(Translation {
        gender: definition.gender,
        part_of_speech: definition.pos,
        original: definition.text,
        translations,
    }))
}

impl YandexDictionary {
    /// Create a new client
    ///
    /// An empty endpoint selects [`DEFAULT_ENDPOINT`].
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        lang: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: if endpoint.is_empty() {
                DEFAULT_ENDPOINT.to_string()
            } else {
                endpoint
            },
            lang: lang.into(),
        }
    }

    /// Build the lookup URL; query values are percent-encoded
    pub fn lookup_url(&self, word: &str) -> Result<Url, ProviderError> {
        let base = format!("{}/lookup", self.endpoint.trim_end_matches('/'));
        Url::parse_with_params(
            &base,
            &[
                ("key", self.api_key.as_str()),
                ("lang", self.lang.as_str()),
                ("text", word),
            ],
        )
        .map_err(|e| ProviderError::RequestFailed(format!("Invalid lookup URL {}: {}", base, e)))
    }
}

impl fmt::Debug for YandexDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YandexDictionary")
            .field("endpoint", &self.endpoint)
            .field("lang", &self.lang)
            .finish()
    }
}

#[async_trait]
impl Dictionary for YandexDictionary {
    async fn lookup(&self, word: &str) -> Result<Option<Translation>, ProviderError> {
        let url = self.lookup_url(word)?;
        debug!("Looking up '{}' ({})", word, self.lang);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(body);
            error!("Dictionary API error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        parse_lookup_response(&body)
    }
}
