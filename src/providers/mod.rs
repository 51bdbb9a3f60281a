/*!
 * Dictionary provider implementations.
 *
 * This module contains the clients that look words up in an external
 * dictionary:
 * - Yandex: Yandex Dictionary `lookup` API
 * - Mock: scripted dictionary for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::database::Translation;
use crate::errors::ProviderError;

/// Common trait for all dictionary providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing them to be used interchangeably by the translation cache.
#[async_trait]
pub trait Dictionary: Send + Sync + Debug {
    /// Look up a single word
    ///
    /// # Arguments
    /// * `word` - The normalized word to look up
    ///
    /// # Returns
    /// * `Ok(Some(translation))` - The dictionary knows the word
    /// * `Ok(None)` - The dictionary has no entry for the word
    /// * `Err(ProviderError)` - Transport, API or parse failure
    async fn lookup(&self, word: &str) -> Result<Option<Translation>, ProviderError>;
}

pub mod yandex;
pub mod mock;
