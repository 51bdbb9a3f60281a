/*!
 * Harvesting words from the news.
 *
 * - `feed`: RSS feed and article fetching
 * - `tokenizer`: word counting for article text
 */

use anyhow::Result;
use async_trait::async_trait;

pub mod feed;
pub mod tokenizer;

pub use self::feed::FeedClient;
pub use self::tokenizer::{count_words, merge_counts, most_common, WordCounts};

/// Source of article text
///
/// The controller only needs article addresses and the text lines behind
/// them, so tests can replace the network with canned articles.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Addresses of the articles listed in a feed
    async fn list_article_urls(&self, feed_url: &str) -> Result<Vec<String>>;

    /// Text lines of one article
    async fn article_lines(&self, url: &str) -> Result<Vec<String>>;
}

#[async_trait]
impl NewsSource for FeedClient {
    async fn list_article_urls(&self, feed_url: &str) -> Result<Vec<String>> {
        FeedClient::list_article_urls(self, feed_url).await
    }

    async fn article_lines(&self, url: &str) -> Result<Vec<String>> {
        FeedClient::article_lines(self, url).await
    }
}
