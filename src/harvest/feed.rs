/*!
 * News feed and article fetching.
 *
 * The feed is an RSS document whose item links point at articles. Article
 * pages are HTML; only the text inside the article body selector is kept.
 */

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;

/// Default CSS selector for the article body
pub const DEFAULT_ARTICLE_SELECTOR: &str = "div#js-article-column > div.article-section";

/// Number of trailing lines dropped from every article (embedded scripts)
const TRAILING_NOISE_LINES: usize = 2;

/// Extract the item links of an RSS document
pub fn parse_feed_links(content: &[u8]) -> Result<Vec<String>> {
    let channel = rss::Channel::read_from(content).context("Failed to parse RSS feed")?;

    Ok(channel
        .items()
        .iter()
        .filter_map(|item| item.link())
        .map(|link| link.trim().to_string())
        .filter(|link| !link.is_empty())
        .collect())
}

/// Whether a text node looks like prose rather than script or layout noise
fn is_meaningful(text: &str) -> bool {
    !(text.starts_with("\r\n\t") || text.starts_with("\n\t"))
        && !text.trim_start().is_empty()
        && !text.contains("TAB")
}

/// Keep the meaningful text nodes and drop the trailing noise lines
pub fn meaningful_lines<'a, I>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines: Vec<String> = texts
        .into_iter()
        .filter(|text| is_meaningful(text))
        .map(str::to_string)
        .collect();

    lines.truncate(lines.len().saturating_sub(TRAILING_NOISE_LINES));
    lines
}

/// Text lines of the first node matching `selector`, or `None` without one
pub fn extract_article_lines(html: &str, selector: &Selector) -> Option<Vec<String>> {
    let document = Html::parse_document(html);
    let article = document.select(selector).next()?;
    Some(meaningful_lines(article.text()))
}

/// HTTP client for the news feed and its articles
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    selector: Selector,
}

impl FeedClient {
    /// Create a client with a request timeout and an article body selector
    pub fn new(timeout_secs: u64, article_selector: &str) -> Result<Self> {
        let selector = Selector::parse(article_selector)
            .map_err(|e| anyhow!("Invalid article selector '{}': {}", article_selector, e))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, selector })
    }

    async fn fetch(&self, url: &str) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("{} responded with {}", url, status));
        }
        Ok(response)
    }

    /// Article URLs listed in the feed
    pub async fn list_article_urls(&self, feed_url: &str) -> Result<Vec<String>> {
        info!("Getting urls for {}", feed_url);

        let content = self.fetch(feed_url).await?.bytes().await?;
        let links = parse_feed_links(&content[..])?;

        debug!("Feed {} lists {} article(s)", feed_url, links.len());
        Ok(links)
    }

    /// Text lines of one article
    ///
    /// A page without an article body yields no lines.
    pub async fn article_lines(&self, url: &str) -> Result<Vec<String>> {
        debug!("Getting content of article {}", url);

        let html = self.fetch(url).await?.text().await?;

        match extract_article_lines(&html, &self.selector) {
            Some(lines) => Ok(lines),
            None => {
                warn!("Could not get content of article {}", url);
                Ok(Vec::new())
            }
        }
    }
}
