//! The browser seam used by the scraper.

use anyhow::Result;
use async_trait::async_trait;

/// A live map page the scraper can drive.
///
/// Implemented by [`super::browser::ChromeSession`]; tests use an in-memory
/// fake.
#[async_trait]
pub trait MapSession: Send + Sync {
    /// Navigate to `url` and wait for the load to finish.
    async fn open(&mut self, url: &str) -> Result<()>;

    /// Type `query` into the search box and submit it.
    async fn search(&mut self, query: &str) -> Result<()>;

    /// Scroll the search results panel down by one step.
    async fn scroll_results(&mut self) -> Result<()>;

    /// Hrefs of the place links currently rendered in the results panel.
    async fn listing_links(&self) -> Result<Vec<String>>;

    /// Heading text of the open place, if any.
    async fn place_name(&self) -> Result<Option<String>>;

    /// Introduction text of the open place, if any.
    async fn place_description(&self) -> Result<Option<String>>;

    async fn current_url(&self) -> Result<Option<String>>;

    /// Shut the browser down.
    async fn close(self: Box<Self>) -> Result<()>;
}
