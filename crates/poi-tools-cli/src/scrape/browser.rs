//! Chromium-backed [`MapSession`] over the DevTools protocol.

use super::session::MapSession;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

const SEARCH_BOX: &str = "input#searchboxinput";
const PLACE_NAME: &str = "div.TIHn2 h1.DUwDvf";
const PLACE_INTRO: &str = "div.WeS02d.fontBodyMedium div.PYvSYb";

const LISTING_LINKS_JS: &str = r#"
    Array.from(document.querySelectorAll('a[href^="https://www.google.com/maps/place"]'))
        .map(a => a.href)
"#;

const SCROLL_FEED_JS: &str = r#"
    (() => {
        const feed = document.querySelector('div[role="feed"]');
        if (feed) { feed.scrollBy(0, 10000); return true; }
        window.scrollBy(0, 10000);
        return false;
    })()
"#;

/// How to launch the browser.
#[derive(Debug, Clone)]
pub struct ChromeOptions {
    pub headless: bool,
    /// Browser binary; auto-detected when `None`.
    pub executable: Option<PathBuf>,
    /// DevTools request timeout.
    pub timeout: Duration,
}

/// One browser process with a single tab.
pub struct ChromeSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl ChromeSession {
    /// Launch the browser and open a blank tab.
    pub async fn launch(options: &ChromeOptions) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .request_timeout(options.timeout)
            .window_size(1280, 900);
        if !options.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &options.executable {
            builder = builder.chrome_executable(path);
        }
        let config = builder
            .build()
            .map_err(|e| anyhow!("invalid browser config: {e}"))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch browser")?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("browser handler stopped: {e}");
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .context("failed to open browser tab")?;

        info!(headless = options.headless, "browser launched");
        Ok(Self {
            browser,
            page,
            handler,
        })
    }

    async fn first_text(&self, selector: &str) -> Result<Option<String>> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .with_context(|| format!("querying {selector}"))?;
        match elements.first() {
            Some(el) => Ok(el.inner_text().await?.map(|t| t.trim().to_string())),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl MapSession for ChromeSession {
    async fn open(&mut self, url: &str) -> Result<()> {
        debug!(url, "navigating");
        self.page
            .goto(url)
            .await
            .with_context(|| format!("failed to open {url}"))?;
        // `goto` already resolves once the navigation's load event fired
        Ok(())
    }

    async fn search(&mut self, query: &str) -> Result<()> {
        self.page
            .find_element(SEARCH_BOX)
            .await
            .context("search box not found")?
            .click()
            .await?
            .type_str(query)
            .await?
            .press_key("Enter")
            .await?;
        Ok(())
    }

    async fn scroll_results(&mut self) -> Result<()> {
        self.page
            .evaluate(SCROLL_FEED_JS)
            .await
            .context("failed to scroll results")?;
        Ok(())
    }

    async fn listing_links(&self) -> Result<Vec<String>> {
        let links: Vec<String> = self
            .page
            .evaluate(LISTING_LINKS_JS)
            .await
            .context("failed to list results")?
            .into_value()?;
        Ok(links)
    }

    async fn place_name(&self) -> Result<Option<String>> {
        self.first_text(PLACE_NAME).await
    }

    async fn place_description(&self) -> Result<Option<String>> {
        self.first_text(PLACE_INTRO).await
    }

    async fn current_url(&self) -> Result<Option<String>> {
        Ok(self.page.url().await?)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        let Self {
            mut browser,
            handler,
            ..
        } = *self;
        browser.close().await.context("failed to close browser")?;
        browser.wait().await?;
        handler.await?;
        info!("browser closed");
        Ok(())
    }
}
