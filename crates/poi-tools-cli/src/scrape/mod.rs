//! Map listing scraper.
//!
//! Searches the map service, scrolls the results panel until enough listings
//! are rendered, then opens each listing and reads its name, introduction,
//! and coordinates.

pub mod behavior;
pub mod browser;
pub mod listing;
pub mod session;

pub use behavior::Pacing;
pub use session::MapSession;

use anyhow::Result;
use poi_tools::PoiRecord;
use tracing::{debug, info, warn};

/// World view the search starts from.
pub const DEFAULT_START_URL: &str = "https://www.google.com/maps/@32.9817464,70.1930781,3.67z?";

pub const DEFAULT_QUERY: &str = "Restaurants in Rio de Janeiro, Brazil";

/// Decision taken after each scroll of the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    /// At least `total` links are rendered.
    Enough,
    /// The link count did not grow since the previous scroll.
    Exhausted,
    /// Keep scrolling.
    Continue,
}

/// Stop rule for the scroll loop.
pub fn scroll_step(count: usize, previous: usize, total: usize) -> ScrollStep {
    if count >= total {
        ScrollStep::Enough
    } else if count == previous {
        ScrollStep::Exhausted
    } else {
        ScrollStep::Continue
    }
}

/// Scroll until `total` listing links are visible or the results run out.
/// Returns at most `total` hrefs in page order.
pub async fn collect_listings(
    session: &mut dyn MapSession,
    total: usize,
    pacing: &Pacing,
) -> Result<Vec<String>> {
    let mut previous = 0;
    loop {
        session.scroll_results().await?;
        pacing.after_scroll().await;

        let mut links = session.listing_links().await?;
        match scroll_step(links.len(), previous, total) {
            ScrollStep::Enough => {
                links.truncate(total);
                info!(found = links.len(), "collected listings");
                return Ok(links);
            }
            ScrollStep::Exhausted => {
                info!(found = links.len(), "reached end of results");
                return Ok(links);
            }
            ScrollStep::Continue => {
                debug!(found = links.len(), "still scrolling");
                previous = links.len();
            }
        }
    }
}

/// Open one listing and build its record.
///
/// Returns `None` when no coordinates can be read from either the listing
/// href or the page URL after navigation.
pub async fn scrape_listing(
    session: &mut dyn MapSession,
    href: &str,
    pacing: &Pacing,
) -> Result<Option<PoiRecord>> {
    let url = listing::resolve_listing_url(href).unwrap_or_else(|| href.to_string());
    session.open(&url).await?;
    pacing.after_detail().await;

    let at = match listing::coordinates_from_url(&url) {
        Some(at) => Some(at),
        None => session
            .current_url()
            .await?
            .as_deref()
            .and_then(listing::coordinates_from_url),
    };
    let Some(at) = at else {
        warn!(url = %url, "no coordinates in listing URL, skipping");
        return Ok(None);
    };

    let name = session.place_name().await?.filter(|n| !n.is_empty());
    let about = session.place_description().await?.filter(|d| !d.is_empty());
    let record = PoiRecord::new(name, about, at);
    info!(name = %record.name, lat = record.lat, lng = record.lng, "scraped listing");
    Ok(Some(record))
}

/// Run a full search and return one record per scraped listing.
///
/// `on_listing` is called with `(done, of)` after every listing.
pub async fn scrape(
    session: &mut dyn MapSession,
    start_url: &str,
    query: &str,
    total: usize,
    pacing: &Pacing,
    mut on_listing: impl FnMut(usize, usize) + Send,
) -> Result<Vec<PoiRecord>> {
    session.open(start_url).await?;
    pacing.settle().await;
    session.search(query).await?;
    pacing.settle().await;

    let links = collect_listings(session, total, pacing).await?;
    let mut records = Vec::with_capacity(links.len());
    for (i, href) in links.iter().enumerate() {
        if let Some(record) = scrape_listing(session, href, pacing).await? {
            records.push(record);
        }
        on_listing(i + 1, links.len());
    }
    Ok(records)
}
