//! Waits between browser actions.
//!
//! The results panel and listing pages load lazily, so every action is
//! followed by a pause. Pauses are jittered by up to a quarter of their
//! base length.

use rand::Rng;
use std::time::Duration;

/// Jitter `base` by up to ±25%.
pub fn jittered(base: Duration) -> Duration {
    let ms = base.as_millis() as u64;
    if ms == 0 {
        return Duration::ZERO;
    }
    let spread = ms / 4;
    let mut rng = rand::thread_rng();
    Duration::from_millis(rng.gen_range(ms - spread..=ms + spread))
}

/// Pause lengths for each kind of action.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// After navigation, typing, or pressing Enter.
    pub settle: Duration,
    /// After each scroll of the results feed.
    pub scroll: Duration,
    /// After opening a listing.
    pub detail: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(1000),
            scroll: Duration::from_millis(3000),
            detail: Duration::from_millis(5000),
        }
    }
}

impl Pacing {
    /// No waiting at all.
    pub fn none() -> Self {
        Self {
            settle: Duration::ZERO,
            scroll: Duration::ZERO,
            detail: Duration::ZERO,
        }
    }

    pub async fn settle(&self) {
        sleep(self.settle).await;
    }

    pub async fn after_scroll(&self) {
        sleep(self.scroll).await;
    }

    pub async fn after_detail(&self) {
        sleep(self.detail).await;
    }
}

async fn sleep(base: Duration) {
    if !base.is_zero() {
        tokio::time::sleep(jittered(base)).await;
    }
}
