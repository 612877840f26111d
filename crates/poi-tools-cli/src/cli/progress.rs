//! Spinner shown while the browser is working.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner with `message`. Hidden when quiet or in JSON mode.
pub fn create_spinner(message: &str) -> ProgressBar {
    if super::output::is_quiet() || super::output::is_json() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
        bar.set_style(style.tick_chars("\u{25b8}\u{25b9}\u{25b8}\u{25b9}\u{25b8}"));
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

/// Message for listing `done` of `of`.
pub fn listing_message(done: usize, of: usize) -> String {
    format!("Scraping listings {done}/{of}")
}
