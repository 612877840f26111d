//! `poi-tools scrape`: search the map service and dump listings to a file.

use crate::cli::output::{self, Styled};
use crate::cli::progress;
use crate::scrape::browser::{ChromeOptions, ChromeSession};
use crate::scrape::{self, MapSession, Pacing, DEFAULT_QUERY, DEFAULT_START_URL};
use anyhow::{bail, Result};
use clap::Args;
use poi_tools::PoiRecord;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Records shown in the summary.
const PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, Args)]
pub struct ScrapeArgs {
    /// Search query typed into the map search box.
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    pub search: String,

    /// Number of listings to scrape.
    #[arg(short, long, default_value_t = 1)]
    pub total: usize,

    /// Where to write the record list.
    #[arg(short, long, default_value = "output.json")]
    pub output: PathBuf,

    /// Run the browser without a window.
    #[arg(long)]
    pub headless: bool,

    /// Page opened before searching.
    #[arg(long, default_value = DEFAULT_START_URL)]
    pub start_url: String,

    /// Browser executable; auto-detected when omitted.
    #[arg(long, env = "CHROME")]
    pub chrome: Option<PathBuf>,

    /// DevTools request timeout in milliseconds.
    #[arg(long, default_value_t = 60_000)]
    pub timeout_ms: u64,
}

/// Run the scrape command.
pub async fn run(args: &ScrapeArgs) -> Result<()> {
    if args.total == 0 {
        bail!("--total must be at least 1");
    }
    let s = Styled::new();
    let start = Instant::now();
    if !output::is_quiet() && !output::is_json() {
        output::print_header(&s);
    }

    let options = ChromeOptions {
        headless: args.headless,
        executable: args.chrome.clone(),
        timeout: Duration::from_millis(args.timeout_ms),
    };
    let mut session = Box::new(ChromeSession::launch(&options).await?);

    let spinner = progress::create_spinner(&format!("Searching \"{}\"", args.search));
    let result = scrape::scrape(
        session.as_mut(),
        &args.start_url,
        &args.search,
        args.total,
        &Pacing::default(),
        |done, of| spinner.set_message(progress::listing_message(done, of)),
    )
    .await;
    spinner.finish_and_clear();

    // close the browser even when scraping failed
    let closed = session.close().await;
    let records = result?;
    closed?;

    poi_tools::io::write_json(&args.output, &records, false)?;
    print_summary(&s, args, &records, start.elapsed());
    Ok(())
}

fn print_summary(s: &Styled, args: &ScrapeArgs, records: &[PoiRecord], elapsed: Duration) {
    if output::is_json() {
        output::print_json_summary(
            &args.output,
            &serde_json::json!({
                "command": "scrape",
                "query": args.search,
                "requested": args.total,
                "found": records.len(),
                "output": args.output.display().to_string(),
                "duration_ms": elapsed.as_millis(),
            }),
        );
        return;
    }
    if output::is_quiet() {
        return;
    }

    let symbol = if records.len() < args.total {
        s.warn_sym()
    } else {
        s.ok_sym()
    };
    output::print_check(
        symbol,
        "Total found:",
        &format!(
            "{} of {} in {} -> {}",
            records.len(),
            args.total,
            output::format_duration(elapsed.as_secs()),
            args.output.display()
        ),
    );
    for record in records.iter().take(PREVIEW_ROWS) {
        output::print_detail(&format!(
            "{:<32} {:>10.5} {:>11.5}  {}",
            output::truncate(&record.name, 32),
            record.lat,
            record.lng,
            s.dim(&output::truncate(&record.about, 40)),
        ));
    }
    if output::is_verbose() && records.len() > PREVIEW_ROWS {
        output::print_detail(&s.dim(&format!("... {} more", records.len() - PREVIEW_ROWS)));
    }
}
