//! `poi-tools import`: insert scraped records as markers.

use crate::cli::output::{self, Styled};
use crate::import::{self, Target};
use anyhow::Result;
use clap::Args;
use poi_tools::marker::{self, MarkerOptions};
use poi_tools::PoiRecord;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Record list written by `scrape` (`-` for stdin).
    #[arg(short, long, default_value = "output.json")]
    pub input: PathBuf,

    /// MongoDB connection string.
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub uri: Option<String>,

    #[arg(long, default_value = "test")]
    pub database: String,

    #[arg(long, default_value = "markers")]
    pub collection: String,

    /// Marker type, e.g. `gym`.
    #[arg(long = "type")]
    pub marker_type: String,

    /// Username recorded as the marker author.
    #[arg(long)]
    pub username: String,

    /// User id recorded as the marker author.
    #[arg(long, env = "POI_USER_ID")]
    pub user_id: Option<String>,

    /// Mark the markers private.
    #[arg(long)]
    pub private: bool,

    /// Print the markers instead of inserting them.
    #[arg(long)]
    pub dry_run: bool,
}

impl ImportArgs {
    fn marker_options(&self) -> MarkerOptions {
        MarkerOptions {
            marker_type: self.marker_type.clone(),
            username: self.username.clone(),
            user_id: self.user_id.clone(),
            is_private: self.private,
        }
    }
}

/// Run the import command.
pub async fn run(args: &ImportArgs) -> Result<()> {
    let records: Vec<PoiRecord> = poi_tools::io::read_json(&args.input)?;
    for (i, record) in records.iter().enumerate() {
        if let Err(e) = record.position() {
            warn!(record = i, name = %record.name, "{e}");
        }
    }

    let markers = marker::markers_from_records(&records, &args.marker_options(), chrono::Utc::now());

    if args.dry_run {
        output::print_json(&serde_json::to_value(&markers)?);
        return Ok(());
    }

    let Some(uri) = args.uri.clone() else {
        anyhow::bail!("no connection string: pass --uri or set MONGODB_URI");
    };
    let target = Target {
        uri,
        database: args.database.clone(),
        collection: args.collection.clone(),
    };
    let inserted = import::insert_markers(&target, &markers).await?;

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "command": "import",
            "inserted": inserted,
            "database": target.database,
            "collection": target.collection,
        }));
    } else if !output::is_quiet() {
        let s = Styled::new();
        output::print_check(s.ok_sym(), "Inserted:", &format!("{inserted} markers."));
    }
    Ok(())
}
