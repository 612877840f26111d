//! The `poi-tools` binary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use poi_tools_cli::cli::output;
use poi_tools_cli::cli::{export_cmd, flatten_cmd, import_cmd, reverse_cmd, scrape_cmd};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None, propagate_version = true)]
struct Cli {
    /// Only print errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Debug logging and longer summaries.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Print a machine-readable summary to stdout.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape map listings into a JSON record list.
    Scrape(scrape_cmd::ScrapeArgs),

    /// Insert a scraped record list into the marker database.
    Import(import_cmd::ImportArgs),

    /// Flatten each GeoJSON feature's coordinates into swapped pairs.
    Flatten(flatten_cmd::FlattenArgs),

    /// Reduce GeoJSON features to their name and raw coordinates.
    Export(export_cmd::ExportArgs),

    /// Swap every [x, y] pair of a pair list.
    Reverse(reverse_cmd::ReverseArgs),
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("poi_tools={level}").parse()?)
        .add_directive(format!("poi_tools_cli={level}").parse()?);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(output::color_enabled())
        .with_target(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    for (enabled, var) in [
        (cli.quiet, output::QUIET_ENV),
        (cli.verbose, output::VERBOSE_ENV),
        (cli.json, output::JSON_ENV),
        (cli.no_color, output::NO_COLOR_ENV),
    ] {
        if enabled {
            std::env::set_var(var, "1");
        }
    }
    init_tracing(&cli)?;

    match &cli.command {
        Command::Scrape(args) => scrape_cmd::run(args).await,
        Command::Import(args) => import_cmd::run(args).await,
        Command::Flatten(args) => flatten_cmd::run(args),
        Command::Export(args) => export_cmd::run(args),
        Command::Reverse(args) => reverse_cmd::run(args),
    }
}
