//! `poi-tools reverse`: swap every `[x, y]` pair of a pair list.

use crate::cli::output::{self, Styled};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct ReverseArgs {
    /// JSON array of `[x, y]` pairs (`-` for stdin).
    #[arg(short, long, default_value = "input.json")]
    pub input: PathBuf,

    /// Where to write the swapped pairs (`-` for stdout).
    #[arg(short, long, default_value = "output.json")]
    pub output: PathBuf,

    /// Indent the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Run the reverse command.
pub fn run(args: &ReverseArgs) -> Result<()> {
    let values: Vec<Vec<f64>> = poi_tools::io::read_json(&args.input)?;
    let reversed = poi_tools::coords::reverse(&values)?;
    poi_tools::io::write_json(&args.output, &reversed, args.pretty)?;

    if output::is_json() {
        output::print_json_summary(
            &args.output,
            &serde_json::json!({
                "command": "reverse",
                "pairs": reversed.len(),
                "output": args.output.display().to_string(),
            }),
        );
    } else if !output::is_quiet() {
        let s = Styled::new();
        output::print_check(
            s.ok_sym(),
            "Reversed:",
            &format!("{} pairs -> {}", reversed.len(), args.output.display()),
        );
    }
    Ok(())
}
