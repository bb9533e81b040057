//! Packmerge CLI - content-aware resource pack merger
//!
//! Reads an ordered pack list, rebuilds the output pack from scratch, and
//! merges every declared pack's asset tree into it with type-specific
//! conflict rules.

use std::io::BufRead;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use packmerge::cli::Cli;
use packmerge::output::{reset_output, write_manifest, write_mcmeta};
use packmerge::pack::{merge_packs, read_pack_list};
use packmerge::{MergeConfig, Reporter};

fn main() {
    let cli = Cli::parse();
    let pause = !cli.yes;
    let report = Reporter::new(cli.verbose);
    let config = cli.into_config();

    match run(&config, &report) {
        Ok(()) => {
            println!("\nResource pack merging complete");
            pause_for_ack(pause);
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            pause_for_ack(pause);
            std::process::exit(1);
        }
    }
}

/// The whole pipeline. The pack list is read first so a missing list aborts
/// before anything on disk is touched.
fn run(config: &MergeConfig, report: &Reporter) -> Result<()> {
    let packs = read_pack_list(config)?;

    reset_output(config)?;
    write_mcmeta(config)?;

    let contributors = merge_packs(config, &packs, report);
    write_manifest(config, &contributors)?;

    Ok(())
}

/// Wait for Enter when attached to a terminal (the tool is often run by
/// double-click and the window would close before the user sees anything).
fn pause_for_ack(pause: bool) {
    if !pause || !std::io::stdin().is_terminal() {
        return;
    }
    println!("Press Enter to exit...");
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}
