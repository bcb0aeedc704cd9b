//! Script splitting tool
//!
//! Splits a header + fixed-size-record script (by default the wget download
//! script `download_data.sh`) into evenly sized, executable fragments.

use std::process;

use anyhow::Context;
use scriptsplit::args::parse_args;
use scriptsplit::reporters::{ConsoleSplitReporter, SilentSplitReporter, SplitReporter};
use scriptsplit::{split_script, SplitConfig};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();
    let quiet = matches.get_flag("quiet");

    let reporter: Box<dyn SplitReporter> = if quiet {
        Box::new(SilentSplitReporter::new())
    } else {
        Box::new(ConsoleSplitReporter::new())
    };

    if let Err(e) = run(&matches, reporter.as_ref()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches, reporter: &dyn SplitReporter) -> anyhow::Result<()> {
    let config = SplitConfig::from_args(matches).context("invalid configuration")?;
    split_script(&config, reporter)?;
    Ok(())
}
