use clap::{Arg, ArgAction, Command};

use crate::config::{DEFAULT_INPUT, DEFAULT_PREFIX};

/// Command-line definition for the `scriptsplit` binary
pub fn build_command() -> Command {
    Command::new("scriptsplit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split a header + fixed-size-record script into evenly sized fragments")
        .allow_negative_numbers(true)
        .after_help(
            "Environment:\n  HEADER_LINES  lines in the shared header (default 11)\n  \
             GROUP_LINES   lines per record group (default 4)",
        )
        .arg(
            Arg::new("input")
                .help(format!("Script to split (default: {})", DEFAULT_INPUT))
                .index(1),
        )
        .arg(
            Arg::new("chunks")
                .help("Number of fragments to produce (default: 12)")
                .index(2),
        )
        .arg(
            Arg::new("header-lines")
                .long("header-lines")
                .help("Lines in the shared header (overrides HEADER_LINES)")
                .value_name("N"),
        )
        .arg(
            Arg::new("group-lines")
                .long("group-lines")
                .help("Lines per record group (overrides GROUP_LINES)")
                .value_name("N"),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory that receives the fragments")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help(format!("Fragment file name prefix (default: {})", DEFAULT_PREFIX))
                .value_name("PREFIX"),
        )
        .arg(
            Arg::new("suffix")
                .long("suffix")
                .help("Fragment file name suffix (default: the input's extension)")
                .value_name("SUFFIX"),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Print the distribution plan without writing fragments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .help("Re-read fragments after writing and check them against the input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode - only errors are printed")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_command().get_matches()
}
