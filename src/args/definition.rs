//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;
use tallybox::app::RunOptions;

/// tallybox - A terminal calculator with keypad, keyboard input and a persistent history
#[derive(Parser, Debug)]
#[command(name = "tallybox")]
#[command(version)]
#[command(about = "A terminal calculator with keypad, keyboard input and a persistent history", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Use this configuration directory instead of ~/.config/tallybox
    #[arg(long)]
    pub config_dir: Option<String>,

    /// Read and write history from this file instead of the configured one
    #[arg(long)]
    pub history_file: Option<PathBuf>,

    /// Keep history for this session only (nothing is read from or written to disk)
    #[arg(long)]
    pub no_persist: bool,

    /// Print the saved history to stdout and exit
    #[arg(short = 'p', long)]
    pub print_history: bool,

    /// Clear the saved history and exit
    #[arg(long)]
    pub clear_history: bool,
}

/// What: Process command-line arguments and handle early-exit flags.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Session options for the TUI when no early-exit flag was given.
///
/// Details:
/// - `--clear-history` runs before `--print-history`; both exit the process.
pub fn process_args(args: &Args) -> RunOptions {
    use crate::args::history;

    if args.clear_history {
        history::handle_clear_history(args.history_file.as_deref());
    }
    if args.print_history {
        history::handle_print_history(args.history_file.as_deref());
    }

    RunOptions {
        history_file: args.history_file.clone(),
        persist: !args.no_persist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flags map onto session options.
    ///
    /// Inputs:
    /// - `--no-persist --history-file /tmp/h.json`
    ///
    /// Output:
    /// - `persist == false` and the history file override carried through.
    fn process_args_builds_run_options() {
        let args = Args::parse_from([
            "tallybox",
            "--no-persist",
            "--history-file",
            "/tmp/h.json",
        ]);
        let opts = process_args(&args);
        assert!(!opts.persist);
        assert_eq!(opts.history_file, Some(PathBuf::from("/tmp/h.json")));

        let defaults = process_args(&Args::parse_from(["tallybox"]));
        assert_eq!(defaults, RunOptions::default());
    }

    #[test]
    /// What: Short flags parse.
    fn short_flags_parse() {
        let args = Args::parse_from(["tallybox", "-v", "-p"]);
        assert!(args.verbose);
        assert!(args.print_history);
        assert_eq!(args.log_level, "info");
    }
}
