//! # holdem CLI Library
//!
//! Terminal driver for the `holdem-engine` crate. The [`run`] function parses
//! arguments, dispatches to a subcommand and returns the process exit code.
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against the scripted bot (stdin or `--script`)
//! - `eval`: Rank a set of cards, optionally against a second set
//! - `deal`: Deal and show down a single hand for a seed
//! - `cfg`: Display the resolved configuration with value sources
//!
//! ## Example
//!
//! ```
//! use std::io;
//! let args = vec!["holdem", "eval", "Ah", "Kh", "Qh", "Jh", "Th"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use clap::Parser;
use std::io::{BufRead, Cursor, Write};

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{
    PlayOptions, handle_cfg_command, handle_deal_command, handle_eval_command,
    handle_play_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Exit code: `0` for success, `2` for errors, `130` when the player quits
/// with a hand in progress.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Eval { cards, against } => handle_eval_command(&cards, &against, out),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Play {
            seed,
            hands,
            script,
            tick_ms,
            log,
        } => match config::load_with_sources() {
            Ok(resolved) => {
                let input: Box<dyn BufRead + Send> = match script {
                    Some(s) => Box::new(Cursor::new(s)),
                    None => Box::new(std::io::BufReader::new(std::io::stdin())),
                };
                let opts = PlayOptions {
                    seed,
                    hands,
                    tick_ms,
                    log,
                };
                handle_play_command(&opts, &resolved.config, input, out)
            }
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            e.exit_code()
        }
    }
}
