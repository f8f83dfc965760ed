//! Command handler modules for the `holdem` CLI.
//!
//! Each command lives in its own file and exposes a
//! `handle_COMMAND_command(...) -> Result<(), CliError>` function. Output
//! streams are passed in as `&mut dyn Write` so tests can capture them.

mod cfg;
mod deal;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::{PlayOptions, handle_play_command};
