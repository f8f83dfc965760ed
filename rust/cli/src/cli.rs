//! Command-line surface of the `holdem` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "holdem", version, about = "Heads-up Hold'em against a scripted bot")]
pub struct HoldemCli {
    /// Log engine transitions to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against the bot; reads fold/call/raise/allin/show from stdin
    Play {
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many completed hands
        #[arg(long)]
        hands: Option<u32>,
        /// Comma or space separated intents to play instead of reading stdin
        #[arg(long)]
        script: Option<String>,
        /// Milliseconds per engine tick
        #[arg(long, default_value_t = 50)]
        tick_ms: u64,
        /// Write completed hand summaries to this JSONL file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Rank 5-7 cards, e.g. `holdem eval Ah Kh Qh Jh Th`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Second hand to compare against
        #[arg(long, num_args = 1..)]
        against: Vec<String>,
    },
    /// Deal and show down one hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}
