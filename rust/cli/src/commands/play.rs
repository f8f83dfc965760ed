//! # Play Command
//!
//! Drives a match between the terminal user and the scripted opponent.
//!
//! A producer thread reads tokens (from stdin or a `--script` list) and
//! hands them to the engine through the single-slot intent channel. The
//! main loop owns the engine and polls it; intents typed while a hand is
//! settling are held until the next deal. `q`/`quit` stops the producer;
//! quitting with a hand in progress exits with 130.

use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use holdem_engine::channel::{IntentSender, intent_channel};
use holdem_engine::engine::Engine;
use holdem_engine::policy::create_policy;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Overrides the configured seed
    pub seed: Option<u64>,
    /// Stop after this many completed hands
    pub hands: Option<u32>,
    /// Milliseconds between engine ticks when there is nothing to do
    pub tick_ms: u64,
    /// Write hand summaries as JSONL here when the session ends
    pub log: Option<PathBuf>,
}

enum Outcome {
    Finished,
    Abandoned(u32),
}

pub fn handle_play_command(
    opts: &PlayOptions,
    config: &Config,
    input: Box<dyn BufRead + Send>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.hands == Some(0) {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let policy = create_policy(&config.policy)?;
    let mut engine = Engine::new(config.engine_config(opts.seed), policy);
    writeln!(
        out,
        "play: seed={} policy={} stack={}",
        engine.seed(),
        engine.policy_name(),
        config.starting_stack
    )?;

    let (tx, rx) = intent_channel();
    let quit = Arc::new(AtomicBool::new(false));
    // never joined: a producer blocked on a terminal read must not hold up exit
    spawn_producer(input, tx, Arc::clone(&quit));

    let outcome = loop {
        let step = engine.poll(&rx);
        let idle = step.is_none();
        if let Some(step) = &step {
            ui::render_step(out, step)?;
            out.flush()?;
        }

        if engine.is_match_over() {
            writeln!(out, "Match over.")?;
            break Outcome::Finished;
        }
        if opts
            .hands
            .is_some_and(|n| engine.summaries().len() >= n as usize)
        {
            break Outcome::Finished;
        }
        if rx.is_closed() {
            if quit.load(Ordering::SeqCst) && !engine.state().is_settled() {
                break Outcome::Abandoned(engine.state().hand_number());
            }
            break Outcome::Finished;
        }
        if idle {
            if opts.tick_ms > 0 {
                thread::sleep(Duration::from_millis(opts.tick_ms));
            } else {
                thread::yield_now();
            }
        }
    };

    let snap = engine.snapshot();
    writeln!(
        out,
        "Hands played: {}. Final stacks: You {} / Bot {}",
        engine.summaries().len(),
        snap.player_stack,
        snap.opponent_stack
    )?;
    if let Some(path) = &opts.log {
        let mut w = BufWriter::new(File::create(path)?);
        engine.summaries().write_jsonl(&mut w)?;
        info!(path = %path.display(), hands = engine.summaries().len(), "summaries written");
    }

    match outcome {
        Outcome::Finished => Ok(()),
        Outcome::Abandoned(hand) => Err(CliError::Interrupted(format!(
            "quit during hand {}",
            hand
        ))),
    }
}

fn spawn_producer(input: Box<dyn BufRead + Send>, tx: IntentSender, quit: Arc<AtomicBool>) {
    thread::spawn(move || {
        for line in input.lines() {
            let Ok(line) = line else { break };
            let tokens = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty());
            for token in tokens {
                if matches!(token.to_ascii_lowercase().as_str(), "q" | "quit") {
                    quit.store(true, Ordering::SeqCst);
                    return;
                }
                if !tx.send(token) {
                    return;
                }
            }
        }
        debug!("input exhausted");
    });
}
