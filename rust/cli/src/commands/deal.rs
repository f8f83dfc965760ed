//! Deal command: shows one complete hand for a seed.
//!
//! The hand is dealt by the engine and immediately shown down, so the output
//! is both hole pairs, the full board and the result line.

use crate::error::CliError;
use holdem_engine::cards::format_cards;
use holdem_engine::engine::{Engine, EngineConfig};
use holdem_engine::game::HandEvent;
use holdem_engine::player::Intent;
use holdem_engine::policy::CallOrShove;
use std::io::Write;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let config = EngineConfig {
        seed,
        ..EngineConfig::default()
    };
    let mut eng = Engine::new(config, Box::new(CallOrShove));
    if let Some(HandEvent::Rejected(e)) = eng.start_hand().event {
        return Err(e.into());
    }
    let step = eng.apply_player_intent(Intent::Show);
    let summary = match step.event {
        Some(HandEvent::Completed(summary)) => summary,
        Some(HandEvent::Rejected(e)) => return Err(e.into()),
        _ => return Err(CliError::InvalidInput("hand did not complete".into())),
    };

    writeln!(out, "Seed: {}", eng.seed())?;
    writeln!(out, "You: {}", format_cards(&summary.player_hand))?;
    writeln!(out, "Bot: {}", format_cards(&summary.opponent_hand))?;
    writeln!(out, "Board: {}", format_cards(&summary.board))?;
    let describe = |c: Option<holdem_engine::hand::Category>| {
        c.map(|c| c.to_string()).unwrap_or_else(|| "-".into())
    };
    writeln!(
        out,
        "Result: {} ({} vs {})",
        summary.winner.label(),
        describe(summary.player_category),
        describe(summary.opponent_category)
    )?;
    Ok(())
}
