//! Plain-text table rendering for the terminal driver.

use std::io::Write;

use holdem_engine::cards::format_cards;
use holdem_engine::engine::Step;
use holdem_engine::game::{HandEvent, Snapshot};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// One line per table element; hidden hole cards print as `?? ??`.
pub fn render_snapshot(out: &mut dyn Write, snap: &Snapshot) -> std::io::Result<()> {
    let board = if snap.board.is_empty() {
        "-".to_string()
    } else {
        format_cards(&snap.board)
    };
    let hole = |h: Option<[holdem_engine::cards::Card; 2]>| {
        h.map(|c| format_cards(&c)).unwrap_or_else(|| "?? ??".into())
    };
    writeln!(out, "[{}] Board: {}", snap.round.as_str(), board)?;
    writeln!(
        out,
        "You: {} stack={} bet={}",
        hole(snap.player_hand),
        snap.player_stack,
        snap.player_bet
    )?;
    writeln!(
        out,
        "Bot: {} stack={} bet={}",
        hole(snap.opponent_hand),
        snap.opponent_stack,
        snap.opponent_bet
    )?;
    writeln!(out, "Pot: {} To call: {}", snap.pot, snap.bet_to_call)?;
    writeln!(out, "{}", snap.status)
}

pub fn render_step(out: &mut dyn Write, step: &Step) -> std::io::Result<()> {
    match &step.event {
        Some(HandEvent::Dealt { hand_number }) => {
            writeln!(out, "--- Hand {} ---", hand_number)?;
            render_snapshot(out, &step.snapshot)
        }
        // status already says what was wrong, the table did not move
        Some(HandEvent::Rejected(_)) => writeln!(out, "{}", step.snapshot.status),
        Some(HandEvent::Completed(summary)) => {
            render_snapshot(out, &step.snapshot)?;
            writeln!(out, "{}", summary)
        }
        None => render_snapshot(out, &step.snapshot),
    }
}
