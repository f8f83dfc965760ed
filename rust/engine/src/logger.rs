use std::fmt;
use std::io::Write;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::{format_cards, Card};
use crate::game::HandEnd;
use crate::hand::Category;
use crate::player::Winner;

/// Record of one completed hand. Created once at resolution and never
/// mutated afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandSummary {
    /// 1-based, strictly increasing per engine
    pub hand_number: u32,
    /// Community cards dealt before the hand ended (0, 3, 4 or 5)
    pub board: Vec<Card>,
    pub player_hand: [Card; 2],
    pub opponent_hand: [Card; 2],
    pub winner: Winner,
    /// Chips won by the winner; on a tie, the larger of the two shares
    pub amount: u32,
    /// `None` when the hand ended on a fold
    #[serde(default)]
    pub player_category: Option<Category>,
    #[serde(default)]
    pub opponent_category: Option<Category>,
    pub ended_by: HandEnd,
    /// Timestamp when the hand was settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl fmt::Display for HandSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = if self.board.is_empty() {
            "-".to_string()
        } else {
            format_cards(&self.board)
        };
        write!(
            f,
            "Hand {}: Board {} | You: {} | Bot: {} | Winner: {} | Won: {}",
            self.hand_number,
            board,
            format_cards(&self.player_hand),
            format_cards(&self.opponent_hand),
            self.winner.label(),
            self.amount
        )
    }
}

/// Append-only, ordered list of completed hands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryLog {
    entries: Vec<HandSummary>,
}

impl SummaryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, summary: HandSummary) {
        // inject timestamp if missing
        let mut rec = summary;
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        debug_assert!(self
            .entries
            .last()
            .is_none_or(|prev| prev.hand_number < rec.hand_number));
        self.entries.push(rec);
    }

    pub fn entries(&self) -> &[HandSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HandSummary> {
        self.entries.last()
    }

    /// One JSON object per line, LF terminated.
    pub fn write_jsonl<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        for rec in &self.entries {
            let line = serde_json::to_string(rec).map_err(std::io::Error::other)?;
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
        }
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(hand_number: u32) -> HandSummary {
        let c = |s: &str| s.parse::<Card>().unwrap();
        HandSummary {
            hand_number,
            board: vec![c("As"), c("Kd"), c("7c"), c("2h"), c("9s")],
            player_hand: [c("Qs"), c("Qd")],
            opponent_hand: [c("8c"), c("8d")],
            winner: Winner::Player,
            amount: 400,
            player_category: Some(Category::OnePair),
            opponent_category: Some(Category::OnePair),
            ended_by: HandEnd::Natural,
            ts: None,
        }
    }

    #[test]
    fn display_is_a_single_summary_line() {
        assert_eq!(
            summary(3).to_string(),
            "Hand 3: Board A♠ K♦ 7♣ 2♥ 9♠ | You: Q♠ Q♦ | Bot: 8♣ 8♦ | Winner: You | Won: 400"
        );
    }

    #[test]
    fn push_stamps_missing_timestamps_and_keeps_preset_ones() {
        let mut log = SummaryLog::new();
        log.push(summary(1));
        let preset = "2030-01-01T00:00:00Z".to_string();
        log.push(HandSummary {
            ts: Some(preset.clone()),
            ..summary(2)
        });
        assert!(log.entries()[0].ts.is_some());
        assert_eq!(log.entries()[1].ts.as_deref(), Some(preset.as_str()));
    }

    #[test]
    fn jsonl_has_one_lf_terminated_line_per_hand() {
        let mut log = SummaryLog::new();
        log.push(summary(1));
        log.push(summary(2));
        let mut buf = Vec::new();
        log.write_jsonl(&mut buf).unwrap();
        assert!(buf.ends_with(b"\n"));
        assert!(!buf.contains(&b'\r'));
        let text = String::from_utf8(buf).unwrap();
        let back: Vec<HandSummary> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(back.len(), 2);
        assert_eq!(back[1].hand_number, 2);
    }
}
