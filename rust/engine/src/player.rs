use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Default starting stack size for each side in chips
pub const STARTING_STACK: u32 = 1_000;

/// Fixed size of a raise
pub const RAISE_INCREMENT: u32 = 100;

/// A discrete player decision as delivered by the intent source.
///
/// The token set is closed; anything else becomes [`Intent::Invalid`]
/// carrying the original token so it can be reported back.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Give up the hand; the opponent takes everything in the middle
    Fold,
    /// Match the outstanding bet, or as much of it as the stack allows
    Call,
    /// Add the fixed raise increment
    Raise,
    /// Commit the entire remaining stack
    AllIn,
    /// Skip the remaining betting and go straight to showdown
    Show,
    Invalid(String),
}

impl Intent {
    /// Parses an intent token (`fold`, `call`, `raise`, `allin`, `show`).
    ///
    /// ```
    /// use holdem_engine::player::Intent;
    ///
    /// assert_eq!(Intent::from_token(" Call\n"), Intent::Call);
    /// assert_eq!(Intent::from_token("all-in"), Intent::AllIn);
    /// assert_eq!(Intent::from_token("bluff"), Intent::Invalid("bluff".into()));
    /// ```
    pub fn from_token(token: &str) -> Intent {
        let t = token.trim();
        match t.to_ascii_lowercase().as_str() {
            "fold" => Intent::Fold,
            "call" => Intent::Call,
            "raise" => Intent::Raise,
            "allin" | "all-in" => Intent::AllIn,
            "show" => Intent::Show,
            _ => Intent::Invalid(t.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Intent::Fold => "fold",
            Intent::Call => "call",
            Intent::Raise => "raise",
            Intent::AllIn => "allin",
            Intent::Show => "show",
            Intent::Invalid(token) => token,
        }
    }

    /// True for the intents that move chips and hand control to the opponent.
    pub fn is_wager(&self) -> bool {
        matches!(self, Intent::Call | Intent::Raise | Intent::AllIn)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Opponent,
    Tie,
}

impl Winner {
    pub fn label(self) -> &'static str {
        match self {
            Winner::Player => "You",
            Winner::Opponent => "Bot",
            Winner::Tie => "Tie",
        }
    }
}

/// Economic state of one side of the table.
///
/// Chips only ever move stack -> bet -> pot -> (winner's) stack; a seat can
/// never commit more than it holds.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// Chips behind
    stack: u32,
    /// Contribution on the current street
    bet: u32,
    /// Contribution over the whole current hand
    in_hand: u32,
    /// Lifetime contribution to pots
    committed: u64,
    hole: Option<[Card; 2]>,
}

impl Seat {
    pub fn new(stack: u32) -> Self {
        Self {
            stack,
            bet: 0,
            in_hand: 0,
            committed: 0,
            hole: None,
        }
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn bet(&self) -> u32 {
        self.bet
    }
    pub fn in_hand(&self) -> u32 {
        self.in_hand
    }
    pub fn committed(&self) -> u64 {
        self.committed
    }
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }

    pub fn give_cards(&mut self, hole: [Card; 2]) {
        self.hole = Some(hole);
    }

    /// Clears per-hand state; the stack carries over.
    pub fn reset_for_hand(&mut self) {
        self.bet = 0;
        self.in_hand = 0;
        self.hole = None;
    }

    /// Moves up to `amount` chips from the stack into the current bet and
    /// returns how many actually moved.
    pub fn commit(&mut self, amount: u32) -> u32 {
        let amt = amount.min(self.stack);
        self.stack -= amt;
        self.bet += amt;
        self.in_hand += amt;
        self.committed += u64::from(amt);
        amt
    }

    /// Takes the current bet out of the seat (it goes to the pot).
    pub fn sweep(&mut self) -> u32 {
        std::mem::take(&mut self.bet)
    }

    pub fn award(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }
}
