use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_hand, HandStrength};
use crate::logger::HandSummary;
use crate::player::{Intent, Seat, Winner};
use crate::policy::{Decision, OpponentPolicy, TableView};
use crate::rules::{chips_for, split_pot, Wager};

const PROMPT: &str = "Your move: fold / call / raise / allin / show";

/// Hole cards for both sides plus a full board.
const CARDS_PER_HAND: usize = 2 + 2 + 5;
const FULL_BOARD: usize = 5;

/// Betting street. Only ever moves forward within a hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Round {
    /// Hole cards dealt, no board
    Preflop,
    /// Three board cards
    Flop,
    /// Fourth board card
    Turn,
    /// Fifth board card
    River,
    /// Betting is over and the hand is settled
    Showdown,
}

impl Round {
    pub fn next(self) -> Round {
        match self {
            Round::Preflop => Round::Flop,
            Round::Flop => Round::Turn,
            Round::Turn => Round::River,
            Round::River | Round::Showdown => Round::Showdown,
        }
    }

    fn board_cards_on_entry(self) -> usize {
        match self {
            Round::Flop => 3,
            Round::Turn | Round::River => 1,
            Round::Preflop | Round::Showdown => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Round::Preflop => "preflop",
            Round::Flop => "flop",
            Round::Turn => "turn",
            Round::River => "river",
            Round::Showdown => "showdown",
        }
    }
}

/// How a hand reached showdown.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HandEnd {
    /// The player folded; no hand ranking happens
    Fold,
    /// The player asked to show down early
    Show,
    /// All four streets were played out
    Natural,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandEvent {
    Dealt { hand_number: u32 },
    Rejected(GameError),
    Completed(HandSummary),
}

/// Result of applying one input to a [`GameState`]: the new state plus at
/// most one event for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub event: Option<HandEvent>,
}

impl Transition {
    fn rejected(state: &GameState, err: GameError) -> Transition {
        let mut next = state.clone();
        next.status = match &err {
            GameError::InvalidIntent(token) => {
                format!("Invalid action '{}', try again. {}", token, PROMPT)
            }
            GameError::HandAlreadyComplete => "Hand complete, wait for the next deal.".into(),
            GameError::NoHandDealt => "No hand dealt yet.".into(),
            other => other.to_string(),
        };
        Transition {
            state: next,
            event: Some(HandEvent::Rejected(err)),
        }
    }
}

/// Read-only view of the table for the display collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub round: Round,
    pub board: Vec<Card>,
    pub player_hand: Option<[Card; 2]>,
    /// `None` while the opponent's cards are face down
    pub opponent_hand: Option<[Card; 2]>,
    pub player_stack: u32,
    pub opponent_stack: u32,
    pub player_bet: u32,
    pub opponent_bet: u32,
    pub pot: u32,
    pub bet_to_call: u32,
    pub status: String,
    pub hand_number: u32,
}

/// Complete table state for one heads-up match.
///
/// Values are immutable per transition: every operation borrows the current
/// state and returns a fresh one inside a [`Transition`], so any state can be
/// kept, compared or replayed.
///
/// # Examples
///
/// ```
/// use holdem_engine::deck::Deck;
/// use holdem_engine::game::{GameState, Round};
/// use holdem_engine::player::Intent;
/// use holdem_engine::policy::CallOrShove;
///
/// let table = GameState::new(1_000, 100);
/// let dealt = table.start_hand(Deck::new_with_seed(1)).unwrap().state;
/// let next = dealt.apply_intent(&Intent::Call, &CallOrShove).state;
/// assert_eq!(next.round(), Round::Flop);
/// assert_eq!(next.board().len(), 3);
/// assert_eq!(dealt.round(), Round::Preflop);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    deck: Deck,
    /// Community cards, append-only within a hand
    board: Vec<Card>,
    player: Seat,
    opponent: Seat,
    /// Settled contributions from finished streets
    pot: u32,
    /// Street bet level the acting side has to match
    bet_to_call: u32,
    round: Round,
    ended_by: Option<HandEnd>,
    /// True once the current hand's chips have been awarded
    settled: bool,
    reveal_opponent: bool,
    /// Number of the hand in progress, or of the next one once settled
    hand_number: u32,
    raise_increment: u32,
    status: String,
}

impl GameState {
    pub fn new(starting_stack: u32, raise_increment: u32) -> Self {
        Self {
            deck: Deck::ordered(),
            board: Vec::with_capacity(FULL_BOARD),
            player: Seat::new(starting_stack),
            opponent: Seat::new(starting_stack),
            pot: 0,
            bet_to_call: 0,
            round: Round::Preflop,
            ended_by: None,
            settled: true,
            reveal_opponent: false,
            hand_number: 1,
            raise_increment,
            status: "Waiting for the first deal.".into(),
        }
    }

    pub fn round(&self) -> Round {
        self.round
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn player(&self) -> &Seat {
        &self.player
    }
    pub fn opponent(&self) -> &Seat {
        &self.opponent
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn bet_to_call(&self) -> u32 {
        self.bet_to_call
    }
    pub fn status(&self) -> &str {
        &self.status
    }
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }
    pub fn ended_by(&self) -> Option<HandEnd> {
        self.ended_by
    }
    pub fn is_settled(&self) -> bool {
        self.settled
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Every chip on the table; constant for the lifetime of a match.
    pub fn total_chips(&self) -> u64 {
        [
            self.player.stack(),
            self.player.bet(),
            self.opponent.stack(),
            self.opponent.bet(),
            self.pot,
        ]
        .iter()
        .map(|&c| u64::from(c))
        .sum()
    }

    /// A settled hand left one side without chips.
    pub fn is_match_over(&self) -> bool {
        self.settled && (self.player.stack() == 0 || self.opponent.stack() == 0)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            round: self.round,
            board: self.board.clone(),
            player_hand: self.player.hole_cards(),
            opponent_hand: self
                .opponent
                .hole_cards()
                .filter(|_| self.reveal_opponent),
            player_stack: self.player.stack(),
            opponent_stack: self.opponent.stack(),
            player_bet: self.player.bet(),
            opponent_bet: self.opponent.bet(),
            pot: self.pot,
            bet_to_call: self.bet_to_call,
            status: self.status.clone(),
            hand_number: self.hand_number,
        }
    }

    /// Deals a fresh hand from `deck`: clears the board and the street
    /// bets, gives two hole cards to each side and returns to preflop.
    ///
    /// An unsettled hand in progress is abandoned and every chip it took is
    /// handed back to the side that put it in.
    ///
    /// # Errors
    ///
    /// [`GameError::DeckExhausted`] when `deck` cannot cover a full hand.
    pub fn start_hand(&self, deck: Deck) -> Result<Transition, GameError> {
        if deck.remaining() < CARDS_PER_HAND {
            return Err(GameError::DeckExhausted);
        }
        let mut next = self.clone();
        if !next.settled {
            next.void_hand();
        }
        next.deck = deck;
        next.player.reset_for_hand();
        next.opponent.reset_for_hand();
        next.board.clear();
        next.pot = 0;
        next.bet_to_call = 0;
        let player_hole = next.deal_hole()?;
        let opponent_hole = next.deal_hole()?;
        next.player.give_cards(player_hole);
        next.opponent.give_cards(opponent_hole);
        next.round = Round::Preflop;
        next.ended_by = None;
        next.settled = false;
        next.reveal_opponent = false;
        next.status = format!("New hand dealt. {}", PROMPT);
        debug!(hand = next.hand_number, "hand dealt");
        let hand_number = next.hand_number;
        Ok(Transition {
            state: next,
            event: Some(HandEvent::Dealt { hand_number }),
        })
    }

    /// Applies one player intent.
    ///
    /// Chip-moving intents hand control to `policy` and then advance the
    /// street; `fold` and `show` go straight to showdown. Rejected intents
    /// leave every chip where it was and only update the status text.
    pub fn apply_intent(&self, intent: &Intent, policy: &dyn OpponentPolicy) -> Transition {
        if let Err(e) = self.betting_guard() {
            return Transition::rejected(self, e);
        }
        let mut next = self.clone();
        let event = match intent {
            Intent::Invalid(token) => {
                return Transition::rejected(self, GameError::InvalidIntent(token.clone()));
            }
            Intent::Fold => {
                next.enter_showdown(HandEnd::Fold);
                next.finish()
            }
            Intent::Show => {
                next.enter_showdown(HandEnd::Show);
                let missing = FULL_BOARD.saturating_sub(next.board.len());
                let run_out = next.deck.deal_n(missing);
                next.board.extend(run_out);
                next.finish()
            }
            Intent::Call | Intent::Raise | Intent::AllIn => {
                let lead = match next.player_wager(intent) {
                    Ok(msg) => msg,
                    Err(e) => return Transition::rejected(self, e),
                };
                let reply = next.opponent_step(policy);
                next.advance_step(&format!("{} {}", lead, reply))
            }
        };
        Transition { state: next, event }
    }

    /// Lets the opponent answer the outstanding bet, then advances the street.
    pub fn opponent_act(&self, policy: &dyn OpponentPolicy) -> Transition {
        if let Err(e) = self.betting_guard() {
            return Transition::rejected(self, e);
        }
        let mut next = self.clone();
        let reply = next.opponent_step(policy);
        let event = next.advance_step(&reply);
        Transition { state: next, event }
    }

    /// Settles street bets into the pot and moves to the next street,
    /// dealing its board cards. Reaching showdown resolves the hand.
    pub fn advance_round(&self) -> Transition {
        if let Err(e) = self.betting_guard() {
            return Transition::rejected(self, e);
        }
        let mut next = self.clone();
        let event = next.advance_step("");
        Transition { state: next, event }
    }

    /// Awards the pot for a hand that has reached showdown.
    pub fn resolve(&self) -> Transition {
        let guard = if self.player.hole_cards().is_none() {
            Err(GameError::NoHandDealt)
        } else if self.settled {
            Err(GameError::HandAlreadyComplete)
        } else if self.round != Round::Showdown {
            Err(GameError::HandInProgress)
        } else {
            Ok(())
        };
        if let Err(e) = guard {
            return Transition::rejected(self, e);
        }
        let mut next = self.clone();
        let event = next.finish();
        Transition { state: next, event }
    }

    fn betting_guard(&self) -> Result<(), GameError> {
        if self.player.hole_cards().is_none() {
            Err(GameError::NoHandDealt)
        } else if self.round == Round::Showdown || self.settled {
            Err(GameError::HandAlreadyComplete)
        } else {
            Ok(())
        }
    }

    fn deal_hole(&mut self) -> Result<[Card; 2], GameError> {
        <[Card; 2]>::try_from(self.deck.deal_n(2)).map_err(|_| GameError::DeckExhausted)
    }

    fn table_view(&self) -> TableView {
        TableView {
            round: self.round,
            stack: self.opponent.stack(),
            bet: self.opponent.bet(),
            bet_to_call: self.bet_to_call,
            pot: self.pot,
        }
    }

    fn player_wager(&mut self, intent: &Intent) -> Result<String, GameError> {
        let wager = chips_for(
            intent,
            self.player.stack(),
            self.player.bet(),
            self.bet_to_call,
            self.raise_increment,
        )?;
        let amt = self.player.commit(wager.amount());
        // a short call never lowers what the opponent has to match
        self.bet_to_call = self.bet_to_call.max(self.player.bet());
        debug!(?wager, amt, bet_to_call = self.bet_to_call, "player wager");
        Ok(match (intent, wager) {
            (_, Wager::Call(_)) => "You call.".to_string(),
            (_, Wager::Raise(_)) => format!("You raise {}.", amt),
            (Intent::Call, Wager::AllIn(_)) => format!("You call {} and are all-in.", amt),
            (_, Wager::AllIn(_)) => "You go ALL-IN!".to_string(),
        })
    }

    fn opponent_step(&mut self, policy: &dyn OpponentPolicy) -> String {
        let view = self.table_view();
        let decision = policy.decide(&view);
        let msg = match decision {
            Decision::Call => {
                self.opponent.commit(view.to_call());
                "Bot calls."
            }
            Decision::AllIn => {
                self.opponent.commit(self.opponent.stack());
                self.bet_to_call = self.opponent.bet();
                "Bot ALL-IN!"
            }
        };
        debug!(
            policy = policy.name(),
            ?decision,
            bet = self.opponent.bet(),
            "opponent acted"
        );
        msg.to_string()
    }

    fn advance_step(&mut self, lead: &str) -> Option<HandEvent> {
        self.pot += self.player.sweep() + self.opponent.sweep();
        self.bet_to_call = 0;
        self.round = self.round.next();
        let dealt = self.deck.deal_n(self.round.board_cards_on_entry());
        self.board.extend(dealt);
        debug!(round = self.round.as_str(), pot = self.pot, "street advanced");
        if self.round == Round::Showdown {
            self.enter_showdown(HandEnd::Natural);
            return self.finish();
        }
        self.status = if lead.is_empty() {
            PROMPT.to_string()
        } else {
            format!("{} {}", lead, PROMPT)
        };
        None
    }

    fn enter_showdown(&mut self, how: HandEnd) {
        self.round = Round::Showdown;
        self.ended_by = Some(how);
        self.reveal_opponent = true;
    }

    fn finish(&mut self) -> Option<HandEvent> {
        match self.settle() {
            Ok(summary) => Some(HandEvent::Completed(summary)),
            Err(e) => {
                error!(error = %e, hand = self.hand_number, "showdown failed");
                // hand it back so the table can deal again
                self.void_hand();
                self.settled = true;
                self.status = format!("Hand voided: {}.", e);
                Some(HandEvent::Rejected(e))
            }
        }
    }

    fn strength_of(&self, hole: [Card; 2]) -> Result<HandStrength, GameError> {
        let mut cards = hole.to_vec();
        cards.extend_from_slice(&self.board);
        Ok(evaluate_hand(&cards)?)
    }

    fn settle(&mut self) -> Result<HandSummary, GameError> {
        let (Some(player_hand), Some(opponent_hand)) =
            (self.player.hole_cards(), self.opponent.hole_cards())
        else {
            return Err(GameError::NoHandDealt);
        };
        let ended_by = self.ended_by.unwrap_or(HandEnd::Natural);
        let total = self.pot + self.player.bet() + self.opponent.bet();

        let (winner, player_category, opponent_category) = if ended_by == HandEnd::Fold {
            (Winner::Opponent, None, None)
        } else {
            let ps = self.strength_of(player_hand)?;
            let os = self.strength_of(opponent_hand)?;
            let winner = match ps.cmp(&os) {
                Ordering::Greater => Winner::Player,
                Ordering::Less => Winner::Opponent,
                Ordering::Equal => Winner::Tie,
            };
            (winner, Some(ps.category), Some(os.category))
        };

        self.player.sweep();
        self.opponent.sweep();
        self.pot = 0;
        self.bet_to_call = 0;
        let amount = match winner {
            Winner::Player => {
                self.player.award(total);
                total
            }
            Winner::Opponent => {
                self.opponent.award(total);
                total
            }
            Winner::Tie => {
                let (p, o) = split_pot(total);
                self.player.award(p);
                self.opponent.award(o);
                p
            }
        };

        self.status = match (ended_by, winner, player_category, opponent_category) {
            (HandEnd::Fold, _, _, _) => format!("You folded. Bot wins {}.", amount),
            (_, Winner::Player, Some(c), _) => format!("You win with {}!", c),
            (_, Winner::Opponent, _, Some(c)) => format!("Bot wins with {}!", c),
            (_, Winner::Tie, Some(c), _) => format!("Tie: both {}.", c),
            _ => format!("{} wins {}.", winner.label(), amount),
        };

        let summary = HandSummary {
            hand_number: self.hand_number,
            board: self.board.clone(),
            player_hand,
            opponent_hand,
            winner,
            amount,
            player_category,
            opponent_category,
            ended_by,
            ts: None,
        };
        self.hand_number += 1;
        self.settled = true;
        if self.is_match_over() {
            self.status.push_str(" Game over.");
        }
        info!(
            hand = summary.hand_number,
            winner = winner.label(),
            amount,
            ?ended_by,
            "hand complete"
        );
        Ok(summary)
    }

    fn void_hand(&mut self) {
        let refund_player = self.player.in_hand();
        let refund_opponent = self.opponent.in_hand();
        self.player.sweep();
        self.opponent.sweep();
        self.pot = 0;
        self.player.award(refund_player);
        self.opponent.award(refund_opponent);
        warn!(
            hand = self.hand_number,
            refund_player, refund_opponent, "unfinished hand abandoned"
        );
    }
}
