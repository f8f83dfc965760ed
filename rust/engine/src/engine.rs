use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::channel::IntentReceiver;
use crate::deck::Deck;
use crate::game::{GameState, HandEvent, Snapshot, Transition};
use crate::logger::SummaryLog;
use crate::player::{Intent, RAISE_INCREMENT, STARTING_STACK};
use crate::policy::{CallOrShove, OpponentPolicy};

/// Tunables for an [`Engine`] session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Chips each side starts the match with
    pub starting_stack: u32,
    /// Fixed size of a raise
    pub raise_increment: u32,
    /// Ticks a settled hand stays on display before the next deal
    pub settle_ticks: u32,
    /// Shuffle seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            raise_increment: RAISE_INCREMENT,
            settle_ticks: 30,
            seed: None,
        }
    }
}

/// What one call into the engine produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub snapshot: Snapshot,
    pub event: Option<HandEvent>,
}

/// Driver-facing facade over [`GameState`] for a human vs. scripted
/// opponent match.
///
/// The caller owns the loop: feed it ticks and intents, render the returned
/// [`Step`]. The engine never sleeps, spawns or blocks, and rejected input
/// only ever shows up as status text plus a [`HandEvent::Rejected`].
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::{Engine, EngineConfig};
/// use holdem_engine::game::HandEvent;
/// use holdem_engine::player::Intent;
/// use holdem_engine::policy::CallOrShove;
///
/// let config = EngineConfig { seed: Some(7), ..EngineConfig::default() };
/// let mut engine = Engine::new(config, Box::new(CallOrShove));
/// engine.start_hand();
///
/// let step = engine.apply_player_intent(Intent::Fold);
/// assert!(matches!(step.event, Some(HandEvent::Completed(_))));
/// assert_eq!(engine.summaries().len(), 1);
/// assert_eq!(step.snapshot.player_stack + step.snapshot.opponent_stack, 2_000);
/// ```
pub struct Engine {
    state: GameState,
    policy: Box<dyn OpponentPolicy>,
    /// Seeded once per session; every hand draws a fresh permutation from it
    rng: ChaCha20Rng,
    seed: u64,
    summaries: SummaryLog,
    settle_ticks: u32,
    /// Ticks left before the next deal, `None` while a hand is being played
    settle_remaining: Option<u32>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("policy", &self.policy.name())
            .field("seed", &self.seed)
            .field("summaries", &self.summaries.len())
            .field("settle_remaining", &self.settle_remaining)
            .finish()
    }
}

impl Engine {
    pub fn new(config: EngineConfig, policy: Box<dyn OpponentPolicy>) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, policy = policy.name(), "engine created");
        Self {
            state: GameState::new(config.starting_stack, config.raise_increment),
            policy,
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            summaries: SummaryLog::new(),
            settle_ticks: config.settle_ticks,
            // the first tick deals the opening hand
            settle_remaining: Some(0),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default(), Box::new(CallOrShove))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }
    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
    pub fn summaries(&self) -> &SummaryLog {
        &self.summaries
    }
    pub fn is_match_over(&self) -> bool {
        self.state.is_match_over()
    }

    /// Shuffles a fresh deck and deals a new hand.
    pub fn start_hand(&mut self) -> Step {
        let deck = Deck::shuffled(&mut self.rng);
        match self.state.start_hand(deck) {
            Ok(t) => self.record(t),
            Err(e) => {
                // a freshly shuffled deck always covers a hand
                error!(error = %e, "failed to deal");
                Step {
                    snapshot: self.state.snapshot(),
                    event: Some(HandEvent::Rejected(e)),
                }
            }
        }
    }

    pub fn apply_player_intent(&mut self, intent: Intent) -> Step {
        debug!(intent = intent.as_str(), "player intent");
        let t = self.state.apply_intent(&intent, self.policy.as_ref());
        self.record(t)
    }

    pub fn opponent_act(&mut self) -> Step {
        let t = self.state.opponent_act(self.policy.as_ref());
        self.record(t)
    }

    pub fn advance_round(&mut self) -> Step {
        let t = self.state.advance_round();
        self.record(t)
    }

    pub fn resolve(&mut self) -> Step {
        let t = self.state.resolve();
        self.record(t)
    }

    /// Advances the settle countdown. Once it runs out the next hand is
    /// dealt, unless one side has no chips left.
    pub fn tick(&mut self) -> Option<Step> {
        match self.settle_remaining {
            Some(0) if !self.state.is_match_over() => Some(self.start_hand()),
            Some(n) if n > 0 => {
                self.settle_remaining = Some(n - 1);
                None
            }
            _ => None,
        }
    }

    /// Applies the pending intent from `rx`, or ticks when there is none.
    /// While a settled hand counts down the channel is left alone, so an
    /// intent sent early waits for the next deal.
    pub fn poll(&mut self, rx: &IntentReceiver) -> Option<Step> {
        if self.state.is_settled() {
            return self.tick();
        }
        match rx.try_next() {
            Some(intent) => Some(self.apply_player_intent(intent)),
            None => self.tick(),
        }
    }

    fn record(&mut self, t: Transition) -> Step {
        self.state = t.state;
        let event = match t.event {
            Some(HandEvent::Completed(summary)) => {
                self.summaries.push(summary);
                self.settle_remaining = Some(self.settle_ticks);
                // hand back the stamped copy so callers see what was logged
                self.summaries.last().cloned().map(HandEvent::Completed)
            }
            Some(HandEvent::Dealt { hand_number }) => {
                self.settle_remaining = None;
                Some(HandEvent::Dealt { hand_number })
            }
            Some(HandEvent::Rejected(e)) => {
                // a voided hand settles without a summary
                if self.state.is_settled() && self.settle_remaining.is_none() {
                    self.settle_remaining = Some(self.settle_ticks);
                }
                warn!(error = %e, status = self.state.status(), "input rejected");
                Some(HandEvent::Rejected(e))
            }
            None => None,
        };
        Step {
            snapshot: self.state.snapshot(),
            event,
        }
    }
}
