//! # holdem-engine: Heads-up Hold'em Core
//!
//! A two-player Texas Hold'em engine: one human player against a scripted
//! opponent. It manages chip stacks, deals cards, runs the betting street
//! state machine from preflop to showdown and ranks hands to settle pots.
//! Capturing input and drawing the table are left to the caller.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Shuffled 52-card deck dealt from the front
//! - [`hand`] - Best-of-N hand evaluation and strength comparison
//! - [`player`] - Player intents and per-side chip accounting
//! - [`rules`] - Betting arithmetic (call/raise/all-in clamping, pot split)
//! - [`policy`] - Opponent decision seam and the call-or-shove policy
//! - [`game`] - Immutable-per-transition hand state machine
//! - [`logger`] - Completed hand summaries
//! - [`channel`] - Non-blocking single-slot intent hand-off
//! - [`engine`] - Tick/intent driven facade used by drivers
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::Card;
//! use holdem_engine::hand::{compare_hands, evaluate_hand};
//!
//! let parse = |codes: &[&str]| -> Vec<Card> {
//!     codes.iter().map(|c| c.parse().unwrap()).collect()
//! };
//! let flush = evaluate_hand(&parse(&["2h", "7h", "Jh", "Qh", "9h", "Ac", "Kd"])).unwrap();
//! let straight = evaluate_hand(&parse(&["5c", "6h", "7c", "8h", "9d", "2s", "3c"])).unwrap();
//! assert!(compare_hands(&flush, &straight).is_gt());
//! ```
//!
//! ## Driving a Match
//!
//! ```rust
//! use holdem_engine::channel::intent_channel;
//! use holdem_engine::engine::{Engine, EngineConfig};
//! use holdem_engine::policy::CallOrShove;
//!
//! let config = EngineConfig { seed: Some(42), settle_ticks: 0, ..EngineConfig::default() };
//! let mut engine = Engine::new(config, Box::new(CallOrShove));
//! let (tx, rx) = intent_channel();
//!
//! for token in ["call", "call", "call", "call"] {
//!     engine.poll(&rx); // deals on the first tick, then waits
//!     tx.offer(token);
//! }
//! engine.poll(&rx);
//! assert_eq!(engine.summaries().len(), 1);
//! ```

pub mod cards;
pub mod channel;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod policy;
pub mod rules;
