use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;

/// Player-facing failures. These are absorbed into status text by the
/// [`crate::engine::Engine`] and never terminate the betting loop.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    #[error("Unrecognized intent '{0}'")]
    InvalidIntent(String),
    #[error("Intent '{0}' does not move chips")]
    NotAWager(String),
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Hand is still in progress")]
    HandInProgress,
    #[error("Unknown opponent policy: {0}")]
    UnknownPolicy(String),
    #[error("No hand has been dealt yet")]
    NoHandDealt,
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error(transparent)]
    InvalidHand(#[from] HandError),
}

/// Malformed evaluator input. The state machine only ever passes
/// well-formed hands, so seeing one of these means a caller defect.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandError {
    #[error("Invalid hand: need at least 5 cards, got {count}")]
    TooFewCards { count: usize },
    #[error("Invalid hand: duplicate card {0}")]
    DuplicateCard(Card),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid card code '{0}'")]
pub struct CardParseError(pub String);
