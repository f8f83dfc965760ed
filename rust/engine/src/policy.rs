//! Opponent decision seam.
//!
//! The state machine only asks a policy for a [`Decision`]; the chip
//! arithmetic that follows is always done by the state machine itself, so a
//! policy can never create or destroy chips.

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::Round;

/// What the opponent can see when it has to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView {
    pub round: Round,
    /// Opponent's chips behind
    pub stack: u32,
    /// Opponent's contribution on this street
    pub bet: u32,
    pub bet_to_call: u32,
    pub pot: u32,
}

impl TableView {
    pub fn to_call(&self) -> u32 {
        self.bet_to_call.saturating_sub(self.bet)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Put in exactly the outstanding amount
    Call,
    /// Put in the whole stack
    AllIn,
}

/// Trait defining the interface for opponent decision-making.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_engine::policy::{Decision, OpponentPolicy, TableView};
///
/// struct AlwaysShove;
///
/// impl OpponentPolicy for AlwaysShove {
///     fn decide(&self, _view: &TableView) -> Decision {
///         Decision::AllIn
///     }
///
///     fn name(&self) -> &str {
///         "always-shove"
///     }
/// }
/// ```
pub trait OpponentPolicy: Send + Sync {
    fn decide(&self, view: &TableView) -> Decision;

    fn name(&self) -> &str;
}

/// Calls whenever the stack covers the outstanding amount, otherwise
/// shoves what is left. Never bluffs, never raises.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallOrShove;

impl OpponentPolicy for CallOrShove {
    fn decide(&self, view: &TableView) -> Decision {
        if view.to_call() <= view.stack {
            Decision::Call
        } else {
            Decision::AllIn
        }
    }

    fn name(&self) -> &str {
        "call-or-shove"
    }
}

/// Factory for opponent policies by name.
///
/// ```rust
/// use holdem_engine::policy::create_policy;
///
/// let policy = create_policy("baseline").unwrap();
/// assert_eq!(policy.name(), "call-or-shove");
/// assert!(create_policy("gto").is_err());
/// ```
pub fn create_policy(name: &str) -> Result<Box<dyn OpponentPolicy>, GameError> {
    match name {
        "call-or-shove" | "baseline" => Ok(Box::new(CallOrShove)),
        _ => Err(GameError::UnknownPolicy(name.to_string())),
    }
}
