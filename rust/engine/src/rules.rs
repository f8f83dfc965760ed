use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::Intent;

/// A chip-moving intent resolved against a concrete stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wager {
    Call(u32),
    Raise(u32),
    AllIn(u32),
}

impl Wager {
    pub fn amount(self) -> u32 {
        match self {
            Wager::Call(n) | Wager::Raise(n) | Wager::AllIn(n) => n,
        }
    }
}

/// Converts a chip-moving [`Intent`] into the number of chips it commits.
///
/// Contributions are always clamped to `stack`: a call the stack cannot
/// cover becomes a partial all-in, and a raise is the fixed increment or
/// whatever is left.
///
/// # Arguments
///
/// * `stack` - Chips the actor has behind
/// * `bet` - What the actor already put in on this street
/// * `bet_to_call` - Street bet level the actor has to match
/// * `raise_increment` - Fixed raise size
///
/// # Errors
///
/// - [`GameError::InvalidIntent`] for unrecognized tokens
/// - [`GameError::NotAWager`] for `fold` and `show`
///
/// # Examples
///
/// ```
/// use holdem_engine::player::Intent;
/// use holdem_engine::rules::{chips_for, Wager};
///
/// // 100 to call with only 30 behind: forced partial call
/// assert_eq!(chips_for(&Intent::Call, 30, 0, 100, 100), Ok(Wager::AllIn(30)));
/// assert_eq!(chips_for(&Intent::Raise, 1000, 0, 0, 100), Ok(Wager::Raise(100)));
/// ```
pub fn chips_for(
    intent: &Intent,
    stack: u32,
    bet: u32,
    bet_to_call: u32,
    raise_increment: u32,
) -> Result<Wager, GameError> {
    match intent {
        Intent::Call => {
            let to_call = bet_to_call.saturating_sub(bet);
            if to_call > 0 && stack <= to_call {
                Ok(Wager::AllIn(stack))
            } else {
                Ok(Wager::Call(to_call))
            }
        }
        Intent::Raise => {
            if stack > 0 && raise_increment >= stack {
                Ok(Wager::AllIn(stack))
            } else {
                Ok(Wager::Raise(raise_increment.min(stack)))
            }
        }
        Intent::AllIn => Ok(Wager::AllIn(stack)),
        Intent::Fold | Intent::Show => Err(GameError::NotAWager(intent.as_str().to_string())),
        Intent::Invalid(token) => Err(GameError::InvalidIntent(token.clone())),
    }
}

/// Splits a tied pot. The odd chip goes to the player.
///
/// ```
/// use holdem_engine::rules::split_pot;
///
/// assert_eq!(split_pot(101), (51, 50));
/// ```
pub fn split_pot(total: u32) -> (u32, u32) {
    let opponent = total / 2;
    (total - opponent, opponent)
}
