//! Single-slot hand-off between an intent producer and the engine.
//!
//! The producer (a gesture recognizer, a terminal reader, a script) pushes
//! raw tokens; the engine side polls without ever blocking. Only one intent
//! can be pending at a time.

use std::cell::Cell;
use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TryRecvError, TrySendError};

use tracing::trace;

use crate::player::Intent;

/// Creates a connected sender/receiver pair with room for one token.
///
/// ```
/// use holdem_engine::channel::intent_channel;
/// use holdem_engine::player::Intent;
///
/// let (tx, rx) = intent_channel();
/// assert!(rx.try_next().is_none());
/// assert!(tx.offer("raise"));
/// assert!(!tx.offer("fold")); // slot already taken
/// assert_eq!(rx.try_next(), Some(Intent::Raise));
/// ```
pub fn intent_channel() -> (IntentSender, IntentReceiver) {
    let (tx, rx) = sync_channel(1);
    (
        IntentSender { tx },
        IntentReceiver {
            rx,
            closed: Cell::new(false),
        },
    )
}

#[derive(Debug, Clone)]
pub struct IntentSender {
    tx: SyncSender<String>,
}

impl IntentSender {
    /// Hands over `token` if the slot is free. Returns `false` when an
    /// intent is still pending or the engine side is gone.
    pub fn offer(&self, token: impl Into<String>) -> bool {
        match self.tx.try_send(token.into()) {
            Ok(()) => true,
            Err(TrySendError::Full(token)) => {
                trace!(%token, "intent slot busy, token dropped");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Waits for the slot to free up. Returns `false` once the engine side
    /// has been dropped.
    pub fn send(&self, token: impl Into<String>) -> bool {
        self.tx.send(token.into()).is_ok()
    }
}

#[derive(Debug)]
pub struct IntentReceiver {
    rx: Receiver<String>,
    closed: Cell<bool>,
}

impl IntentReceiver {
    /// Takes the pending intent, if any. Never blocks; a producer that has
    /// gone away looks exactly like one with nothing to say.
    pub fn try_next(&self) -> Option<Intent> {
        match self.rx.try_recv() {
            Ok(token) => Some(Intent::from_token(&token)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.closed.set(true);
                None
            }
        }
    }

    /// True once every sender has been dropped and the slot drained.
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}
