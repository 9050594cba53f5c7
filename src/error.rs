//! Error types for shoe and table operations.

use thiserror::Error;

/// Errors that can occur when returning a card to the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The shoe already holds every card of every deck.
    #[error("shoe is full")]
    Full,
    /// Every deck in the shoe already holds this card.
    #[error("every deck already holds this card")]
    IdentityExhausted,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid table state for this action.
    #[error("invalid table state for this action")]
    InvalidState,
    /// No player sits at this seat.
    #[error("seat not found")]
    SeatNotFound,
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Player already holds the maximum number of hands.
    #[error("maximum hands reached")]
    MaxHandsReached,
}

/// Errors that can occur while resolving the dealer's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Invalid table state for resolving.
    #[error("invalid table state for resolving")]
    InvalidState,
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("empty card string")]
    Empty,
    /// Rank symbol is not recognised.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit symbol is not recognised.
    #[error("invalid suit")]
    InvalidSuit,
}
