//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// All 52 cards have been dealt.
    #[error("deck exhausted")]
    DeckExhausted,
}

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input is empty.
    #[error("empty card text")]
    Empty,
    /// The rank token is not one of A, 2-10, J, Q, K.
    #[error("unknown card rank")]
    UnknownRank,
    /// The trailing symbol is not one of ♠, ♥, ♦, ♣.
    #[error("unknown suit symbol")]
    UnknownSuit,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round phase for dealing.
    #[error("invalid round phase for dealing")]
    InvalidState,
    /// All 52 cards have been dealt.
    #[error("deck exhausted")]
    DeckExhausted,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidState,
    /// All 52 cards have been dealt.
    #[error("deck exhausted")]
    DeckExhausted,
}

/// Errors that can occur during the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid round phase for the dealer's turn.
    #[error("invalid round phase for the dealer's turn")]
    InvalidState,
    /// All 52 cards have been dealt.
    #[error("deck exhausted")]
    DeckExhausted,
}
