//! A single-player 21 round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that manages one round of 21 against
//! the dealer: deck shuffling, the initial deal, player hits, the dealer's
//! fixed stand-on-17 turn, and winner determination. Rendering cards and
//! sequencing user input are left to the caller.
//!
//! # Example
//!
//! ```
//! use twentyone::{Round, RoundOutcome};
//!
//! let mut round = Round::new(42);
//! round.deal_initial_cards().unwrap();
//!
//! while round.player_value() < 17 {
//!     round.player_hit().unwrap();
//! }
//! if round.player_value() <= 21 {
//!     round.player_stand().unwrap();
//! }
//!
//! round.play_dealer_turn().unwrap();
//! let _: RoundOutcome = round.decide_winner();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, DealError, DealerError, DrawError, ParseCardError};
pub use hand::{DealerHand, Hand, hand_value};
pub use result::{RoundOutcome, RoundResult};
pub use round::{Round, RoundPhase};
