//! Round engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;
use crate::hand::{DealerHand, Hand};

mod actions;
mod deal;
mod dealer;
pub mod phase;

pub use phase::RoundPhase;

/// A single-player 21 round engine.
///
/// The engine owns the shuffled deck, the player's and dealer's hands, and
/// the round phase. It is the sole authority on deck contents, scoring, and
/// outcome; a presentation layer drives it through the operations below and
/// renders the results.
#[derive(Debug, Clone)]
pub struct Round {
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
    /// The deck for this round, shuffled at round start.
    deck: Vec<Card>,
    /// Index of the next card to deal. Cards are consumed by advancing this
    /// cursor, never by removing them from the deck.
    next: usize,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Current round phase.
    phase: RoundPhase,
}

impl Round {
    /// Creates a new engine with the given seed and a fresh shuffled round.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Round, RoundPhase};
    ///
    /// let round = Round::new(42);
    /// assert_eq!(round.phase(), RoundPhase::Fresh);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::build_deck(&mut rng);

        Self {
            rng,
            deck,
            next: 0,
            player: Hand::new(),
            dealer: DealerHand::new(),
            phase: RoundPhase::Fresh,
        }
    }

    /// Creates and shuffles a 52-card deck.
    fn build_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Starts a new round, discarding all prior round state.
    ///
    /// Builds a fresh shuffled deck, resets the draw cursor, clears both
    /// hands, and hides the dealer's hole card again. Available from any
    /// phase.
    pub fn new_round(&mut self) {
        self.deck = Self::build_deck(&mut self.rng);
        self.next = 0;
        self.player.clear();
        self.dealer.clear();
        self.phase = RoundPhase::Fresh;
    }

    /// Draws the card at the cursor and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error once all 52 cards have been dealt. The engine never
    /// wraps around or reshuffles mid-round.
    pub fn draw_card(&mut self) -> Result<Card, DrawError> {
        self.next_card().ok_or(DrawError::DeckExhausted)
    }

    /// Internal draw used by the round operations.
    fn next_card(&mut self) -> Option<Card> {
        let card = self.deck.get(self.next).copied()?;
        self.next += 1;
        Some(card)
    }

    /// Replaces the deck with the given cards, in draw order, and resets the
    /// draw cursor.
    ///
    /// Intended for scripted deals in tests; normal play uses the shuffled
    /// deck from [`Round::new_round`].
    pub fn set_deck(&mut self, cards: Vec<Card>) {
        self.deck = cards;
        self.next = 0;
    }

    /// Returns the number of cards not yet dealt.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len().saturating_sub(self.next)
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the player's full hand value.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    /// Returns the dealer's full hand value.
    ///
    /// Always computed over the whole hand, revealed or not; masking a
    /// hidden hole card is a presentation concern served by
    /// [`DealerHand::visible_value`].
    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        self.dealer.value()
    }
}
