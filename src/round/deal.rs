use crate::error::DealError;

use super::{Round, RoundPhase};

impl Round {
    /// Deals two cards to the player and two to the dealer.
    ///
    /// Cards come off the deck in a fixed order: player, player, dealer,
    /// dealer. The dealer's first card is the hole card and stays face down
    /// until revealed.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt this round, or if the
    /// deck runs out (impossible with a full deck and a fresh cursor).
    pub fn deal_initial_cards(&mut self) -> Result<(), DealError> {
        if self.phase != RoundPhase::Fresh {
            return Err(DealError::InvalidState);
        }

        for _ in 0..2 {
            let card = self.next_card().ok_or(DealError::DeckExhausted)?;
            self.player.add_card(card);
        }

        for _ in 0..2 {
            let card = self.next_card().ok_or(DealError::DeckExhausted)?;
            self.dealer.add_card(card);
        }

        self.phase = RoundPhase::Dealt;

        Ok(())
    }
}
