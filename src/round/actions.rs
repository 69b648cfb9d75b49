use crate::card::Card;
use crate::error::ActionError;

use super::{Round, RoundPhase};

impl Round {
    /// Player action: hit (draw a card).
    ///
    /// Appends the drawn card to the player's hand and returns it. The
    /// engine does not end the round on its own; the caller is expected to
    /// check [`Round::player_value`] afterward and decide what follows. A
    /// bust does close the player's turn, so further hits fail clearly.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not acting or the deck is
    /// exhausted.
    pub fn player_hit(&mut self) -> Result<Card, ActionError> {
        if self.phase != RoundPhase::Dealt {
            return Err(ActionError::InvalidState);
        }

        let card = self.next_card().ok_or(ActionError::DeckExhausted)?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.phase = RoundPhase::PlayerDone;
        }

        Ok(card)
    }

    /// Player action: stand (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not acting.
    pub fn player_stand(&mut self) -> Result<(), ActionError> {
        if self.phase != RoundPhase::Dealt {
            return Err(ActionError::InvalidState);
        }

        self.phase = RoundPhase::PlayerDone;

        Ok(())
    }
}
