use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DealerError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Round, RoundPhase};

impl Round {
    /// Marks the dealer's hole card as revealed.
    ///
    /// Purely a display-state flag: [`Round::dealer_value`] always scores
    /// the full hand regardless. Collaborators consult
    /// [`is_hole_revealed`](crate::hand::DealerHand::is_hole_revealed) to
    /// decide whether to render the hole card face down.
    pub const fn reveal_dealer_card(&mut self) {
        self.dealer.reveal_hole();
    }

    /// Plays out the dealer's hand.
    ///
    /// Reveals the hole card, then draws while the dealer's total is below
    /// 17. The dealer stands on any 17 or higher, soft or hard. Returns the
    /// drawn cards in order; empty when the dealer already stood pat.
    ///
    /// # Errors
    ///
    /// Returns an error if called before the initial deal or after the
    /// dealer has already played, or if the deck runs out while the dealer
    /// must draw.
    pub fn play_dealer_turn(&mut self) -> Result<Vec<Card>, DealerError> {
        match self.phase {
            RoundPhase::Dealt | RoundPhase::PlayerDone => {}
            RoundPhase::Fresh | RoundPhase::DealerDone => {
                return Err(DealerError::InvalidState);
            }
        }

        self.dealer.reveal_hole();

        let mut drawn = Vec::new();

        while self.dealer.value() < 17 {
            let card = self.next_card().ok_or(DealerError::DeckExhausted)?;
            self.dealer.add_card(card);
            drawn.push(card);
        }

        self.phase = RoundPhase::DealerDone;

        Ok(drawn)
    }

    /// Decides the round outcome from the two hands as they stand.
    ///
    /// Precedence: a player bust loses regardless of the dealer's total,
    /// then a dealer bust wins for the player, then the higher total wins,
    /// and equal totals push. Pure and idempotent; nothing is mutated.
    #[must_use]
    pub fn decide_winner(&self) -> RoundOutcome {
        let player = self.player.value();
        let dealer = self.dealer.value();

        if player > 21 {
            RoundOutcome::PlayerBust
        } else if dealer > 21 {
            RoundOutcome::DealerBust
        } else if player > dealer {
            RoundOutcome::PlayerWin
        } else if dealer > player {
            RoundOutcome::DealerWin
        } else {
            RoundOutcome::Push
        }
    }

    /// Packages [`Round::decide_winner`] with both final hand values.
    #[must_use]
    pub fn result(&self) -> RoundResult {
        RoundResult {
            outcome: self.decide_winner(),
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
        }
    }
}
