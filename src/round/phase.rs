//! Round lifecycle types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Deck shuffled, hands empty, waiting for the initial deal.
    Fresh,
    /// Initial cards dealt; the player is acting.
    Dealt,
    /// The player has stood or busted.
    PlayerDone,
    /// The dealer has played out their hand.
    DealerDone,
}
