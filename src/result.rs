//! Round outcome types.

/// Outcome of a round, in decision order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player went over 21; the dealer wins regardless of their total.
    PlayerBust,
    /// The dealer went over 21; the player wins.
    DealerBust,
    /// The player has the higher total.
    PlayerWin,
    /// The dealer has the higher total.
    DealerWin,
    /// Equal totals; nobody wins.
    Push,
}

/// Outcome of a round together with both final hand values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}
