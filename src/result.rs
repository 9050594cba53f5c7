//! Settlement result types.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Result of a single hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Equal values without a bust.
    Draw,
    /// Player loses (player busts or dealer has higher value).
    Loss,
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "Win",
            Self::Draw => "Draw",
            Self::Loss => "Loss",
        })
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet on the hand at settlement.
    pub bet: u32,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result for a single seat after the dealer resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The seat index.
    pub seat: usize,
    /// Results for each hand (multiple if split).
    pub hands: Vec<HandResult>,
    /// Player money after the round's adjustments.
    pub money: i64,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each seat.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
