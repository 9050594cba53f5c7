use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::error::ResolveError;
use crate::hand::Hand;
use crate::result::{PlayerResult, RoundResult};

use super::{Table, TableState};

/// The dealer draws below this value and stands on it, soft or hard.
const DEALER_STANDS_ON: u8 = 17;

impl<R: Rng> Table<R> {
    /// Plays the dealer's hand and settles every seated hand against it.
    ///
    /// The dealer draws until reaching 17 or more and stands on soft 17.
    /// Each hand's outcome is also recorded on the hand itself.
    ///
    /// # Errors
    ///
    /// Returns an error unless a round has been dealt and not yet settled.
    pub fn resolve(&mut self) -> Result<RoundResult, ResolveError> {
        if !matches!(self.state, TableState::Dealt | TableState::PlayerActing) {
            return Err(ResolveError::InvalidState);
        }

        let dealer_hand = self
            .dealer
            .hand_mut(0)
            .ok_or(ResolveError::InvalidState)?;
        while dealer_hand.value() < DEALER_STANDS_ON {
            dealer_hand.add_card(self.shoe.draw());
        }
        let dealer_hand: &Hand = dealer_hand;

        let players: Vec<PlayerResult> = self
            .players
            .iter_mut()
            .enumerate()
            .map(|(seat, player)| PlayerResult {
                seat,
                hands: player.resolve(dealer_hand),
                money: player.money(),
            })
            .collect();

        self.state = TableState::Settled;
        debug!(
            dealer_value = dealer_hand.value(),
            dealer_bust = dealer_hand.is_bust(),
            "round resolved"
        );

        Ok(RoundResult {
            players,
            dealer_value: dealer_hand.value(),
            dealer_bust: dealer_hand.is_bust(),
        })
    }
}
