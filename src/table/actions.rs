use rand::Rng;
use tracing::trace;

use crate::error::ActionError;
use crate::player::PlayerChoice;

use super::{Table, TableState};

impl<R: Rng> Table<R> {
    /// Plays `choice` on a hand and returns whether the hand can keep
    /// playing.
    ///
    /// Anything [`Table::try_play`] rejects is a no-op returning `false`.
    pub fn play(&mut self, seat: usize, hand_index: usize, choice: PlayerChoice) -> bool {
        self.try_play(seat, hand_index, choice).unwrap_or(false)
    }

    /// Plays `choice` on a hand.
    ///
    /// - Hit draws a card; the hand can continue unless it busts.
    /// - Split turns the pair into two hands and deals each one card; both
    ///   can continue.
    /// - Surrender halves the bet and returns that half to the player.
    /// - Double down doubles the bet, debits the original stake and draws
    ///   exactly one card.
    /// - Stand ends the hand.
    ///
    /// Returns `Ok(true)` while the hand can take another action.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in play, the seat or hand does not
    /// exist, or a split is asked for a hand that cannot be split.
    pub fn try_play(
        &mut self,
        seat: usize,
        hand_index: usize,
        choice: PlayerChoice,
    ) -> Result<bool, ActionError> {
        if !matches!(self.state, TableState::Dealt | TableState::PlayerActing) {
            return Err(ActionError::InvalidState);
        }

        let player = self
            .players
            .get_mut(seat)
            .ok_or(ActionError::SeatNotFound)?;
        let hand = player
            .hand_mut(hand_index)
            .ok_or(ActionError::HandNotFound)?;
        let bet = hand.bet();

        trace!(seat, hand_index, %choice, "playing hand");

        let can_continue = match choice {
            PlayerChoice::Hit => {
                hand.add_card(self.shoe.draw());
                !hand.is_bust()
            }
            PlayerChoice::Split => {
                player.split_hand(hand_index)?;
                for index in [hand_index, hand_index + 1] {
                    let card = self.shoe.draw();
                    if let Some(hand) = player.hand_mut(index) {
                        hand.add_card(card);
                    }
                }
                true
            }
            PlayerChoice::Surrender => {
                hand.set_bet(bet / 2);
                player.adjust_money(i64::from(bet / 2));
                false
            }
            PlayerChoice::DoubleDown => {
                hand.set_bet(bet.saturating_mul(2));
                hand.add_card(self.shoe.draw());
                player.adjust_money(-i64::from(bet));
                false
            }
            PlayerChoice::Stand => false,
        };

        self.state = TableState::PlayerActing;
        Ok(can_continue)
    }

    /// Plays the hand at `hand_index` with [`Player::choose`] until it is
    /// finished, including every hand split off from it.
    ///
    /// [`Player::choose`]: crate::Player::choose
    pub fn autoplay(&mut self, seat: usize, hand_index: usize) {
        let Some(up_card) = self.dealer_up_card().cloned() else {
            return;
        };

        let mut index = hand_index;
        let mut pending = 1;
        while pending > 0 {
            let Some(player) = self.players.get(seat) else {
                return;
            };
            let choice = player.choose(index, &up_card);

            match self.try_play(seat, index, choice) {
                Ok(true) if choice == PlayerChoice::Split => pending += 1,
                Ok(true) => {}
                Ok(false) | Err(_) => {
                    index += 1;
                    pending -= 1;
                }
            }
        }
    }

    /// Autoplays the dealt hand of every seat in order.
    pub fn autoplay_all(&mut self) {
        for seat in 0..self.players.len() {
            self.autoplay(seat, 0);
        }
    }
}
