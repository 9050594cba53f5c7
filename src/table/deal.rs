use rand::Rng;
use tracing::{debug, trace};

use crate::hand::Hand;
use crate::options::GameMode;

use super::{Table, TableState};

impl<R: Rng> Table<R> {
    /// Deals a new round.
    ///
    /// One card is burned, then every player and the dealer receive a card
    /// in turn, twice. Player cards are face up only in
    /// [`GameMode::AllVisible`]; the dealer's first card is face down and
    /// the second (the up-card) face up. Any previous hands are discarded.
    pub fn setup(&mut self) {
        let visible = self.options.game_mode == GameMode::AllVisible;

        let burned = self.shoe.draw_with_visibility(false);
        trace!(rank = %burned.rank(), suit = %burned.suit(), "burned card");

        for player in &mut self.players {
            let mut hand = Hand::with_bet(self.options.min_bet);
            hand.add_card(self.shoe.draw_with_visibility(visible));
            player.set_hand(hand);
        }
        let mut dealer_hand = Hand::new();
        dealer_hand.add_card(self.shoe.draw_with_visibility(false));
        self.dealer.set_hand(dealer_hand);

        for player in &mut self.players {
            let card = self.shoe.draw_with_visibility(visible);
            if let Some(hand) = player.hand_mut(0) {
                hand.add_card(card);
            }
        }
        let up_card = self.shoe.draw_with_visibility(true);
        if let Some(hand) = self.dealer.hand_mut(0) {
            hand.add_card(up_card);
        }

        self.state = TableState::Dealt;
        debug!(
            players = self.players.len(),
            remaining = self.shoe.len(),
            "dealt new round"
        );
    }

    /// Takes the round back to its opening hands.
    ///
    /// Every card drawn since [`Table::setup`] is returned to the shoe in
    /// reverse draw order, split hands are joined back into the dealt pair
    /// and every hand's bet and result are cleared. Money is not refunded.
    /// Must be called at most once per round, before any other draw.
    pub fn reset(&mut self) {
        if self.state == TableState::Uninitialized {
            return;
        }

        let bet = self.options.min_bet;
        let mut returned: usize = self
            .players
            .iter_mut()
            .map(|player| player.reset_hands(bet))
            .sum();
        returned += self.dealer.reset_hands(0);

        for _ in 0..returned {
            self.shoe.undo_draw();
        }

        self.state = TableState::Dealt;
        debug!(returned, remaining = self.shoe.len(), "table reset");
    }
}
