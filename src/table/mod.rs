//! Table engine and round management.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::options::TableOptions;
use crate::player::Player;
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::TableState;

/// A blackjack table that runs rounds between a dealer and seated players.
///
/// The table owns the shoe, the dealer and the players, and is the only
/// thing that draws from or returns cards to its shoe. A round is dealt
/// with [`Table::setup`], played with [`Table::play`] or
/// [`Table::autoplay`], settled with [`Table::resolve`] and may be
/// replayed from the same opening hands after [`Table::reset`].
///
/// # Example
///
/// ```
/// use bjtable::{Table, TableOptions};
///
/// let mut table = Table::new(TableOptions::default(), 42);
/// table.setup();
/// table.autoplay_all();
/// let result = table.resolve().unwrap();
/// assert_eq!(result.players.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Table<R = ChaCha8Rng> {
    options: TableOptions,
    shoe: Shoe<R>,
    dealer: Player,
    players: Vec<Player>,
    state: TableState,
}

impl Table {
    /// Creates a table whose shoe is seeded from `seed`.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Table<R> {
    /// Creates a table whose shoe draws its randomness from `rng`.
    #[must_use]
    pub fn with_rng(options: TableOptions, rng: R) -> Self {
        let shoe = Shoe::with_rng(options.deck_type, options.decks, options.insert_card, rng);
        Self::with_shoe(options, shoe)
    }
}

impl<R> Table<R> {
    /// Creates a table around a prepared shoe.
    ///
    /// The shoe settings in `options` are ignored in favour of the shoe's.
    #[must_use]
    pub fn with_shoe(options: TableOptions, shoe: Shoe<R>) -> Self {
        let players = (0..options.players).map(|_| Player::new()).collect();
        Self {
            options,
            shoe,
            dealer: Player::new(),
            players,
            state: TableState::Uninitialized,
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe<R> {
        &self.shoe
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the player at `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns every seated player.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the round state.
    #[must_use]
    pub const fn state(&self) -> TableState {
        self.state
    }

    /// Returns the dealer's face-up card, the second one dealt.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.hand(0).and_then(|hand| hand.card(1))
    }

    /// Renders the table one line per participant.
    ///
    /// The player at `seat` is marked and sees their own cards; `reveal`
    /// shows every card.
    #[must_use]
    pub fn render(&self, seat: Option<usize>, reveal: bool) -> String {
        let mut out = String::new();

        let dealer_bust = self.dealer.hand(0).is_some_and(|hand| hand.is_bust());
        let _ = writeln!(
            out,
            "Dealer: {}{}",
            self.dealer.render(reveal),
            if dealer_bust { " (BUST!)" } else { "" }
        );

        for (index, player) in self.players.iter().enumerate() {
            let own = seat == Some(index);
            let _ = writeln!(
                out,
                "Player {}{}: {}",
                index + 1,
                if own { " (You)" } else { "" },
                player.render(own || reveal)
            );
        }

        out
    }
}

impl<R> fmt::Display for Table<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None, true))
    }
}
