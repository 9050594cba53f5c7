//! Table configuration options.

use core::fmt;

/// Whether seated players' cards are dealt face up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// All player hands are visible.
    #[default]
    AllVisible,
    /// No player hands are visible.
    NoneVisible,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AllVisible => "All player hands are visible",
            Self::NoneVisible => "No player hands are visible",
        })
    }
}

/// How the shoe picks the next card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeckType {
    /// Cards are drawn at random from the deck currently being depleted,
    /// so each physical deck runs out before the next one is touched.
    #[default]
    Segmented,
    /// Cards are drawn at random from every deck in the shoe.
    FullyRandom,
}

impl fmt::Display for DeckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Segmented => "Deck has all cards randomized within each deck segment",
            Self::FullyRandom => "Deck has all cards randomized together",
        })
    }
}

/// Configuration options for a blackjack table.
///
/// Options are read once when the table is built. Use the builder pattern
/// to customize them:
///
/// ```
/// use bjtable::{DeckType, TableOptions};
///
/// let options = TableOptions::default()
///     .with_players(3)
///     .with_decks(6)
///     .with_deck_type(DeckType::FullyRandom)
///     .with_insert_card(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of seated players (the dealer is not counted).
    pub players: u8,
    /// Number of decks in the shoe, clamped to 1..=8 by the shoe.
    pub decks: u8,
    /// Card visibility for seated players.
    pub game_mode: GameMode,
    /// Draw order of the shoe.
    pub deck_type: DeckType,
    /// Whether a randomly placed insert card triggers early reshuffles.
    pub insert_card: bool,
    /// Bet placed on every dealt hand.
    pub min_bet: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            players: 1,
            decks: 1,
            game_mode: GameMode::AllVisible,
            deck_type: DeckType::Segmented,
            insert_card: false,
            min_bet: 10,
        }
    }
}

impl TableOptions {
    /// Sets the number of seated players.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the player card visibility.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_game_mode(GameMode::NoneVisible);
    /// assert_eq!(options.game_mode, GameMode::NoneVisible);
    /// ```
    #[must_use]
    pub const fn with_game_mode(mut self, game_mode: GameMode) -> Self {
        self.game_mode = game_mode;
        self
    }

    /// Sets the draw order of the shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{DeckType, TableOptions};
    ///
    /// let options = TableOptions::default().with_deck_type(DeckType::FullyRandom);
    /// assert_eq!(options.deck_type, DeckType::FullyRandom);
    /// ```
    #[must_use]
    pub const fn with_deck_type(mut self, deck_type: DeckType) -> Self {
        self.deck_type = deck_type;
        self
    }

    /// Sets whether the shoe uses an insert card.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_insert_card(true);
    /// assert!(options.insert_card);
    /// ```
    #[must_use]
    pub const fn with_insert_card(mut self, insert_card: bool) -> Self {
        self.insert_card = insert_card;
        self
    }

    /// Sets the bet placed on every dealt hand.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(25);
    /// assert_eq!(options.min_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: u32) -> Self {
        self.min_bet = min_bet;
        self
    }
}
