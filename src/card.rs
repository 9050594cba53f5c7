//! Card types and deck constants.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::error::ParseCardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of distinct ranks in a deck.
pub const RANK_COUNT: usize = 13;

/// Card suit.
///
/// Suits carry no weight in Blackjack; they only make each card of a deck
/// a distinct identity and fix its position in a sorted deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// Every suit in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Position of the suit in deck order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Single-letter symbol (`s`, `h`, `d`, `c`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => 's',
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
        }
    }

    /// Looks up a suit by its symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            's' => Some(Self::Spades),
            'h' => Some(Self::Hearts),
            'd' => Some(Self::Diamonds),
            'c' => Some(Self::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(ParseCardError::Empty),
            (Some(symbol), None) => Self::from_symbol(symbol).ok_or(ParseCardError::InvalidSuit),
            _ => Err(ParseCardError::InvalidSuit),
        }
    }
}

/// Card rank, from Ace to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace (1 or 11).
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// Every rank in deck order.
    pub const ALL: [Self; RANK_COUNT] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Position of the rank in deck order (Ace = 0, King = 12).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Blackjack value of the rank. Aces count 1 here; hand evaluation
    /// decides when one of them counts 11.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Jack | Self::Queen | Self::King => 10,
            other => other.index() + 1,
        }
    }

    /// Display symbol (`A`, `2` .. `10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol() == s)
            .ok_or(ParseCardError::InvalidRank)
    }
}

/// A playing card.
///
/// Equality, ordering and hashing only consider the card's identity
/// (rank and suit); the visibility flag is presentation state.
#[derive(Debug, Clone)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    visible: bool,
}

impl Card {
    /// Creates a new face-up card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            visible: true,
        }
    }

    /// Creates a card with the given visibility.
    #[must_use]
    pub const fn with_visibility(rank: Rank, suit: Suit, visible: bool) -> Self {
        Self {
            rank,
            suit,
            visible,
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the Blackjack value of the card (Ace = 1).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Position of this identity in a sorted deck: `13 * suit + rank`.
    #[must_use]
    pub const fn ordinal(&self) -> u8 {
        13 * self.suit.index() + self.rank.index()
    }

    /// Returns whether every player can see the card.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the card.
    pub const fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Returns whether both cards have the same rank and suit.
    #[must_use]
    pub const fn same_identity(&self, other: &Self) -> bool {
        self.ordinal() == other.ordinal()
    }

    /// A low card likely to make the dealer bust (Four, Five, Six).
    #[must_use]
    pub const fn is_poor(&self) -> bool {
        matches!(self.rank, Rank::Four | Rank::Five | Rank::Six)
    }

    /// A card that still needs help but rarely busts (Two, Three).
    #[must_use]
    pub const fn is_fair(&self) -> bool {
        matches!(self.rank, Rank::Two | Rank::Three)
    }

    /// A card likely to finish on a standing total (Ace, Seven through King).
    #[must_use]
    pub const fn is_good(&self) -> bool {
        !self.is_poor() && !self.is_fair()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordinal().hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

/// Renders the rank; the alternate form (`{:#}`) appends the suit.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}{}", self.rank, self.suit)
        } else {
            write!(f, "{}", self.rank)
        }
    }
}

/// Parses `"A"`, `"10"`, `"Kd"` or `"10h"`. The suit defaults to spades.
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((split, last)) = s.char_indices().last() else {
            return Err(ParseCardError::Empty);
        };

        if split > 0 && last.is_ascii_lowercase() {
            let suit = Suit::from_symbol(last).ok_or(ParseCardError::InvalidSuit)?;
            let rank = s[..split].parse()?;
            return Ok(Self::new(rank, suit));
        }

        Ok(Self::new(s.parse()?, Suit::Spades))
    }
}
