//! The multi-deck shoe.
//!
//! A [`Shoe`] keeps every undrawn card in one list made of sorted runs,
//! one per physical deck. Drawing removes a random card from the list;
//! returning a card puts it back at its sorted position inside the first
//! run that is missing it. Because every run stays sorted by
//! [`Card::ordinal`], a card can be located with a binary search over
//! each run instead of a scan over the whole shoe.
//!
//! Every draw is recorded so that [`Shoe::undo_draw`] can take draws back
//! one at a time, including the draw that forced a reshuffle.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::{Card, DECK_SIZE, RANK_COUNT, Rank, Suit};
use crate::error::ShoeError;
use crate::options::DeckType;

/// Smallest number of decks in a shoe.
pub const MIN_DECKS: u8 = 1;

/// Largest number of decks in a shoe.
pub const MAX_DECKS: u8 = 8;

/// Shoe counters captured when the shoe is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reshuffle {
    /// Insert position in effect when the rebuild happened.
    insert_position: usize,
    /// Cards drawn from the shoe at that moment.
    drawn_count: usize,
    /// Draws served by the shoe since its own build.
    draws: usize,
}

/// A shoe of one to eight concatenated decks.
#[derive(Debug, Clone)]
pub struct Shoe<R = ChaCha8Rng> {
    deck_type: DeckType,
    deck_count: usize,
    has_insert_card: bool,
    /// Undrawn cards, as runs sorted by ordinal.
    cards: Vec<Card>,
    drawn_count: usize,
    insert_position: usize,
    /// Draws since the last rebuild.
    generation_draws: usize,
    drawn_history: Vec<Card>,
    insert_history: Vec<Reshuffle>,
    /// Starting composition of a shoe built from explicit cards.
    origin: Option<Vec<Card>>,
    rng: R,
}

impl Shoe {
    /// Creates a shoe with a ChaCha8 generator seeded from `seed`.
    ///
    /// `decks` is clamped to `1..=8`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{DeckType, Shoe};
    ///
    /// let shoe = Shoe::new(DeckType::Segmented, 2, false, 42);
    /// assert_eq!(shoe.len(), 104);
    /// ```
    #[must_use]
    pub fn new(deck_type: DeckType, decks: u8, insert_card: bool, seed: u64) -> Self {
        Self::with_rng(
            deck_type,
            decks,
            insert_card,
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    /// Creates a shoe holding exactly `cards`, with a seeded generator.
    ///
    /// See [`Shoe::from_cards_with_rng`].
    #[must_use]
    pub fn from_cards(deck_type: DeckType, cards: Vec<Card>, seed: u64) -> Self {
        Self::from_cards_with_rng(deck_type, cards, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shoe<R> {
    /// Creates a shoe drawing its randomness from `rng`.
    #[must_use]
    pub fn with_rng(deck_type: DeckType, decks: u8, insert_card: bool, rng: R) -> Self {
        let deck_count = usize::from(decks.clamp(MIN_DECKS, MAX_DECKS));
        let mut shoe = Self {
            deck_type,
            deck_count,
            has_insert_card: insert_card,
            cards: build_cards(deck_count),
            drawn_count: 0,
            insert_position: 0,
            generation_draws: 0,
            drawn_history: Vec::new(),
            insert_history: Vec::new(),
            origin: None,
            rng,
        };
        shoe.insert_position = shoe.pick_insert_position();
        shoe
    }

    /// Creates a shoe holding exactly `cards`, in the given order.
    ///
    /// The deck count is the number of decks needed to hold the cards and
    /// the missing cards count as already drawn. There is no insert card:
    /// the shoe is rebuilt with full decks once it runs out.
    #[must_use]
    pub fn from_cards_with_rng(deck_type: DeckType, cards: Vec<Card>, rng: R) -> Self {
        let deck_count = cards
            .len()
            .div_ceil(DECK_SIZE)
            .clamp(usize::from(MIN_DECKS), usize::from(MAX_DECKS));
        let capacity = deck_count * DECK_SIZE;

        Self {
            deck_type,
            deck_count,
            has_insert_card: false,
            drawn_count: capacity.saturating_sub(cards.len()),
            insert_position: capacity,
            generation_draws: 0,
            drawn_history: Vec::new(),
            insert_history: Vec::new(),
            origin: Some(cards.clone()),
            cards,
            rng,
        }
    }

    fn pick_insert_position(&mut self) -> usize {
        let size = self.capacity();
        if self.has_insert_card {
            self.rng.random_range(size / 6..size * 5 / 6)
        } else {
            size
        }
    }

    fn rebuild(&mut self) {
        self.insert_history.push(Reshuffle {
            insert_position: self.insert_position,
            drawn_count: self.drawn_count,
            draws: self.generation_draws,
        });
        self.cards = build_cards(self.deck_count);
        self.drawn_count = 0;
        self.generation_draws = 0;
        self.insert_position = self.pick_insert_position();

        debug!(
            decks = self.deck_count,
            insert_position = self.insert_position,
            "shoe rebuilt"
        );
    }

    /// Draws a random card and turns it face up.
    ///
    /// The shoe is rebuilt first when it is empty or the insert card has
    /// been reached, so a draw always yields a card.
    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() || self.drawn_count >= self.insert_position {
            self.rebuild();
        }

        let bound = match self.deck_type {
            DeckType::FullyRandom => self.cards.len(),
            DeckType::Segmented => DECK_SIZE - self.drawn_count % DECK_SIZE,
        }
        .min(self.cards.len());

        let index = self.rng.random_range(0..bound);
        let mut card = self.cards.remove(index);
        card.set_visible(true);

        self.drawn_history.push(card.clone());
        self.drawn_count += 1;
        self.generation_draws += 1;
        card
    }

    /// Draws a card and sets its visibility.
    pub fn draw_with_visibility(&mut self, visible: bool) -> Card {
        let mut card = self.draw();
        card.set_visible(visible);
        card
    }

    /// Returns the exclusive end of the run starting at `start`.
    ///
    /// A run ends before the first card whose ordinal does not increase,
    /// which is where the next deck starts or a card repeats.
    fn segment_end(&self, start: usize) -> usize {
        self.cards[start..]
            .windows(2)
            .position(|pair| pair[1].ordinal() <= pair[0].ordinal())
            .map_or(self.cards.len(), |offset| start + offset + 1)
    }

    /// Returns the index of the first copy of `card` in the shoe.
    #[must_use]
    pub fn find(&self, card: &Card) -> Option<usize> {
        let ordinal = card.ordinal();
        let mut start = 0;

        while start < self.cards.len() {
            let end = self.segment_end(start);
            if let Ok(offset) = self.cards[start..end].binary_search_by_key(&ordinal, Card::ordinal)
            {
                return Some(start + offset);
            }
            start = end;
        }

        None
    }

    /// Returns the first copy of `card` in the shoe.
    #[must_use]
    pub fn get(&self, card: &Card) -> Option<&Card> {
        self.find(card).map(|index| &self.cards[index])
    }

    /// Takes the first copy of `card` out of the shoe.
    pub fn remove(&mut self, card: &Card) -> Option<Card> {
        self.find(card).map(|index| self.cards.remove(index))
    }

    /// Returns a card to the shoe at its sorted position.
    ///
    /// The card joins the first run that does not hold it yet. When every
    /// run holds it but a deck has been emptied completely, the card
    /// starts a new run at the front of the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Full`] when the shoe holds all of its cards and
    /// [`ShoeError::IdentityExhausted`] when every deck already holds this
    /// card. The shoe is left untouched in both cases.
    pub fn add(&mut self, card: Card) -> Result<(), ShoeError> {
        if self.cards.len() >= self.capacity() {
            return Err(ShoeError::Full);
        }

        let ordinal = card.ordinal();
        let mut start = 0;

        while start < self.cards.len() {
            let end = self.segment_end(start);
            match self.cards[start..end].binary_search_by_key(&ordinal, Card::ordinal) {
                Ok(_) => start = end,
                Err(offset) => {
                    self.cards.insert(start + offset, card);
                    return Ok(());
                }
            }
        }

        let copies = self
            .cards
            .iter()
            .filter(|held| held.same_identity(&card))
            .count();
        if copies >= self.deck_count {
            return Err(ShoeError::IdentityExhausted);
        }

        self.cards.insert(0, card);
        Ok(())
    }

    /// Takes back the most recent draw.
    ///
    /// Undoing the first draw after a reshuffle restores the shoe as it
    /// was before that reshuffle. Does nothing when there is nothing left
    /// to undo.
    pub fn undo_draw(&mut self) {
        let Some(card) = self.drawn_history.pop() else {
            return;
        };

        if self.generation_draws == 1 {
            if let Some(reshuffle) = self.insert_history.pop() {
                self.restore(reshuffle);
                return;
            }
        }

        self.generation_draws = self.generation_draws.saturating_sub(1);
        self.drawn_count = self.drawn_count.saturating_sub(1);
        if let Err(err) = self.add(card) {
            warn!(%err, "undone card could not be returned to the shoe");
        }
    }

    /// Rebuilds the shoe as it stood when `reshuffle` was recorded.
    fn restore(&mut self, reshuffle: Reshuffle) {
        self.cards = match &self.origin {
            Some(origin) if self.insert_history.is_empty() => origin.clone(),
            _ => build_cards(self.deck_count),
        };
        self.insert_position = reshuffle.insert_position;
        self.drawn_count = reshuffle.drawn_count;
        self.generation_draws = reshuffle.draws;

        let replay = self.drawn_history.len().saturating_sub(reshuffle.draws);
        for index in replay..self.drawn_history.len() {
            if let Some(position) = self.find(&self.drawn_history[index]) {
                self.cards.remove(position);
            }
        }

        debug!(
            drawn_count = self.drawn_count,
            remaining = self.cards.len(),
            "shoe restored from before reshuffle"
        );
    }
}

impl<R> Shoe<R> {
    /// Counts the undrawn cards of each rank, indexed by [`Rank::index`].
    #[must_use]
    pub fn count(&self) -> [usize; RANK_COUNT] {
        let mut tally = [0; RANK_COUNT];
        for card in &self.cards {
            tally[usize::from(card.rank().index())] += 1;
        }
        tally
    }

    /// Returns the undrawn cards in shoe order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.deck_count * DECK_SIZE
    }

    /// Returns the number of decks.
    #[must_use]
    pub const fn deck_count(&self) -> usize {
        self.deck_count
    }

    /// Returns the draw order.
    #[must_use]
    pub const fn deck_type(&self) -> DeckType {
        self.deck_type
    }

    /// Returns whether the shoe uses an insert card.
    #[must_use]
    pub const fn has_insert_card(&self) -> bool {
        self.has_insert_card
    }

    /// Returns how many draws the shoe serves before reshuffling.
    #[must_use]
    pub const fn insert_position(&self) -> usize {
        self.insert_position
    }

    /// Returns the number of cards drawn since the last reshuffle.
    #[must_use]
    pub const fn drawn_count(&self) -> usize {
        self.drawn_count
    }

    /// Returns every draw that can still be undone, oldest first.
    #[must_use]
    pub fn drawn_history(&self) -> &[Card] {
        &self.drawn_history
    }

    /// Returns the number of reshuffles that can still be undone.
    #[must_use]
    pub fn reshuffle_count(&self) -> usize {
        self.insert_history.len()
    }
}

/// Builds `deck_count` sorted decks of face-down cards.
fn build_cards(deck_count: usize) -> Vec<Card> {
    let mut cards = Vec::with_capacity(deck_count * DECK_SIZE);

    for _ in 0..deck_count {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::with_visibility(rank, suit, false));
            }
        }
    }

    cards
}
