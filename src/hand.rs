//! Hand representation and valuation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::card::{Card, Rank};
use crate::result::HandOutcome;

/// Best total of `cards`: every Ace counts 1, except that one Ace counts
/// 11 when that does not bust the hand. Two Aces at 11 always bust, so at
/// most one can ever count high.
fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank() == Rank::Ace {
            aces += 1;
        } else {
            total = total.saturating_add(card.value());
        }
    }

    if aces > 0 {
        total = total.saturating_add(aces - 1);
        total = if total <= 10 { total + 11 } else { total.saturating_add(1) };
    }

    total
}

/// A hand of cards held by a player or the dealer.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    /// Best value of `cards`, refreshed after every change.
    value: u8,
    bet: u32,
    result: Option<HandOutcome>,
}

impl Hand {
    /// Creates an empty hand with no bet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            value: 0,
            bet: 0,
            result: None,
        }
    }

    /// Creates an empty hand with the given bet.
    #[must_use]
    pub const fn with_bet(bet: u32) -> Self {
        Self {
            cards: Vec::new(),
            value: 0,
            bet,
            result: None,
        }
    }

    /// Creates a hand holding `cards`, with no bet.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let value = evaluate_cards(&cards);
        Self {
            cards,
            value,
            bet: 0,
            result: None,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.value = evaluate_cards(&self.cards);
    }

    /// Removes and returns the card at `index`.
    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        if index >= self.cards.len() {
            return None;
        }
        let card = self.cards.remove(index);
        self.value = evaluate_cards(&self.cards);
        Some(card)
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Turns every card face up.
    pub fn show(&mut self) {
        for card in &mut self.cards {
            card.set_visible(true);
        }
    }

    /// Turns every card face down.
    pub fn hide(&mut self) {
        for card in &mut self.cards {
            card.set_visible(false);
        }
    }

    /// Returns the best value of the hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Replaces the bet amount.
    pub const fn set_bet(&mut self, bet: u32) {
        self.bet = bet;
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.value > 21
    }

    /// Returns whether this hand beats the dealer's hand.
    #[must_use]
    pub const fn is_win(&self, dealer: &Self) -> bool {
        !self.is_bust() && (dealer.is_bust() || self.value > dealer.value)
    }

    /// Returns whether the hand is an opening soft 17 (an Ace and a Six).
    #[must_use]
    pub fn is_soft_seventeen(&self) -> bool {
        self.cards.len() == 2
            && self.value == 17
            && self.cards.iter().any(|card| card.rank() == Rank::Ace)
    }

    /// Returns whether the hand is a pair that can be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank() == self.cards[1].rank()
    }

    /// Splits a pair into two single-card hands carrying the same bet.
    ///
    /// # Errors
    ///
    /// Returns the hand unchanged when it is not a pair.
    pub fn split(mut self) -> Result<(Self, Self), Self> {
        if !self.can_split() {
            return Err(self);
        }

        let Some(second) = self.cards.pop() else {
            return Err(self);
        };
        let Some(first) = self.cards.pop() else {
            return Err(self);
        };

        let mut left = Self::with_bet(self.bet);
        left.add_card(first);
        let mut right = Self::with_bet(self.bet);
        right.add_card(second);
        Ok((left, right))
    }

    /// Settles the hand against the dealer's hand and records the outcome.
    ///
    /// The outcome is kept until the next settlement; later changes to the
    /// hand do not update it.
    pub fn settle(&mut self, dealer: &Self) -> HandOutcome {
        let outcome = if !self.is_bust() && self.value == dealer.value {
            HandOutcome::Draw
        } else if self.is_win(dealer) {
            HandOutcome::Win
        } else {
            HandOutcome::Loss
        };
        self.result = Some(outcome);
        outcome
    }

    /// Returns the outcome recorded by the last settlement.
    #[must_use]
    pub const fn result(&self) -> Option<HandOutcome> {
        self.result
    }

    /// Renders the hand, showing face-down cards as `x` unless `reveal`.
    #[must_use]
    pub fn render(&self, reveal: bool) -> String {
        let mut out = String::new();
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            if reveal || card.is_visible() {
                let _ = write!(out, "{card}");
            } else {
                out.push('x');
            }
        }
        if let Some(result) = self.result {
            let _ = write!(out, "({result})");
        }
        out
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
        self.value = evaluate_cards(&self.cards);
    }
}
