//! Seated players and the dealer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::mem;

use crate::card::{Card, Rank};
use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::HandResult;

/// Maximum number of hands a player can hold through splitting.
pub const MAX_HANDS: usize = 4;

/// A decision for one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerChoice {
    /// Take another card.
    Hit,
    /// Split a pair into two hands.
    Split,
    /// Keep the hand as it is.
    Stand,
    /// Give up the hand for half the bet.
    Surrender,
    /// Double the bet and take exactly one more card.
    DoubleDown,
}

impl fmt::Display for PlayerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "Hit",
            Self::Split => "Split",
            Self::Stand => "Stand",
            Self::Surrender => "Surrender",
            Self::DoubleDown => "Double Down",
        })
    }
}

/// A participant at the table holding one or more hands.
///
/// Seated players and the dealer share this type; only seated players
/// split or bet.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hands: Vec<Hand>,
    money: i64,
    /// Hand whose first card is the dealt second card, once split.
    split_origin: Option<usize>,
}

impl Player {
    /// Creates a player without hands.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hands: Vec::new(),
            money: 0,
            split_origin: None,
        }
    }

    /// Gives the player a single hand, discarding any others.
    pub fn set_hand(&mut self, hand: Hand) {
        self.hands.clear();
        self.hands.push(hand);
        self.split_origin = None;
    }

    /// Returns the hand at `index`.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    /// Returns the hand at `index` mutably.
    pub fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    /// Returns every hand.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the number of hands.
    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    /// Returns the number of cards across every hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Hand::len).sum()
    }

    /// Turns every card face up.
    pub fn show_hands(&mut self) {
        self.hands.iter_mut().for_each(Hand::show);
    }

    /// Turns every card face down.
    pub fn hide_hands(&mut self) {
        self.hands.iter_mut().for_each(Hand::hide);
    }

    /// Returns the player's money.
    #[must_use]
    pub const fn money(&self) -> i64 {
        self.money
    }

    /// Credits (positive) or debits (negative) the player.
    pub const fn adjust_money(&mut self, amount: i64) {
        self.money = self.money.saturating_add(amount);
    }

    /// Returns whether the player may hold another hand.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.hands.len() < MAX_HANDS
    }

    /// Splits the pair at `index` into hands at `index` and `index + 1`.
    ///
    /// The new hand carries the same bet, which is debited from the player.
    /// Both hands hold a single card until they are dealt another.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand does not exist, is not a pair, or the
    /// player already holds [`MAX_HANDS`] hands.
    pub fn split_hand(&mut self, index: usize) -> Result<(), ActionError> {
        let hand = self.hands.get(index).ok_or(ActionError::HandNotFound)?;
        if !hand.can_split() {
            return Err(ActionError::CannotSplit);
        }
        if !self.can_split() {
            return Err(ActionError::MaxHandsReached);
        }

        let (left, right) = self
            .hands
            .remove(index)
            .split()
            .map_err(|_| ActionError::CannotSplit)?;
        let stake = right.bet();
        self.hands.insert(index, left);
        self.hands.insert(index + 1, right);
        self.adjust_money(-i64::from(stake));

        self.split_origin = match self.split_origin {
            None => Some(index + 1),
            Some(origin) if index < origin => Some(origin + 1),
            unchanged => unchanged,
        };

        Ok(())
    }

    /// Picks a decision for the hand at `index` from the dealer's up-card.
    ///
    /// Stands on 21. Splits Aces and Eights, Sixes against a poor up-card,
    /// and Twos, Threes or Sevens against anything but a good up-card.
    /// Hits a soft 17, anything under 17 against a good up-card, under 13
    /// against a fair one and under 12 against a poor one.
    #[must_use]
    pub fn choose(&self, index: usize, dealer_up_card: &Card) -> PlayerChoice {
        let Some(hand) = self.hand(index) else {
            return PlayerChoice::Stand;
        };
        let value = hand.value();

        if value == 21 {
            return PlayerChoice::Stand;
        }

        if self.can_split() && hand.can_split() {
            let split = match hand.card(0).map(Card::rank) {
                Some(Rank::Ace | Rank::Eight) => true,
                Some(Rank::Six) => dealer_up_card.is_poor(),
                Some(Rank::Two | Rank::Three | Rank::Seven) => !dealer_up_card.is_good(),
                _ => false,
            };
            if split {
                return PlayerChoice::Split;
            }
        }

        if hand.is_soft_seventeen()
            || value < 17 && dealer_up_card.is_good()
            || value < 13 && dealer_up_card.is_fair()
            || value < 12 && dealer_up_card.is_poor()
        {
            return PlayerChoice::Hit;
        }

        PlayerChoice::Stand
    }

    /// Settles every hand against the dealer's hand.
    pub fn resolve(&mut self, dealer: &Hand) -> Vec<HandResult> {
        self.hands
            .iter_mut()
            .enumerate()
            .map(|(hand_index, hand)| HandResult {
                hand_index,
                outcome: hand.settle(dealer),
                bet: hand.bet(),
                player_value: hand.value(),
                dealer_value: dealer.value(),
            })
            .collect()
    }

    /// Puts the dealt two-card hand back together, undoing any splits.
    ///
    /// Every other card is dropped. Returns how many cards were dropped,
    /// which is how many were drawn since the deal.
    pub fn reset_hands(&mut self, bet: u32) -> usize {
        if self.hands.is_empty() {
            return 0;
        }

        let total = self.card_count();
        let mut hands = mem::take(&mut self.hands);
        let second = match self.split_origin.take() {
            Some(origin) => hands.get_mut(origin).and_then(|hand| hand.remove_card(0)),
            None => hands.get_mut(0).and_then(|hand| hand.remove_card(1)),
        };
        let first = hands.get_mut(0).and_then(|hand| hand.remove_card(0));

        let mut dealt = Hand::with_bet(bet);
        dealt.extend(first.into_iter().chain(second));
        let kept = dealt.len();
        self.hands.push(dealt);

        total - kept
    }

    /// Renders every hand, showing face-down cards as `x` unless `reveal`.
    #[must_use]
    pub fn render(&self, reveal: bool) -> String {
        let mut out = String::new();
        for hand in &self.hands {
            out.push_str(&hand.render(reveal));
            out.push(' ');
        }
        out
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
