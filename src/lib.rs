//! A multi-deck blackjack shoe and table engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Shoe`] of one to eight decks that can take back
//! any number of draws exactly, including across reshuffles, and a
//! [`Table`] that deals rounds from it, plays player decisions, resolves
//! the dealer and can reset a round to replay it from the same opening
//! hands.
//!
//! # Example
//!
//! ```
//! use bjtable::{PlayerChoice, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default().with_players(2), 7);
//! table.setup();
//! while table.play(0, 0, PlayerChoice::Hit) {}
//! table.autoplay(1, 0);
//! let result = table.resolve().unwrap();
//! assert_eq!(result.players.len(), 2);
//!
//! let before = table.shoe().len();
//! table.reset();
//! assert!(table.shoe().len() >= before);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANK_COUNT, Rank, Suit};
pub use error::{ActionError, ParseCardError, ResolveError, ShoeError};
pub use hand::Hand;
pub use options::{DeckType, GameMode, TableOptions};
pub use player::{MAX_HANDS, Player, PlayerChoice};
pub use result::{HandOutcome, HandResult, PlayerResult, RoundResult};
pub use shoe::{MAX_DECKS, MIN_DECKS, Shoe};
pub use table::{Table, TableState};
