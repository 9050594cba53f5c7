//! Helpers shared by the integration tests.

use bjtable::{Card, Rank, Suit};
use rand::RngCore;

pub const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Generator that always yields zero, so every draw takes the first
/// eligible card of the shoe.
#[derive(Debug, Clone)]
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}
