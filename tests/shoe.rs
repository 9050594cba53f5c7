//! Shoe integration tests.

mod common;

use bjtable::{Card, DECK_SIZE, DeckType, Rank, Shoe, ShoeError, Suit};
use common::{ZeroRng, card};

/// Counts the cards of each ordinal in `cards`.
fn ordinal_tally(cards: &[Card]) -> [usize; DECK_SIZE] {
    let mut tally = [0; DECK_SIZE];
    for card in cards {
        tally[usize::from(card.ordinal())] += 1;
    }
    tally
}

#[test]
fn fresh_shoe_holds_every_card_of_every_deck() {
    for decks in 1..=8u8 {
        let shoe = Shoe::new(DeckType::Segmented, decks, false, 1);
        let decks = usize::from(decks);

        assert_eq!(shoe.len(), DECK_SIZE * decks);
        assert_eq!(shoe.capacity(), DECK_SIZE * decks);
        assert_eq!(shoe.count(), [4 * decks; 13]);
        assert_eq!(shoe.drawn_count(), 0);
        assert_eq!(shoe.insert_position(), DECK_SIZE * decks);
        assert_eq!(shoe.reshuffle_count(), 0);
    }
}

#[test]
fn deck_count_is_clamped() {
    assert_eq!(Shoe::new(DeckType::Segmented, 0, false, 1).deck_count(), 1);
    assert_eq!(Shoe::new(DeckType::Segmented, 12, false, 1).deck_count(), 8);
}

#[test]
fn fresh_shoe_is_sorted_face_down_decks() {
    let shoe = Shoe::new(DeckType::Segmented, 3, false, 1);
    let expected: Vec<u8> = (0..52).collect();

    for deck in shoe.cards().chunks(DECK_SIZE) {
        let ordinals: Vec<u8> = deck.iter().map(Card::ordinal).collect();
        assert_eq!(ordinals, expected);
    }
    assert!(shoe.cards().iter().all(|card| !card.is_visible()));
}

#[test]
fn insert_card_lands_inside_penetration_window() {
    for seed in 0..50 {
        let shoe = Shoe::new(DeckType::FullyRandom, 2, true, seed);
        assert!(shoe.has_insert_card());
        assert!((17..86).contains(&shoe.insert_position()));
    }
}

#[test]
fn draw_turns_card_face_up_and_records_it() {
    let mut shoe = Shoe::new(DeckType::FullyRandom, 1, false, 3);
    let drawn = shoe.draw();

    assert!(drawn.is_visible());
    assert_eq!(shoe.len(), 51);
    assert_eq!(shoe.drawn_count(), 1);
    assert_eq!(shoe.drawn_history(), &[drawn.clone()]);
    assert_eq!(shoe.count()[usize::from(drawn.rank().index())], 3);

    let hidden = shoe.draw_with_visibility(false);
    assert!(!hidden.is_visible());
}

#[test]
fn undo_restores_exact_segmented_order() {
    let mut shoe = Shoe::new(DeckType::Segmented, 2, false, 9);
    for _ in 0..12 {
        shoe.draw();
    }
    let before = shoe.cards().to_vec();
    let drawn_count = shoe.drawn_count();

    shoe.draw();
    assert_eq!(shoe.len(), before.len() - 1);
    shoe.undo_draw();

    assert_eq!(shoe.cards(), before.as_slice());
    assert_eq!(shoe.drawn_count(), drawn_count);
}

#[test]
fn undo_restores_fully_random_composition() {
    let mut shoe = Shoe::new(DeckType::FullyRandom, 2, false, 9);
    let before = shoe.count();

    for _ in 0..40 {
        shoe.draw();
    }
    for _ in 0..40 {
        shoe.undo_draw();
    }

    assert_eq!(shoe.count(), before);
    assert_eq!(shoe.len(), 104);
    assert_eq!(shoe.drawn_count(), 0);
    assert!(shoe.drawn_history().is_empty());
}

#[test]
fn undo_on_untouched_shoe_does_nothing() {
    let mut shoe = Shoe::new(DeckType::Segmented, 1, false, 5);
    shoe.undo_draw();

    assert_eq!(shoe.len(), DECK_SIZE);
    assert_eq!(shoe.drawn_count(), 0);
}

#[test]
fn drawing_whole_shoe_yields_each_card_once_per_deck() {
    for decks in [1u8, 3] {
        for deck_type in [DeckType::Segmented, DeckType::FullyRandom] {
            let mut shoe = Shoe::new(deck_type, decks, false, 11);
            let drawn: Vec<Card> = (0..DECK_SIZE * usize::from(decks))
                .map(|_| shoe.draw())
                .collect();

            assert!(shoe.is_empty());
            assert_eq!(ordinal_tally(&drawn), [usize::from(decks); DECK_SIZE]);
        }
    }
}

#[test]
fn segmented_shoe_empties_one_deck_at_a_time() {
    let mut shoe = Shoe::new(DeckType::Segmented, 4, false, 21);
    let drawn: Vec<Card> = (0..DECK_SIZE).map(|_| shoe.draw()).collect();

    assert_eq!(ordinal_tally(&drawn), [1; DECK_SIZE]);
    assert_eq!(shoe.len(), 3 * DECK_SIZE);
}

#[test]
fn empty_shoe_is_rebuilt_on_draw() {
    let ace = card(Rank::Ace, Suit::Spades);
    let mut shoe = Shoe::from_cards(DeckType::Segmented, vec![ace.clone()], 2);
    assert_eq!(shoe.deck_count(), 1);
    assert_eq!(shoe.drawn_count(), 51);

    assert_eq!(shoe.draw(), ace);
    assert!(shoe.is_empty());

    shoe.draw();
    assert_eq!(shoe.len(), 51);
    assert_eq!(shoe.drawn_count(), 1);
    assert_eq!(shoe.reshuffle_count(), 1);
}

#[test]
fn find_remove_add_keep_runs_sorted() {
    let mut shoe = Shoe::new(DeckType::Segmented, 2, false, 3);
    let queen = card(Rank::Queen, Suit::Hearts);
    assert_eq!(queen.ordinal(), 24);

    assert_eq!(shoe.find(&queen), Some(24));
    assert_eq!(shoe.get(&queen), Some(&queen));

    let removed = shoe.remove(&queen).unwrap();
    assert_eq!(shoe.find(&queen), Some(DECK_SIZE - 1 + 24));

    shoe.add(removed).unwrap();
    assert_eq!(shoe.find(&queen), Some(24));
    assert_eq!(shoe.len(), 2 * DECK_SIZE);
}

#[test]
fn removing_every_copy_leaves_nothing_to_find() {
    let mut shoe = Shoe::new(DeckType::Segmented, 2, false, 3);
    let five = card(Rank::Five, Suit::Clubs);

    assert!(shoe.remove(&five).is_some());
    assert!(shoe.remove(&five).is_some());
    assert!(shoe.remove(&five).is_none());
    assert_eq!(shoe.find(&five), None);
    assert_eq!(shoe.get(&five), None);
}

#[test]
fn add_to_full_shoe_is_rejected() {
    let mut shoe = Shoe::new(DeckType::Segmented, 1, false, 3);

    assert_eq!(shoe.add(card(Rank::Two, Suit::Hearts)), Err(ShoeError::Full));
    assert_eq!(shoe.len(), DECK_SIZE);
}

#[test]
fn add_beyond_deck_count_is_rejected() {
    let mut shoe = Shoe::new(DeckType::Segmented, 2, false, 3);
    shoe.remove(&card(Rank::Two, Suit::Spades));
    shoe.remove(&card(Rank::Three, Suit::Spades));

    assert_eq!(
        shoe.add(card(Rank::Ace, Suit::Spades)),
        Err(ShoeError::IdentityExhausted)
    );
    assert_eq!(shoe.len(), 2 * DECK_SIZE - 2);
}

#[test]
fn undo_into_emptied_deck_opens_new_run() {
    let mut shoe = Shoe::with_rng(DeckType::Segmented, 2, false, ZeroRng);
    for _ in 0..DECK_SIZE {
        shoe.draw();
    }
    let last = card(Rank::King, Suit::Clubs);
    assert_eq!(shoe.drawn_history().last(), Some(&last));

    shoe.undo_draw();
    assert_eq!(shoe.cards()[0], last);
    assert_eq!(shoe.drawn_count(), DECK_SIZE - 1);

    assert_eq!(shoe.draw(), last);
}

#[test]
fn undo_across_insert_card_reshuffle() {
    let mut shoe = Shoe::new(DeckType::FullyRandom, 2, true, 4);
    let insert_position = shoe.insert_position();
    for _ in 0..insert_position {
        shoe.draw();
    }
    let count = shoe.count();
    assert_eq!(shoe.reshuffle_count(), 0);

    shoe.draw();
    assert_eq!(shoe.reshuffle_count(), 1);
    assert_eq!(shoe.drawn_count(), 1);
    assert_eq!(shoe.len(), 103);

    shoe.undo_draw();
    assert_eq!(shoe.reshuffle_count(), 0);
    assert_eq!(shoe.count(), count);
    assert_eq!(shoe.drawn_count(), insert_position);
    assert_eq!(shoe.insert_position(), insert_position);
    assert_eq!(shoe.len(), 104 - insert_position);
}

#[test]
fn undo_walks_back_through_several_reshuffles() {
    let mut shoe = Shoe::new(DeckType::FullyRandom, 1, false, 8);
    let mut snapshots = vec![(shoe.count(), shoe.len(), shoe.drawn_count())];

    for _ in 0..130 {
        shoe.draw();
        snapshots.push((shoe.count(), shoe.len(), shoe.drawn_count()));
    }
    assert_eq!(shoe.reshuffle_count(), 2);

    snapshots.pop();
    while let Some(expected) = snapshots.pop() {
        shoe.undo_draw();
        assert_eq!((shoe.count(), shoe.len(), shoe.drawn_count()), expected);
    }
    assert_eq!(shoe.reshuffle_count(), 0);
}

#[test]
fn segmented_undo_restores_order_across_insert_card() {
    let mut shoe = Shoe::new(DeckType::Segmented, 2, true, 5);
    let mut snapshots = vec![shoe.cards().to_vec()];

    for _ in 0..250 {
        shoe.draw();
        snapshots.push(shoe.cards().to_vec());
    }
    assert!(shoe.reshuffle_count() >= 2);

    snapshots.pop();
    while let Some(expected) = snapshots.pop() {
        shoe.undo_draw();
        assert_eq!(shoe.cards(), expected.as_slice());
    }
}

#[test]
fn from_cards_undo_returns_to_given_cards() {
    let cards = vec![
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Jack, Suit::Spades),
    ];
    let mut shoe = Shoe::from_cards_with_rng(DeckType::Segmented, cards.clone(), ZeroRng);
    assert_eq!(shoe.draw(), cards[0]);
    shoe.undo_draw();

    for _ in 0..5 {
        shoe.draw();
    }
    assert_eq!(shoe.reshuffle_count(), 1);
    for _ in 0..5 {
        shoe.undo_draw();
    }

    assert_eq!(ordinal_tally(shoe.cards()), ordinal_tally(&cards));
    assert_eq!(shoe.drawn_count(), DECK_SIZE - 3);
    assert!(shoe.drawn_history().is_empty());
}

#[test]
fn same_seed_draws_same_cards() {
    let mut first = Shoe::new(DeckType::FullyRandom, 6, true, 77);
    let mut second = Shoe::new(DeckType::FullyRandom, 6, true, 77);

    assert_eq!(first.insert_position(), second.insert_position());
    for _ in 0..20 {
        assert_eq!(first.draw().ordinal(), second.draw().ordinal());
    }
}
