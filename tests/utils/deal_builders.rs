//! Deal construction helpers shared by the integration tests
#![allow(dead_code)] // Test utilities may not all be used in every test

use pokerhands::{Card, Deal, Hand, HandError, Rank, Suit};

/// The canonical five round batch; player one takes rounds 2 and 3.
pub const REFERENCE_BATCH: [&str; 5] = [
    "8C TS KC 9H 4S 7D 2S 5D 3S AC",
    "5C AD 5D AC 9C 7C 5H 8D TD KS",
    "3H 7H 6S KC JS QH TD JC 2D 8S",
    "TH 8H 5C QS TC 9H 4D JC KS JS",
    "7C 5H KC QH JD AS KH 4C AD 4S",
];

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(pokerhands::Card::new(pokerhands::Rank::$rank, pokerhands::Suit::$suit)),*]
    };
}

// ============================================================================
// Deal Setup Utilities
// ============================================================================

pub struct DealBuilder {
    player_one: Vec<Card>,
    player_two: Vec<Card>,
}

impl DealBuilder {
    pub fn new() -> Self {
        Self {
            player_one: vec![],
            player_two: vec![],
        }
    }

    pub fn player_one(mut self, cards: Vec<Card>) -> Self {
        self.player_one = cards;
        self
    }

    pub fn player_two(mut self, cards: Vec<Card>) -> Self {
        self.player_two = cards;
        self
    }

    /// Player one holds four of `rank`, player two aces full of kings, or of
    /// queens when player one already holds every king
    pub fn quads_against_full_house(self, rank: Rank, kicker: Rank) -> Self {
        let quads = vec![
            Card::new(rank, Suit::Clubs),
            Card::new(rank, Suit::Diamonds),
            Card::new(rank, Suit::Hearts),
            Card::new(rank, Suit::Spades),
            Card::new(kicker, Suit::Clubs),
        ];
        let pair = if rank == Rank::King { Rank::Queen } else { Rank::King };
        let full_house = vec![
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(pair, Suit::Spades),
            Card::new(pair, Suit::Hearts),
        ];
        self.player_one(quads).player_two(full_house)
    }

    /// Both hands must be valid and share no card, as `Deal::parse` requires
    pub fn try_build(&self) -> Result<Deal, HandError> {
        Deal::new(
            Hand::from_cards(&self.player_one)?,
            Hand::from_cards(&self.player_two)?,
        )
    }

    pub fn build(self) -> Deal {
        self.try_build().expect("builder should describe a valid deal")
    }

    /// Render as an input line, player one's cards first
    pub fn line(&self) -> String {
        self.player_one
            .iter()
            .chain(&self.player_two)
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for DealBuilder {
    fn default() -> Self {
        Self::new()
    }
}
