use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::basic::Card;
use super::score::{Category, Score};

pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("Invalid hand size: expected 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Duplicate card: {0}")]
    DuplicateCard(Card),
    #[error("Invalid deal size: expected 10 cards, got {0}")]
    InvalidDealSize(usize),
}

/// Five distinct cards in the order they were dealt.
///
/// Serialized as a plain list of cards; deserializing goes through
/// [`Hand::from_cards`] so the same checks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Create a hand from exactly five distinct cards
    pub fn from_cards(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidHandSize(cards.len()))?;

        if let Some(card) = first_duplicate(&cards) {
            return Err(HandError::DuplicateCard(card));
        }

        Ok(Self { cards })
    }

    /// Parse five whitespace separated tokens, e.g. `"5C AD 5D AC 9C"`
    pub fn parse(s: &str) -> Result<Self, HandError> {
        let cards = s
            .split_whitespace()
            .map(Card::from_string)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(&cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn category(&self) -> Category {
        self.score().category
    }

    /// Classify the hand and build its comparable score.
    ///
    /// Ranks are grouped by count and read from the highest rank down, so
    /// every tiebreak slot is filled in descending significance without
    /// depending on the order the cards were dealt in.
    pub fn score(&self) -> Score {
        let mut rank_counts = [0u8; 15];
        let mut suit_counts = [0u8; 4];
        for card in &self.cards {
            rank_counts[card.rank.value() as usize] += 1;
            suit_counts[card.suit.index()] += 1;
        }

        // (rank, count), highest rank first
        let groups: Vec<(u8, u8)> = (2..=14u8)
            .rev()
            .filter_map(|rank| {
                let count = rank_counts[rank as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();
        let distinct_suits = suit_counts.iter().filter(|&&count| count > 0).count();

        let ranks_with = |count: u8| {
            groups
                .iter()
                .filter(move |(_, c)| *c == count)
                .map(|(rank, _)| *rank)
        };

        match groups.len() {
            5 => {
                let mut tiebreaks = [0u8; 5];
                for (slot, (rank, _)) in tiebreaks.iter_mut().zip(&groups) {
                    *slot = *rank;
                }

                let category = if tiebreaks[0] - tiebreaks[4] == 4 {
                    Category::Straight
                } else {
                    Category::HighCard
                };
                let category = if distinct_suits == 1 {
                    category.with_flush()
                } else {
                    category
                };

                Score::new(category, tiebreaks)
            }
            2 => {
                let (major, minor) = if groups[0].1 > groups[1].1 {
                    (groups[0], groups[1])
                } else {
                    (groups[1], groups[0])
                };
                let category = if major.1 == 4 {
                    Category::FourOfAKind
                } else {
                    Category::FullHouse
                };

                Score::new(category, [major.0, minor.0, 0, 0, 0])
            }
            3 => match ranks_with(3).next() {
                Some(triple) => {
                    let kickers: Vec<u8> = ranks_with(1).collect();
                    Score::new(
                        Category::ThreeOfAKind,
                        [triple, kickers[0], kickers[1], 0, 0],
                    )
                }
                None => {
                    let pairs: Vec<u8> = ranks_with(2).collect();
                    let kicker = ranks_with(1).next().unwrap_or_default();
                    Score::new(Category::TwoPair, [pairs[0], pairs[1], kicker, 0, 0])
                }
            },
            4 => {
                let pair = ranks_with(2).next().unwrap_or_default();
                let kickers: Vec<u8> = ranks_with(1).collect();
                Score::new(
                    Category::OnePair,
                    [pair, kickers[0], kickers[1], kickers[2], 0],
                )
            }
            n => unreachable!("five distinct cards span 2 to 5 ranks, got {n}"),
        }
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_cards(&cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "{}", tokens.join(" "))
    }
}

pub(crate) fn first_duplicate(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .enumerate()
        .find(|(i, card)| cards[..*i].contains(*card))
        .map(|(_, card)| *card)
}
