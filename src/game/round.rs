use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::cards::{hands::first_duplicate, Card, Hand, HandError, HAND_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerOneWins,
    PlayerTwoWins,
    Tie,
}

impl Outcome {
    /// The same result seen from the other seat.
    pub fn reversed(self) -> Self {
        match self {
            Outcome::PlayerOneWins => Outcome::PlayerTwoWins,
            Outcome::PlayerTwoWins => Outcome::PlayerOneWins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Outcome::PlayerOneWins,
            Ordering::Less => Outcome::PlayerTwoWins,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Outcome::PlayerOneWins => "Player 1 wins",
                Outcome::PlayerTwoWins => "Player 2 wins",
                Outcome::Tie => "Tie",
            }
        )
    }
}

/// One round: ten distinct cards, the first five dealt to player one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DealRecord")]
pub struct Deal {
    player_one: Hand,
    player_two: Hand,
}

/// Unchecked wire form of a [`Deal`].
#[derive(Deserialize)]
struct DealRecord {
    player_one: Hand,
    player_two: Hand,
}

impl TryFrom<DealRecord> for Deal {
    type Error = HandError;

    fn try_from(record: DealRecord) -> Result<Self, Self::Error> {
        Self::new(record.player_one, record.player_two)
    }
}

impl Deal {
    /// Pair two hands, rejecting a card dealt to both players
    pub fn new(player_one: Hand, player_two: Hand) -> Result<Self, HandError> {
        let cards: Vec<Card> = player_one
            .cards()
            .iter()
            .chain(player_two.cards())
            .copied()
            .collect();
        if let Some(card) = first_duplicate(&cards) {
            return Err(HandError::DuplicateCard(card));
        }

        Ok(Self {
            player_one,
            player_two,
        })
    }

    /// Parse a line of ten whitespace separated card tokens
    pub fn parse(line: &str) -> Result<Self, HandError> {
        let cards = line
            .split_whitespace()
            .map(Card::from_string)
            .collect::<Result<Vec<_>, _>>()?;

        if cards.len() != HAND_SIZE * 2 {
            return Err(HandError::InvalidDealSize(cards.len()));
        }

        let (first, second) = cards.split_at(HAND_SIZE);
        Self::new(Hand::from_cards(first)?, Hand::from_cards(second)?)
    }

    pub fn player_one(&self) -> &Hand {
        &self.player_one
    }

    pub fn player_two(&self) -> &Hand {
        &self.player_two
    }

    pub fn swapped(&self) -> Self {
        Self {
            player_one: self.player_two,
            player_two: self.player_one,
        }
    }

    pub fn outcome(&self) -> Outcome {
        let first = self.player_one.score();
        let second = self.player_two.score();
        let outcome = Outcome::from(first.cmp(&second));

        debug!(
            player_one = %self.player_one,
            player_one_score = %first,
            player_two = %self.player_two,
            player_two_score = %second,
            outcome = %outcome,
            "Judged round"
        );

        outcome
    }
}

impl FromStr for Deal {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Decide a single deal line.
pub fn judge(line: &str) -> Result<Outcome, HandError> {
    Ok(Deal::parse(line)?.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("8C TS KC 9H 4S 7D 2S 5D 3S AC", Outcome::PlayerTwoWins)] // king high vs ace high
    #[case("5C AD 5D AC 9C 7C 5H 8D TD KS", Outcome::PlayerOneWins)] // two pair vs high card
    #[case("3H 7H 6S KC JS QH TD JC 2D 8S", Outcome::PlayerOneWins)] // king high vs queen high
    #[case("TH 8H 5C QS TC 9H 4D JC KS JS", Outcome::PlayerTwoWins)] // tens vs jacks
    #[case("7C 5H KC QH JD AS KH 4C AD 4S", Outcome::PlayerTwoWins)] // high card vs two pair
    fn test_judge_reference_rounds(#[case] line: &str, #[case] expected: Outcome) {
        assert_eq!(judge(line), Ok(expected));
    }

    #[rstest]
    #[case("2C 5D 9H JS KC 2D 5H 9S JC KD")]
    #[case("2C 3D 4H 5S 6C 2D 3H 4S 5C 6D")]
    fn test_identical_ranks_tie(#[case] line: &str) {
        assert_eq!(judge(line), Ok(Outcome::Tie));
    }

    #[rstest]
    #[case("8C TS KC 9H 4S 7D 2S 5D 3S AC")]
    #[case("5C AD 5D AC 9C 7C 5H 8D TD KS")]
    #[case("2C 5D 9H JS KC 2D 5H 9S JC KD")]
    #[case("2C 2D 2H 2S 3C AC AD AH KS KC")]
    fn test_swapping_seats_reverses_outcome(#[case] line: &str) {
        let deal = Deal::parse(line).unwrap();
        assert_eq!(deal.swapped().outcome(), deal.outcome().reversed());
    }

    #[test]
    fn test_quads_beat_full_house() {
        assert_eq!(
            judge("2C 2D 2H 2S 3C AC AD AH KS KH"),
            Ok(Outcome::PlayerOneWins)
        );
        assert_eq!(
            judge("AC AD AH KS KH 2C 2D 2H 2S 3C"),
            Ok(Outcome::PlayerTwoWins)
        );
    }

    #[test]
    fn test_deal_splits_first_five_to_player_one() {
        let deal: Deal = "5C AD 5D AC 9C 7C 5H 8D TD KS".parse().unwrap();
        assert_eq!(deal.player_one(), &Hand::parse("5C AD 5D AC 9C").unwrap());
        assert_eq!(deal.player_two(), &Hand::parse("7C 5H 8D TD KS").unwrap());
    }

    #[rstest]
    #[case("8C TS KC 9H 4S 7D 2S 5D 3S", HandError::InvalidDealSize(9))]
    #[case("8C TS KC 9H 4S 7D 2S 5D 3S AC 2C", HandError::InvalidDealSize(11))]
    #[case("", HandError::InvalidDealSize(0))]
    #[case("8C TS KC 9H 4S 7D 2S 5D 3S 1C", HandError::InvalidCard("1C".to_string()))]
    #[case("8c TS KC 9H 4S 7D 2S 5D 3S AC", HandError::InvalidCard("8c".to_string()))]
    #[case("8C TS KC 9H 4S 7D 2S 5D 3S 8C", HandError::DuplicateCard(Card::from_string("8C").unwrap()))]
    fn test_malformed_deals(#[case] line: &str, #[case] expected: HandError) {
        assert_eq!(judge(line), Err(expected));
    }

    #[test]
    fn test_same_card_in_both_hands_is_rejected() {
        let kings = Hand::parse("KC KD KH KS 2C").unwrap();
        let full_house = Hand::parse("AC AD AH KS KH").unwrap();
        assert_eq!(
            Deal::new(kings, full_house),
            Err(HandError::DuplicateCard(Card::from_string("KS").unwrap()))
        );
        assert_eq!(
            judge("KC KD KH KS 2C AC AD AH KS KH"),
            Err(HandError::DuplicateCard(Card::from_string("KS").unwrap()))
        );
    }

    #[test]
    fn test_deal_deserialization_is_checked() {
        let deal = Deal::parse("5C AD 5D AC 9C 7C 5H 8D TD KS").unwrap();
        let json = serde_json::to_string(&deal).unwrap();
        assert_eq!(serde_json::from_str::<Deal>(&json).unwrap(), deal);

        let shared_card = r#"{
            "player_one": [
                {"rank": "Ace", "suit": "Spades"}, {"rank": "King", "suit": "Spades"},
                {"rank": "Two", "suit": "Clubs"}, {"rank": "Three", "suit": "Clubs"},
                {"rank": "Four", "suit": "Clubs"}
            ],
            "player_two": [
                {"rank": "Ace", "suit": "Spades"}, {"rank": "King", "suit": "Hearts"},
                {"rank": "Two", "suit": "Hearts"}, {"rank": "Three", "suit": "Hearts"},
                {"rank": "Five", "suit": "Hearts"}
            ]
        }"#;
        let error = serde_json::from_str::<Deal>(shared_card).unwrap_err();
        assert!(error.to_string().contains("Duplicate card: AS"), "{error}");
    }

    #[test]
    fn test_outcome_from_ordering() {
        assert_eq!(Outcome::from(Ordering::Greater), Outcome::PlayerOneWins);
        assert_eq!(Outcome::from(Ordering::Less), Outcome::PlayerTwoWins);
        assert_eq!(Outcome::from(Ordering::Equal), Outcome::Tie);
        assert_eq!(Outcome::Tie.reversed(), Outcome::Tie);
    }
}
