use std::fmt;

/// Hand strength class. Discriminants are the leading element of a
/// [`Score`]; the gap at 9 is kept so scores line up with the established
/// numeric encoding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 10,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Promote a five-distinct-rank category when all cards share a suit.
    pub(super) fn with_flush(self) -> Self {
        match self {
            Category::Straight => Category::StraightFlush,
            Category::HighCard => Category::Flush,
            other => other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::HighCard => "High Card",
                Category::OnePair => "One Pair",
                Category::TwoPair => "Two Pair",
                Category::ThreeOfAKind => "Three of a Kind",
                Category::Straight => "Straight",
                Category::Flush => "Flush",
                Category::FullHouse => "Full House",
                Category::FourOfAKind => "Four of a Kind",
                Category::StraightFlush => "Straight Flush",
            }
        )
    }
}

/// Comparable strength of a five card hand.
///
/// Fields are ordered so the derived `Ord` is the lexicographic comparison
/// of `[category, tiebreak1, .., tiebreak5]`. Unused tiebreak slots are 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Score {
    pub category: Category,
    pub tiebreaks: [u8; 5],
}

impl Score {
    pub fn new(category: Category, tiebreaks: [u8; 5]) -> Self {
        Self {
            category,
            tiebreaks,
        }
    }

    /// The score as its six element vector.
    pub fn values(&self) -> [u8; 6] {
        let mut values = [0; 6];
        values[0] = self.category.value();
        values[1..].copy_from_slice(&self.tiebreaks);
        values
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.values())
    }
}
