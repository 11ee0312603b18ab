// Public API
pub use cards::{Card, Category, Hand, HandError, Rank, Score, Suit};
pub use round::{judge, Deal, Outcome};
pub use tally::{count_player_one_wins, tally, Tally, TallyError};

// Modules
pub mod cards;
pub mod round;
pub mod tally;
