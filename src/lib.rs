// Library crate for the poker hand ranker
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod game;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::RunConfig;
pub use game::{
    count_player_one_wins, judge, tally, Card, Category, Deal, Hand, HandError, Outcome, Rank,
    Score, Suit, Tally, TallyError,
};
pub use shared::AppError;
