pub mod basic;
pub mod hands;
pub mod score;


pub use basic::{Card, Rank, Suit};
pub use hands::{Hand, HandError, HAND_SIZE};
pub use score::{Category, Score};
