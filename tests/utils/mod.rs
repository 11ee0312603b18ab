pub mod deal_builders;

// Re-export main utilities for use by test files
pub use deal_builders::{DealBuilder, REFERENCE_BATCH};
