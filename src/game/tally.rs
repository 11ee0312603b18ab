use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument, warn};

use super::cards::HandError;
use super::round::{Deal, Outcome};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error("Invalid deal on line {line}: {source}")]
    InvalidDeal {
        line: usize,
        #[source]
        source: HandError,
    },
}

/// Running count of round results across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub ties: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerOneWins => self.player_one_wins += 1,
            Outcome::PlayerTwoWins => self.player_two_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn rounds(&self) -> usize {
        self.player_one_wins + self.player_two_wins + self.ties
    }
}

/// Judge every deal line and count the results.
///
/// Blank lines are skipped. The first malformed line aborts the batch.
#[instrument(skip(lines))]
pub fn tally<I, S>(lines: I) -> Result<Tally, TallyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tally = Tally::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        let deal = Deal::parse(line).map_err(|source| {
            warn!(line = index + 1, error = %source, "Rejecting deal");
            TallyError::InvalidDeal {
                line: index + 1,
                source,
            }
        })?;
        tally.record(deal.outcome());
    }

    info!(
        rounds = tally.rounds(),
        player_one_wins = tally.player_one_wins,
        player_two_wins = tally.player_two_wins,
        ties = tally.ties,
        "Tallied deals"
    );

    Ok(tally)
}

/// Number of rounds won by player one.
pub fn count_player_one_wins<I, S>(lines: I) -> Result<usize, TallyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(tally(lines)?.player_one_wins)
}
