use crate::utils::IdGenerator;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single scheduled match.
///
/// Created in one batch by the schedule generator (or one-off by a
/// caller adding a match by hand); external result recording later marks
/// it completed via [`Fixture::with_result`]. Invariant: both scores are
/// present iff `completed` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub league_id: u32,
    pub matchday: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub kickoff: NaiveDateTime,
    pub venue: Option<String>,
    pub completed: bool,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

impl Fixture {
    pub fn new(
        league_id: u32,
        matchday: u32,
        home_team_id: u32,
        away_team_id: u32,
        kickoff: NaiveDateTime,
        venue: Option<String>,
    ) -> Self {
        Fixture {
            id: IdGenerator::fixture_id(),
            league_id,
            matchday,
            home_team_id,
            away_team_id,
            kickoff,
            venue,
            completed: false,
            home_score: None,
            away_score: None,
        }
    }

    /// Completed copy of this fixture with the final score set.
    pub fn with_result(&self, home_score: u32, away_score: u32) -> Fixture {
        let mut fixture = self.clone();

        fixture.completed = true;
        fixture.home_score = Some(home_score);
        fixture.away_score = Some(away_score);

        fixture
    }

    /// Final score, present only when the fixture is completed with both
    /// scores recorded.
    pub fn score(&self) -> Option<(u32, u32)> {
        match (self.completed, self.home_score, self.away_score) {
            (true, Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}
