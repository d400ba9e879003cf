use crate::error::LeagueError;
use crate::league::{Fixture, PointsSettings, Team};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Fallback display label when no name is known for a team id.
/// Degraded-data policy, not an error: computation always proceeds.
pub const UNKNOWN_TEAM_NAME: &str = "Unknown Team";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueTableRow {
    pub team_id: u32,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl LeagueTableRow {
    fn new(team_id: u32, team_name: String) -> Self {
        LeagueTableRow {
            team_id,
            team_name,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }
}

/// Tie-break chain: points, goal difference, goals scored (all
/// descending), then case-insensitive team name ascending. The name step
/// guarantees a total order.
pub fn compare_rows(a: &LeagueTableRow, b: &LeagueTableRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| {
            a.team_name
                .to_lowercase()
                .cmp(&b.team_name.to_lowercase())
        })
}

/// League standings, one row per team, kept fully sorted.
///
/// The table is derived state: every update returns a new, re-sorted
/// table and leaves the receiver untouched. Callers own persistence and
/// must serialize result application per league; the table itself never
/// retains what it is given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn new() -> Self {
        LeagueTable { rows: Vec::new() }
    }

    /// Table pre-seeded with a zeroed row per registered team, in name
    /// order. Teams missing here are still added lazily on their first
    /// result.
    pub fn with_teams(teams: &[Team]) -> Self {
        let mut rows: Vec<LeagueTableRow> = teams
            .iter()
            .map(|team| LeagueTableRow::new(team.id, team.name.clone()))
            .collect();

        rows.sort_by(compare_rows);

        LeagueTable { rows }
    }

    /// Applies one completed match result, returning the re-sorted table.
    pub fn apply_result(
        &self,
        fixture: &Fixture,
        home_team_name: Option<&str>,
        away_team_name: Option<&str>,
        points: PointsSettings,
    ) -> Result<LeagueTable, LeagueError> {
        if fixture.home_team_id == fixture.away_team_id {
            return Err(LeagueError::InvalidParameter(format!(
                "fixture {} pairs team {} against itself",
                fixture.id, fixture.home_team_id
            )));
        }

        let (home_score, away_score) = fixture
            .score()
            .ok_or_else(|| LeagueError::IncompleteFixture(fixture.id.clone()))?;

        let mut table = self.clone();

        let home = table.row_index(fixture.home_team_id, home_team_name);
        let away = table.row_index(fixture.away_team_id, away_team_name);

        table.rows[home].played += 1;
        table.rows[home].goals_for += home_score;
        table.rows[home].goals_against += away_score;

        table.rows[away].played += 1;
        table.rows[away].goals_for += away_score;
        table.rows[away].goals_against += home_score;

        match home_score.cmp(&away_score) {
            Ordering::Greater => {
                table.rows[home].won += 1;
                table.rows[home].points += points.win;
                table.rows[away].lost += 1;
                table.rows[away].points += points.loss;
            }
            Ordering::Less => {
                table.rows[away].won += 1;
                table.rows[away].points += points.win;
                table.rows[home].lost += 1;
                table.rows[home].points += points.loss;
            }
            Ordering::Equal => {
                table.rows[home].drawn += 1;
                table.rows[home].points += points.draw;
                table.rows[away].drawn += 1;
                table.rows[away].points += points.draw;
            }
        }

        table.rows.sort_by(compare_rows);

        Ok(table)
    }

    /// Folds a batch of completed fixtures into the table, resolving team
    /// names from the roster. The first failing fixture aborts the batch.
    pub fn apply_results(
        &self,
        fixtures: &[Fixture],
        teams: &[Team],
        points: PointsSettings,
    ) -> Result<LeagueTable, LeagueError> {
        let name_of = |id: u32| teams.iter().find(|t| t.id == id).map(|t| t.name.as_str());

        let mut table = self.clone();
        for fixture in fixtures {
            table = table.apply_result(
                fixture,
                name_of(fixture.home_team_id),
                name_of(fixture.away_team_id),
                points,
            )?;
        }

        Ok(table)
    }

    pub fn position_of(&self, team_id: u32) -> Option<usize> {
        self.rows.iter().position(|r| r.team_id == team_id)
    }

    fn row_index(&mut self, team_id: u32, team_name: Option<&str>) -> usize {
        match self.rows.iter().position(|r| r.team_id == team_id) {
            Some(index) => index,
            None => {
                if team_name.is_none() {
                    debug!(
                        "no display name for team {}, using \"{}\"",
                        team_id, UNKNOWN_TEAM_NAME
                    );
                }

                let name = String::from(team_name.unwrap_or(UNKNOWN_TEAM_NAME));
                self.rows.push(LeagueTableRow::new(team_id, name));
                self.rows.len() - 1
            }
        }
    }
}
