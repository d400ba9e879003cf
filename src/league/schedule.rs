use crate::error::LeagueError;
use crate::league::{Fixture, ScheduleSettings, Team, VenuePolicy};
use crate::utils::DateUtils;
use chrono::{Duration, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

/// Builds the complete round-robin calendar for one season.
///
/// Pairings come from the circle method: team index 0 stays fixed while
/// the remaining indices rotate one step between rounds. Odd rosters are
/// padded with a synthetic bye slot whose pairings are discarded, so
/// every real team sits out exactly one matchday per pass.
///
/// The output is a fully deterministic function of the roster order and
/// settings; only the fixture ids are freshly generated on every call.
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    pub fn generate(
        teams: &[Team],
        league_id: u32,
        settings: &ScheduleSettings,
    ) -> Result<Vec<Fixture>, LeagueError> {
        if teams.len() < 2 {
            return Err(LeagueError::InsufficientTeams(teams.len()));
        }

        if settings.round_interval_days == 0 {
            return Err(LeagueError::InvalidParameter(String::from(
                "round_interval_days must be positive",
            )));
        }

        let real_count = teams.len();
        let slots = if real_count % 2 == 1 {
            real_count + 1
        } else {
            real_count
        };

        let total_rounds = slots - 1;
        let matches_per_round = slots / 2;
        let interval = settings.round_interval_days as i64;

        let first_matchday = DateUtils::next_weekday(settings.start_date, settings.match_weekday);

        debug!(
            "league {}: scheduling {} teams over {} rounds from {}",
            league_id, real_count, total_rounds, first_matchday
        );

        let mut fixtures = Vec::with_capacity(real_count * (real_count - 1) / 2);
        let mut indices: Vec<usize> = (0..slots).collect();

        for round in 0..total_rounds {
            let round_date = first_matchday + Duration::days(round as i64 * interval);
            let kickoff = round_date.and_time(settings.kickoff_time);

            for pair in 0..matches_per_round {
                let home = indices[pair];
                let away = indices[slots - 1 - pair];

                // The bye slot is the padded index past the real roster.
                if home >= real_count || away >= real_count {
                    continue;
                }

                let home_team = &teams[home];
                let away_team = &teams[away];

                fixtures.push(Fixture::new(
                    league_id,
                    (round + 1) as u32,
                    home_team.id,
                    away_team.id,
                    kickoff,
                    venue_for(home_team, settings.venue_policy),
                ));
            }

            rotate_ring(&mut indices);
        }

        if settings.double_round {
            let return_offset = Duration::days(total_rounds as i64 * interval);

            let return_legs: Vec<Fixture> = fixtures
                .iter()
                .map(|first_leg| {
                    // Return-leg home team is the first-leg away team.
                    let venue = teams
                        .iter()
                        .find(|team| team.id == first_leg.away_team_id)
                        .and_then(|team| venue_for(team, settings.venue_policy));

                    Fixture::new(
                        league_id,
                        first_leg.matchday + total_rounds as u32,
                        first_leg.away_team_id,
                        first_leg.home_team_id,
                        first_leg.kickoff + return_offset,
                        venue,
                    )
                })
                .collect();

            fixtures.extend(return_legs);
        }

        debug!(
            "league {}: generated {} fixtures",
            league_id,
            fixtures.len()
        );

        Ok(fixtures)
    }
}

fn venue_for(home_team: &Team, policy: VenuePolicy) -> Option<String> {
    match policy {
        VenuePolicy::HomeTeamVenue => home_team.home_venue.clone(),
        VenuePolicy::None => None,
    }
}

/// One rotation step of the circle method: index 0 stays fixed, the last
/// index moves to position 1 and everything between shifts one step back.
pub(crate) fn rotate_ring(indices: &mut Vec<usize>) {
    if let Some(last) = indices.pop() {
        indices.insert(1, last);
    }
}

/// Season calendar with query helpers over the generated fixtures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub fixtures: Vec<Fixture>,
}

impl Schedule {
    pub fn new(fixtures: Vec<Fixture>) -> Self {
        Schedule { fixtures }
    }

    pub fn total_matchdays(&self) -> u32 {
        self.fixtures.iter().map(|f| f.matchday).max().unwrap_or(0)
    }

    pub fn for_matchday(&self, matchday: u32) -> Vec<&Fixture> {
        self.fixtures
            .iter()
            .filter(|f| f.matchday == matchday)
            .collect()
    }

    pub fn for_team(&self, team_id: u32) -> Vec<&Fixture> {
        self.fixtures
            .iter()
            .filter(|f| f.involves(team_id))
            .collect()
    }

    /// Pending fixtures for a team with kickoff within `days` of `from`.
    pub fn upcoming_for_team(&self, team_id: u32, from: NaiveDate, days: i64) -> Vec<&Fixture> {
        let end = from + Duration::days(days);

        self.fixtures
            .iter()
            .filter(|f| {
                let date = f.kickoff.date();
                f.involves(team_id) && !f.completed && date >= from && date <= end
            })
            .collect()
    }
}
