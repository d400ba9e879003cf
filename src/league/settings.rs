use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// How generated fixtures get their venue assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VenuePolicy {
    None,
    HomeTeamVenue,
}

/// Season scheduling parameters, supplied by external league management.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    pub double_round: bool,
    pub start_date: NaiveDate,
    pub match_weekday: Weekday,
    pub kickoff_time: NaiveTime,
    pub round_interval_days: u32,
    pub venue_policy: VenuePolicy,
}

impl ScheduleSettings {
    pub fn new(
        double_round: bool,
        start_date: NaiveDate,
        match_weekday: Weekday,
        kickoff_time: NaiveTime,
    ) -> Self {
        ScheduleSettings {
            double_round,
            start_date,
            match_weekday,
            kickoff_time,
            round_interval_days: 7,
            venue_policy: VenuePolicy::None,
        }
    }

    pub fn with_interval(mut self, days: u32) -> Self {
        self.round_interval_days = days;
        self
    }

    pub fn with_venue_policy(mut self, policy: VenuePolicy) -> Self {
        self.venue_policy = policy;
        self
    }
}

/// League-configured point values for match outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsSettings {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for PointsSettings {
    fn default() -> Self {
        PointsSettings {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}
