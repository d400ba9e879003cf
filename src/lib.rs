pub mod error;
pub mod league;
pub mod utils;

pub use error::LeagueError;

pub use league::{
    // Scheduling
    Fixture, Schedule, ScheduleGenerator, ScheduleSettings, VenuePolicy,
    // Standings
    LeagueTable, LeagueTableRow, PointsSettings, UNKNOWN_TEAM_NAME, compare_rows,
    // Roster input
    Team,
};

pub use utils::*;
