use thiserror::Error;

/// Errors surfaced by the scheduling and standings computations.
///
/// Both computations are pure, so every error is synchronous and fatal to
/// the call that produced it; nothing is retried or recovered internally.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("at least 2 teams are required to build a schedule, got {0}")]
    InsufficientTeams(usize),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("fixture {0} has no recorded result")]
    IncompleteFixture(String),
}
