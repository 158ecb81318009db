//! Error types for the leaderboard engine

use thiserror::Error;

/// Result type for leaderboard engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while building a leaderboard.
///
/// Only the mandatory points feed can fail the build. A missing auxiliary
/// feed or an athlete absent from one is never an error; those degrade to
/// zero/default values inside the affected row.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("No leaderboard data available: the points feed is empty")]
    NoData,
}
