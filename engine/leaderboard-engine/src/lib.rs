//! Leaderboard Aggregation & Point-Attribution Engine
//!
//! Joins the six per-athlete stat feeds into ranked leaderboard rows and, on
//! demand, decomposes a row's aggregate point total into a labeled weighted
//! breakdown of the raw events that produced it.
//!
//! Everything in this crate is pure and stateless: feed data goes in as
//! explicit inputs, rows come out as new values. There is no caching between
//! requests; a leaderboard is recomputed fresh from a feed snapshot every
//! time.

pub mod attribution;
pub mod derive;
pub mod error;
pub mod index;
pub mod ranking;
pub mod row;


pub use attribution::{attribute, BreakdownComponent, BreakdownResult, PointCategory};
pub use error::{EngineError, Result};
pub use index::FeedIndex;
pub use ranking::build_leaderboard;
pub use row::{LeaderboardRow, StatBreakdown};
