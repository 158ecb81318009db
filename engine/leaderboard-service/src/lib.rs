//! Leaderboard Service
//!
//! Thin REST surface over the leaderboard engine. Every request re-fetches
//! the upstream feeds and recomputes the leaderboard from scratch; there is
//! no cache and no state between requests.

pub mod config;
pub mod logging;
pub mod rest_api;

pub use config::ServiceConfig;
pub use logging::initialize_logging;
