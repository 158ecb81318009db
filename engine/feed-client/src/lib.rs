//! Feed Client
//!
//! This crate retrieves the six upstream stat feeds (aggregate points,
//! hitting, pitching, MVP awards, win credits, player info) as flat JSON
//! record lists. All six fetches are issued concurrently and any single
//! failure aborts the whole batch, so downstream aggregation never runs on
//! partial feeds.

pub mod client;
pub mod config;
pub mod models;

pub use client::FeedClient;
pub use config::FeedConfig;
pub use models::*;
