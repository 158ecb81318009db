use crate::config::FeedConfig;
use crate::models::*;
use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::info;

/// Client for the upstream stat feeds
pub struct FeedClient {
    config: FeedConfig,
    client: Client,
}

impl FeedClient {
    /// Create a new feed client
    pub fn new(config: FeedConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    /// Fetch one feed endpoint as a record list
    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = self.config.url_for(path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch feed {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("Feed request {} failed with status: {}", url, response.status());
        }

        let records: Vec<T> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse feed JSON from {url}"))?;

        Ok(records)
    }

    /// Fetch the aggregate points feed
    pub async fn fetch_points(&self) -> Result<Vec<PointsRecord>> {
        self.fetch_list(&self.config.endpoints.points).await
    }

    /// Fetch the hitting stats feed
    pub async fn fetch_hitting(&self) -> Result<Vec<HittingRecord>> {
        self.fetch_list(&self.config.endpoints.hitting).await
    }

    /// Fetch the pitching stats feed
    pub async fn fetch_pitching(&self) -> Result<Vec<PitchingRecord>> {
        self.fetch_list(&self.config.endpoints.pitching).await
    }

    /// Fetch the MVP award points feed
    pub async fn fetch_mvp(&self) -> Result<Vec<MvpRecord>> {
        self.fetch_list(&self.config.endpoints.mvp).await
    }

    /// Fetch the win credit feed
    pub async fn fetch_win(&self) -> Result<Vec<WinRecord>> {
        self.fetch_list(&self.config.endpoints.win).await
    }

    /// Fetch the player info feed
    pub async fn fetch_player_info(&self) -> Result<Vec<PlayerInfoRecord>> {
        self.fetch_list(&self.config.endpoints.player_info).await
    }

    /// Fetch all six feeds concurrently.
    ///
    /// The fetches have no ordering dependency, so they are issued together;
    /// if any one fails the whole snapshot fails. The aggregation layer must
    /// never run on partial feeds, since a silently missing auxiliary feed
    /// would zero out real data without signaling the caller.
    pub async fn fetch_all(&self) -> Result<FeedSet> {
        let (points, hitting, pitching, mvp, win, player_info) = tokio::try_join!(
            self.fetch_points(),
            self.fetch_hitting(),
            self.fetch_pitching(),
            self.fetch_mvp(),
            self.fetch_win(),
            self.fetch_player_info(),
        )?;

        info!(
            "Fetched feed snapshot: {} points, {} hitting, {} pitching, {} mvp, {} win, {} info",
            points.len(),
            hitting.len(),
            pitching.len(),
            mvp.len(),
            win.len(),
            player_info.len()
        );

        Ok(FeedSet { points, hitting, pitching, mvp, win, player_info, fetched_at: Utc::now() })
    }
}
