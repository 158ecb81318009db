//! Leaderboard row model and the per-athlete row builder.

use crate::derive::{format_rank_change, games_played, innings_to_outs, STEADY_SENTINEL};
use crate::index::FeedIndex;
use feed_client::FeedSet;
use serde::{Deserialize, Serialize};

/// Raw per-athlete counts carried on a row, used only by point attribution.
///
/// These mirror the source feeds; they are never used to recompute the row's
/// aggregate point columns, which come straight from the points feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBreakdown {
    pub singles: i64,
    pub doubles: i64,
    pub triples: i64,
    pub home_runs: i64,
    pub stolen_bases: i64,
    pub caught_stealing: i64,
    pub walks: i64,
    pub hit_by_pitch: i64,
    /// Combined sacrifice count (flies + bunts), the unit the scoring
    /// weights apply to
    pub sacrifices: i64,
    pub sac_flies: i64,
    pub sac_bunts: i64,
    pub outs_recorded: i64,
    pub runs_allowed: i64,
    pub mvp_first: i64,
    pub mvp_second: i64,
    pub mvp_third: i64,
    pub mvp_defense: i64,
    pub innings_won: i64,
    pub games_won: i64,
}

/// One athlete's fully merged leaderboard record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    /// 1-based dense rank, assigned after sorting
    pub rank: u32,
    /// Rank movement since the previous publication, display-formatted
    pub change: String,
    pub athlete: String,
    pub headshot: String,
    pub bio_url: String,
    pub team: String,
    pub position: String,
    pub total_pts: i64,
    /// Point gap to the next-higher rank, display-formatted
    pub delta: String,
    pub games: i64,
    pub win_pts: i64,
    /// Hitting + pitching points as published by the points feed
    pub stat_pts: i64,
    pub mvp_pts: i64,
    /// Raw counts backing the on-demand point attribution
    pub raw: StatBreakdown,
}

/// Build one unranked row per points-feed athlete.
///
/// The points feed drives the output: athletes absent from it get no row,
/// and athletes absent from an auxiliary feed get zero/default values for
/// that feed's fields. Rank and delta are placeholders until the ranking
/// pass assigns them.
pub fn build_rows(feeds: &FeedSet, index: &FeedIndex<'_>) -> Vec<LeaderboardRow> {
    let mut rows = Vec::with_capacity(feeds.points.len());

    for points in &feeds.points {
        if points.athlete.is_empty() {
            continue;
        }

        let hitting = index.hitting(&points.athlete);
        let pitching = index.pitching(&points.athlete);
        let mvp = index.mvp(&points.athlete);
        let win = index.win(&points.athlete);
        let info = index.player_info(&points.athlete);

        let mut raw = StatBreakdown::default();

        if let Some(h) = hitting {
            raw.singles = h.singles;
            raw.doubles = h.doubles;
            raw.triples = h.triples;
            raw.home_runs = h.home_runs;
            raw.stolen_bases = h.stolen_bases;
            raw.caught_stealing = h.caught_stealing;
            raw.walks = h.walks;
            raw.hit_by_pitch = h.hit_by_pitch;
            raw.sac_flies = h.sac_flies;
            raw.sac_bunts = h.sac_bunts;
            raw.sacrifices = h.sac_flies + h.sac_bunts;
        }

        if let Some(p) = pitching {
            raw.outs_recorded = innings_to_outs(&p.innings_pitched);
            raw.runs_allowed = p.earned_runs;
        }

        if let Some(m) = mvp {
            raw.mvp_first = m.first_place;
            raw.mvp_second = m.second_place;
            raw.mvp_third = m.third_place;
            raw.mvp_defense = m.defensive;
        }

        if let Some(w) = win {
            raw.innings_won = w.innings_won;
            raw.games_won = w.games_won;
        }

        let change = info
            .map(|i| format_rank_change(&i.rank_change))
            .unwrap_or_else(|| STEADY_SENTINEL.to_string());

        rows.push(LeaderboardRow {
            rank: 0,
            change,
            athlete: points.athlete.clone(),
            headshot: info.map(|i| i.headshot.clone()).unwrap_or_default(),
            bio_url: info.map(|i| i.bio_url.clone()).unwrap_or_default(),
            team: info.map(|i| i.team.clone()).unwrap_or_default(),
            position: info.map(|i| i.position.clone()).unwrap_or_default(),
            total_pts: points.total_points,
            delta: STEADY_SENTINEL.to_string(),
            games: games_played(hitting, pitching),
            win_pts: points.win_points,
            stat_pts: points.hitting_points + points.pitching_points,
            mvp_pts: points.mvp_points,
            raw,
        });
    }

    rows
}
