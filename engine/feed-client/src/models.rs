use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate points record, the driver feed. One per athlete with a
/// pre-summed point total and its per-source split.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointsRecord {
    #[serde(rename = "Athlete", default)]
    pub athlete: String,

    #[serde(rename = "HittingPoints", default)]
    pub hitting_points: i64,

    #[serde(rename = "PitchingPoints", default)]
    pub pitching_points: i64,

    #[serde(rename = "MVPPoints", default)]
    pub mvp_points: i64,

    #[serde(rename = "WINPoints", default)]
    pub win_points: i64,

    #[serde(rename = "TotalPoints", default)]
    pub total_points: i64,
}

/// Hitting counting stats as published by the hitting feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HittingRecord {
    #[serde(rename = "Athlete", default)]
    pub athlete: String,

    #[serde(rename = "1B", default)]
    pub singles: i64,

    #[serde(rename = "2B", default)]
    pub doubles: i64,

    #[serde(rename = "3B", default)]
    pub triples: i64,

    #[serde(rename = "HR", default)]
    pub home_runs: i64,

    #[serde(rename = "SB", default)]
    pub stolen_bases: i64,

    #[serde(rename = "CS", default)]
    pub caught_stealing: i64,

    #[serde(rename = "BB", default)]
    pub walks: i64,

    #[serde(rename = "HP", default)]
    pub hit_by_pitch: i64,

    #[serde(rename = "SF", default)]
    pub sac_flies: i64,

    #[serde(rename = "SH", default)]
    pub sac_bunts: i64,

    #[serde(rename = "G", default)]
    pub games: i64,
}

/// Pitching stats record.
///
/// `IP` is published in the innings-and-outs encoding (integer part is whole
/// innings, first fractional digit is outs within the inning) and shows up
/// as either a JSON number or a string, so it is kept raw here and decoded
/// by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PitchingRecord {
    #[serde(rename = "Athlete", default)]
    pub athlete: String,

    #[serde(rename = "IP", default)]
    pub innings_pitched: serde_json::Value,

    #[serde(rename = "ER", default)]
    pub earned_runs: i64,

    #[serde(rename = "G", default)]
    pub games: i64,
}

/// MVP award points per placement category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MvpRecord {
    #[serde(rename = "Athlete", default)]
    pub athlete: String,

    #[serde(rename = "mvp1", default)]
    pub first_place: i64,

    #[serde(rename = "mvp2", default)]
    pub second_place: i64,

    #[serde(rename = "mvp3", default)]
    pub third_place: i64,

    #[serde(rename = "defensive_mvp", default)]
    pub defensive: i64,

    #[serde(rename = "Total MVP", default)]
    pub total_mvp: i64,
}

/// Win credit record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WinRecord {
    #[serde(rename = "Athlete", default)]
    pub athlete: String,

    #[serde(rename = "Innings Won", default)]
    pub innings_won: i64,

    #[serde(rename = "Games Won", default)]
    pub games_won: i64,

    #[serde(rename = "Total Win", default)]
    pub total_win: i64,
}

/// Biographical / display metadata for an athlete.
///
/// `rank_change` is published as either a signed number or a display string
/// (including dash sentinels), so it is kept raw and normalized by the
/// engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerInfoRecord {
    #[serde(rename = "Athlete", default)]
    pub athlete: String,

    #[serde(default)]
    pub headshot: String,

    #[serde(default)]
    pub bio_url: String,

    #[serde(default)]
    pub team: String,

    #[serde(default)]
    pub position: String,

    #[serde(default)]
    pub rank_change: serde_json::Value,
}

/// One complete snapshot of all six feeds, fetched together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSet {
    pub points: Vec<PointsRecord>,
    pub hitting: Vec<HittingRecord>,
    pub pitching: Vec<PitchingRecord>,
    pub mvp: Vec<MvpRecord>,
    pub win: Vec<WinRecord>,
    pub player_info: Vec<PlayerInfoRecord>,

    /// When this snapshot was fetched
    pub fetched_at: DateTime<Utc>,
}

impl FeedSet {
    /// Create an empty feed set stamped now
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            hitting: Vec::new(),
            pitching: Vec::new(),
            mvp: Vec::new(),
            win: Vec::new(),
            player_info: Vec::new(),
            fetched_at: Utc::now(),
        }
    }
}
