//! Point attribution: expanding a row's aggregate point total into the
//! labeled, weighted raw events that produced it.
//!
//! Every component is `count * fixed_weight` read straight off the row's raw
//! counts, so the component sum reconciles with the category total whenever
//! the upstream aggregate was computed from the same counts. No remainder
//! correction is applied: if upstream recorded a total that the raw counts
//! cannot explain, the breakdown reports what the counts support and leaves
//! the mismatch visible to the caller.

use crate::row::{LeaderboardRow, StatBreakdown};
use serde::{Deserialize, Serialize};

/// Which aggregate column of a row to decompose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointCategory {
    Stat,
    Win,
    Mvp,
}

impl PointCategory {
    /// Display label for the category
    pub fn label(&self) -> &'static str {
        match self {
            PointCategory::Stat => "Stat Points",
            PointCategory::Win => "Win Points",
            PointCategory::Mvp => "MVP Points",
        }
    }
}

impl std::str::FromStr for PointCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stat" => Ok(PointCategory::Stat),
            "win" => Ok(PointCategory::Win),
            "mvp" => Ok(PointCategory::Mvp),
            other => Err(format!("unknown point category: {other}")),
        }
    }
}

/// One labeled, weighted slice of a category total
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownComponent {
    pub label: String,
    pub count: i64,
    pub weight: i64,
    pub points: i64,
}

impl BreakdownComponent {
    fn new(label: &str, count: i64, weight: i64) -> Self {
        Self { label: label.to_string(), count, weight, points: count * weight }
    }

    fn placeholder(label: &str) -> Self {
        Self { label: label.to_string(), count: 0, weight: 0, points: 0 }
    }
}

/// A fully expanded category breakdown for one row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResult {
    pub category_label: String,
    pub components: Vec<BreakdownComponent>,
    /// The row's stored aggregate for this category: authoritative, not
    /// recomputed from the components
    pub total: i64,
}

impl BreakdownResult {
    /// Sum of the component point values
    pub fn component_sum(&self) -> i64 {
        self.components.iter().map(|c| c.points).sum()
    }
}

type CountAccessor = fn(&StatBreakdown) -> i64;

/// Scoring weights for the stat category, matching the upstream scoring
/// model the points feed was computed with.
const STAT_TABLE: &[(&str, i64, CountAccessor)] = &[
    ("Singles", 10, |s: &StatBreakdown| s.singles),
    ("Doubles", 20, |s: &StatBreakdown| s.doubles),
    ("Triples", 30, |s: &StatBreakdown| s.triples),
    ("Home Runs", 40, |s: &StatBreakdown| s.home_runs),
    ("Stolen Bases", 10, |s: &StatBreakdown| s.stolen_bases),
    ("Caught Stealing", -10, |s: &StatBreakdown| s.caught_stealing),
    ("Walks", 10, |s: &StatBreakdown| s.walks),
    ("Hit By Pitch", 8, |s: &StatBreakdown| s.hit_by_pitch),
    ("Sacrifice Fly/Bunt", 10, |s: &StatBreakdown| s.sacrifices),
    ("Outs Recorded", 4, |s: &StatBreakdown| s.outs_recorded),
    ("Runs Allowed", -10, |s: &StatBreakdown| s.runs_allowed),
];

const INNINGS_WON_WEIGHT: i64 = 10;
const GAMES_WON_WEIGHT: i64 = 70;

/// MVP placement fields already carry point values, so they contribute
/// directly at unit weight.
const MVP_TABLE: &[(&str, CountAccessor)] = &[
    ("1st Place MVP", |s: &StatBreakdown| s.mvp_first),
    ("2nd Place MVP", |s: &StatBreakdown| s.mvp_second),
    ("3rd Place MVP", |s: &StatBreakdown| s.mvp_third),
    ("Defensive MVP", |s: &StatBreakdown| s.mvp_defense),
];

const NO_STATS_LABEL: &str = "No Statistics Recorded";
const NO_MVP_LABEL: &str = "No MVP Awards";

/// Expand one category of a row's points into labeled weighted components.
///
/// Never fails: a row with no raw-count data produces a placeholder
/// breakdown whose `total` is whatever aggregate the row carries.
pub fn attribute(row: &LeaderboardRow, category: PointCategory) -> BreakdownResult {
    let components = match category {
        PointCategory::Stat => stat_components(&row.raw),
        PointCategory::Win => win_components(&row.raw),
        // A zero MVP total always reads as "no awards", even if stray
        // placement counts arrived from an inconsistent feed
        PointCategory::Mvp if row.mvp_pts == 0 => {
            vec![BreakdownComponent::placeholder(NO_MVP_LABEL)]
        }
        PointCategory::Mvp => mvp_components(&row.raw),
    };

    let total = match category {
        PointCategory::Stat => row.stat_pts,
        PointCategory::Win => row.win_pts,
        PointCategory::Mvp => row.mvp_pts,
    };

    BreakdownResult { category_label: category.label().to_string(), components, total }
}

fn stat_components(raw: &StatBreakdown) -> Vec<BreakdownComponent> {
    let mut components: Vec<BreakdownComponent> = STAT_TABLE
        .iter()
        .filter(|(_, _, count_of)| count_of(raw) != 0)
        .map(|(label, weight, count_of)| BreakdownComponent::new(label, count_of(raw), *weight))
        .collect();

    if components.is_empty() {
        components.push(BreakdownComponent::placeholder(NO_STATS_LABEL));
    }

    components
}

fn win_components(raw: &StatBreakdown) -> Vec<BreakdownComponent> {
    // Both win components are always shown, even at zero
    vec![
        BreakdownComponent::new("Innings Won", raw.innings_won, INNINGS_WON_WEIGHT),
        BreakdownComponent::new("Games Won", raw.games_won, GAMES_WON_WEIGHT),
    ]
}

fn mvp_components(raw: &StatBreakdown) -> Vec<BreakdownComponent> {
    let mut components: Vec<BreakdownComponent> = MVP_TABLE
        .iter()
        .filter(|(_, count_of)| count_of(raw) != 0)
        .map(|(label, count_of)| BreakdownComponent::new(label, count_of(raw), 1))
        .collect();

    if components.is_empty() {
        components.push(BreakdownComponent::placeholder(NO_MVP_LABEL));
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::STEADY_SENTINEL;

    fn row_with(raw: StatBreakdown, stat_pts: i64, win_pts: i64, mvp_pts: i64) -> LeaderboardRow {
        LeaderboardRow {
            rank: 1,
            change: STEADY_SENTINEL.to_string(),
            athlete: "Test, A.".to_string(),
            headshot: String::new(),
            bio_url: String::new(),
            team: String::new(),
            position: String::new(),
            total_pts: stat_pts + win_pts + mvp_pts,
            delta: STEADY_SENTINEL.to_string(),
            games: 10,
            win_pts,
            stat_pts,
            mvp_pts,
            raw,
        }
    }

    #[test]
    fn stat_components_sum_to_weighted_counts() {
        let raw = StatBreakdown {
            singles: 6,
            doubles: 2,
            home_runs: 1,
            caught_stealing: 1,
            walks: 3,
            sacrifices: 2,
            outs_recorded: 20,
            runs_allowed: 2,
            ..Default::default()
        };
        // 60 + 40 + 40 - 10 + 30 + 20 + 80 - 20 = 240
        let row = row_with(raw, 240, 0, 0);

        let result = attribute(&row, PointCategory::Stat);
        assert_eq!(result.category_label, "Stat Points");
        assert_eq!(result.component_sum(), 240);
        assert_eq!(result.component_sum(), result.total);
        // Zero-count stats are excluded entirely
        assert!(result.components.iter().all(|c| c.count != 0));
        assert!(!result.components.iter().any(|c| c.label == "Triples"));
    }

    #[test]
    fn negative_count_components_are_kept() {
        let raw = StatBreakdown { caught_stealing: 2, ..Default::default() };
        let row = row_with(raw, -20, 0, 0);

        let result = attribute(&row, PointCategory::Stat);
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.components[0].label, "Caught Stealing");
        assert_eq!(result.components[0].points, -20);
    }

    #[test]
    fn empty_stat_counts_produce_placeholder() {
        let row = row_with(StatBreakdown::default(), 0, 0, 0);

        let result = attribute(&row, PointCategory::Stat);
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.components[0].label, "No Statistics Recorded");
        assert_eq!(result.components[0].points, 0);
    }

    #[test]
    fn stat_placeholder_with_nonzero_total_surfaces_mismatch() {
        // Upstream inconsistency: a stored total with no raw counts behind
        // it. The breakdown does not force reconciliation.
        let row = row_with(StatBreakdown::default(), 150, 0, 0);

        let result = attribute(&row, PointCategory::Stat);
        assert_eq!(result.total, 150);
        assert_eq!(result.components[0].label, "No Statistics Recorded");
        assert_eq!(result.component_sum(), 0);
    }

    #[test]
    fn win_components_always_present_even_at_zero() {
        let row = row_with(StatBreakdown::default(), 0, 0, 0);

        let result = attribute(&row, PointCategory::Win);
        assert_eq!(result.components.len(), 2);
        assert_eq!(result.components[0].label, "Innings Won");
        assert_eq!(result.components[1].label, "Games Won");
        assert_eq!(result.component_sum(), 0);
    }

    #[test]
    fn win_components_apply_fixed_weights() {
        let raw = StatBreakdown { innings_won: 33, games_won: 5, ..Default::default() };
        let row = row_with(raw, 0, 680, 0);

        let result = attribute(&row, PointCategory::Win);
        assert_eq!(result.components[0].points, 330);
        assert_eq!(result.components[1].points, 350);
        assert_eq!(result.component_sum(), result.total);
    }

    #[test]
    fn mvp_components_contribute_at_unit_weight() {
        let raw = StatBreakdown { mvp_first: 240, mvp_defense: 40, ..Default::default() };
        let row = row_with(raw, 0, 0, 280);

        let result = attribute(&row, PointCategory::Mvp);
        assert_eq!(result.components.len(), 2);
        assert!(result.components.iter().all(|c| c.weight == 1));
        assert_eq!(result.component_sum(), 280);
        assert_eq!(result.component_sum(), result.total);
    }

    #[test]
    fn zero_mvp_total_produces_placeholder() {
        let row = row_with(StatBreakdown::default(), 0, 0, 0);

        let result = attribute(&row, PointCategory::Mvp);
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.components[0].label, "No MVP Awards");
        assert_eq!(result.total, 0);
    }

    #[test]
    fn zero_mvp_total_overrides_stray_placement_counts() {
        // Inconsistent feeds: placement values present but the stored
        // total is zero. The zero total wins.
        let raw = StatBreakdown { mvp_first: 40, ..Default::default() };
        let row = row_with(raw, 0, 0, 0);

        let result = attribute(&row, PointCategory::Mvp);
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.components[0].label, "No MVP Awards");
        assert_eq!(result.component_sum(), 0);
        assert_eq!(result.component_sum(), result.total);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("stat".parse::<PointCategory>().unwrap(), PointCategory::Stat);
        assert_eq!("WIN".parse::<PointCategory>().unwrap(), PointCategory::Win);
        assert_eq!("Mvp".parse::<PointCategory>().unwrap(), PointCategory::Mvp);
        assert!("goals".parse::<PointCategory>().is_err());
    }
}
