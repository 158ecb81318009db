//! Ranking pass and the top-level leaderboard build.

use crate::derive::STEADY_SENTINEL;
use crate::error::{EngineError, Result};
use crate::index::FeedIndex;
use crate::row::{build_rows, LeaderboardRow};
use feed_client::FeedSet;
use tracing::debug;

/// Sort rows by total points descending and assign dense 1-based ranks.
///
/// The sort is stable so exact ties keep their feed order and the output is
/// deterministic across runs; tied totals get consecutive distinct ranks
/// rather than sharing one. `delta` is the point gap to the next-higher
/// rank, rendered "+{n}" for a positive gap and the steady sentinel for the
/// top row or a zero gap.
pub fn rank_rows(mut rows: Vec<LeaderboardRow>) -> Vec<LeaderboardRow> {
    rows.sort_by(|a, b| b.total_pts.cmp(&a.total_pts));

    let mut previous_total = 0;
    for (index, row) in rows.iter_mut().enumerate() {
        row.rank = (index + 1) as u32;
        row.delta = if index == 0 {
            STEADY_SENTINEL.to_string()
        } else {
            let gap = previous_total - row.total_pts;
            if gap > 0 {
                format!("+{gap}")
            } else {
                STEADY_SENTINEL.to_string()
            }
        };
        previous_total = row.total_pts;
    }

    rows
}

/// Build the full ranked leaderboard from a feed snapshot.
///
/// Fails with [`EngineError::NoData`] when the mandatory points feed is
/// empty; auxiliary feeds may be empty without error.
pub fn build_leaderboard(feeds: &FeedSet) -> Result<Vec<LeaderboardRow>> {
    if feeds.points.is_empty() {
        return Err(EngineError::NoData);
    }

    let index = FeedIndex::build(feeds);
    let rows = rank_rows(build_rows(feeds, &index));

    debug!("Built leaderboard with {} ranked rows", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_client::PointsRecord;

    fn feeds_with_totals(totals: &[(&str, i64)]) -> FeedSet {
        let mut feeds = FeedSet::empty();
        for (athlete, total) in totals {
            feeds.points.push(PointsRecord {
                athlete: athlete.to_string(),
                total_points: *total,
                ..Default::default()
            });
        }
        feeds
    }

    #[test]
    fn ranks_are_contiguous_and_totals_descend() {
        let feeds = feeds_with_totals(&[("A", 100), ("B", 150), ("C", 120), ("D", 90)]);
        let rows = build_leaderboard(&feeds).unwrap();

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.rank, (i + 1) as u32);
        }
        for pair in rows.windows(2) {
            assert!(pair[0].total_pts >= pair[1].total_pts);
        }
    }

    #[test]
    fn delta_is_gap_to_next_higher_rank() {
        let feeds = feeds_with_totals(&[("A", 100), ("B", 150)]);
        let rows = build_leaderboard(&feeds).unwrap();

        assert_eq!(rows[0].athlete, "B");
        assert_eq!(rows[0].delta, "–");
        assert_eq!(rows[1].athlete, "A");
        assert_eq!(rows[1].delta, "+50");

        let parsed: i64 = rows[1].delta.trim_start_matches('+').parse().unwrap();
        assert_eq!(parsed, rows[0].total_pts - rows[1].total_pts);
    }

    #[test]
    fn exact_ties_keep_feed_order_with_distinct_ranks() {
        let feeds = feeds_with_totals(&[("First", 100), ("Second", 100), ("Third", 100)]);
        let rows = build_leaderboard(&feeds).unwrap();

        assert_eq!(rows[0].athlete, "First");
        assert_eq!(rows[1].athlete, "Second");
        assert_eq!(rows[2].athlete, "Third");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[2].rank, 3);
        // A zero gap renders as the steady sentinel, not "+0"
        assert_eq!(rows[1].delta, "–");
        assert_eq!(rows[2].delta, "–");
    }

    #[test]
    fn empty_points_feed_is_no_data() {
        let feeds = FeedSet::empty();
        assert!(matches!(build_leaderboard(&feeds), Err(EngineError::NoData)));
    }

    #[test]
    fn empty_row_set_from_rank_pass_is_fine() {
        assert!(rank_rows(Vec::new()).is_empty());
    }
}
