use feed_client::{FeedSet, HittingRecord, MvpRecord, PitchingRecord, PlayerInfoRecord, WinRecord};
use std::collections::HashMap;

/// Strip the single trailing period player-info names may carry
/// (e.g. "Kowalik, K." published against a points spelling of "Kowalik, K").
fn normalize_info_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Name-keyed lookup index over the five auxiliary feeds.
///
/// The athlete name string is the only join key the feeds share. The four
/// stat feeds are indexed on the exact spelling the points feed uses; the
/// player-info feed is indexed under the trailing-period-stripped form. If a
/// name appears twice within one feed the later record wins; the feeds are
/// taken as published, not corrected.
///
/// Lookups for an unmatched name return `None`, never an error; consumers
/// treat a miss as zero/default, not as a missing row.
pub struct FeedIndex<'a> {
    hitting: HashMap<&'a str, &'a HittingRecord>,
    pitching: HashMap<&'a str, &'a PitchingRecord>,
    mvp: HashMap<&'a str, &'a MvpRecord>,
    win: HashMap<&'a str, &'a WinRecord>,
    player_info: HashMap<&'a str, &'a PlayerInfoRecord>,
}

impl<'a> FeedIndex<'a> {
    /// Build the index from a feed snapshot
    pub fn build(feeds: &'a FeedSet) -> Self {
        let mut hitting = HashMap::with_capacity(feeds.hitting.len());
        for record in &feeds.hitting {
            hitting.insert(record.athlete.as_str(), record);
        }

        let mut pitching = HashMap::with_capacity(feeds.pitching.len());
        for record in &feeds.pitching {
            pitching.insert(record.athlete.as_str(), record);
        }

        let mut mvp = HashMap::with_capacity(feeds.mvp.len());
        for record in &feeds.mvp {
            mvp.insert(record.athlete.as_str(), record);
        }

        let mut win = HashMap::with_capacity(feeds.win.len());
        for record in &feeds.win {
            win.insert(record.athlete.as_str(), record);
        }

        let mut player_info = HashMap::with_capacity(feeds.player_info.len());
        for record in &feeds.player_info {
            player_info.insert(normalize_info_name(&record.athlete), record);
        }

        Self { hitting, pitching, mvp, win, player_info }
    }

    pub fn hitting(&self, athlete: &str) -> Option<&'a HittingRecord> {
        self.hitting.get(athlete).copied()
    }

    pub fn pitching(&self, athlete: &str) -> Option<&'a PitchingRecord> {
        self.pitching.get(athlete).copied()
    }

    pub fn mvp(&self, athlete: &str) -> Option<&'a MvpRecord> {
        self.mvp.get(athlete).copied()
    }

    pub fn win(&self, athlete: &str) -> Option<&'a WinRecord> {
        self.win.get(athlete).copied()
    }

    /// Player-info lookup, applying the same trailing-period normalization
    /// to the lookup key so either spelling resolves.
    pub fn player_info(&self, athlete: &str) -> Option<&'a PlayerInfoRecord> {
        self.player_info.get(normalize_info_name(athlete)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_client::FeedSet;

    fn feeds_with_info(names: &[&str]) -> FeedSet {
        let mut feeds = FeedSet::empty();
        for name in names {
            feeds.player_info.push(PlayerInfoRecord {
                athlete: name.to_string(),
                team: format!("Team {name}"),
                ..Default::default()
            });
        }
        feeds
    }

    #[test]
    fn info_name_with_trailing_period_resolves_for_bare_name() {
        let feeds = feeds_with_info(&["A."]);
        let index = FeedIndex::build(&feeds);

        let info = index.player_info("A").expect("normalized lookup should hit");
        assert_eq!(info.athlete, "A.");
    }

    #[test]
    fn lookup_key_with_trailing_period_also_resolves() {
        let feeds = feeds_with_info(&["Kowalik, K."]);
        let index = FeedIndex::build(&feeds);

        assert!(index.player_info("Kowalik, K.").is_some());
        assert!(index.player_info("Kowalik, K").is_some());
    }

    #[test]
    fn stat_feeds_match_exact_spelling_only() {
        let mut feeds = FeedSet::empty();
        feeds.hitting.push(HittingRecord { athlete: "A.".to_string(), ..Default::default() });
        let index = FeedIndex::build(&feeds);

        assert!(index.hitting("A.").is_some());
        assert!(index.hitting("A").is_none());
    }

    #[test]
    fn duplicate_names_last_write_wins() {
        let mut feeds = FeedSet::empty();
        feeds.win.push(WinRecord { athlete: "A".to_string(), games_won: 1, ..Default::default() });
        feeds.win.push(WinRecord { athlete: "A".to_string(), games_won: 7, ..Default::default() });
        let index = FeedIndex::build(&feeds);

        assert_eq!(index.win("A").unwrap().games_won, 7);
    }

    #[test]
    fn unmatched_name_returns_none() {
        let feeds = FeedSet::empty();
        let index = FeedIndex::build(&feeds);

        assert!(index.hitting("Nobody").is_none());
        assert!(index.pitching("Nobody").is_none());
        assert!(index.mvp("Nobody").is_none());
        assert!(index.win("Nobody").is_none());
        assert!(index.player_info("Nobody").is_none());
    }
}
