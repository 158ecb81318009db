//! Derived metrics computed per athlete from the raw feed records.

use feed_client::{HittingRecord, PitchingRecord};
use serde_json::Value;

/// Display sentinel for "no change" / "no data" states.
pub const STEADY_SENTINEL: &str = "–";

/// Games played across both roles.
///
/// A two-way athlete appears in both the hitting and pitching feeds with a
/// games figure in each; taking the max avoids double-counting appearances.
pub fn games_played(hitting: Option<&HittingRecord>, pitching: Option<&PitchingRecord>) -> i64 {
    let hitting_games = hitting.map(|h| h.games).unwrap_or(0);
    let pitching_games = pitching.map(|p| p.games).unwrap_or(0);
    hitting_games.max(pitching_games).max(0)
}

/// Decode innings pitched into total outs recorded.
///
/// The pitching feed encodes IP as integer-part.fractional-outs: the integer
/// part is whole innings and the first fractional digit is outs within the
/// inning (0, 1 or 2). "6.2" means 6 innings and 2 outs = 20 outs. This is
/// not decimal arithmetic (multiplying the value by 3 would be wrong), so
/// the text form is split on '.' instead. Missing or unparsable values
/// decode to 0 outs.
pub fn innings_to_outs(innings_pitched: &Value) -> i64 {
    let text = match innings_pitched {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return 0,
    };

    let mut parts = text.splitn(2, '.');

    let whole: i64 = match parts.next().unwrap_or("").parse() {
        Ok(w) if w >= 0 => w,
        _ => return 0,
    };

    let outs_in_inning = parts
        .next()
        .and_then(|frac| frac.chars().next())
        .and_then(|c| c.to_digit(10))
        .unwrap_or(0) as i64;

    whole * 3 + outs_in_inning
}

/// Normalize a player-info rank change into its display form.
///
/// Upstream publishes this as a signed number, a numeric-looking string, or
/// a dash sentinel. Positive movement renders with an explicit '+' prefix,
/// negative movement keeps its sign, and zero/unrecognized values fall back
/// to the steady sentinel. Dash sentinels pass through unchanged.
pub fn format_rank_change(rank_change: &Value) -> String {
    match rank_change {
        Value::Number(n) => {
            let value = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0);
            format_signed(value)
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed == "–" || trimmed == "—" {
                return trimmed.to_string();
            }
            match trimmed.parse::<i64>() {
                Ok(value) => format_signed(value),
                Err(_) => STEADY_SENTINEL.to_string(),
            }
        }
        _ => STEADY_SENTINEL.to_string(),
    }
}

fn format_signed(value: i64) -> String {
    match value {
        v if v > 0 => format!("+{v}"),
        v if v < 0 => v.to_string(),
        _ => STEADY_SENTINEL.to_string(),
    }
}
