use std::collections::HashMap;

use crate::dataset::{AppearanceRecord, round2};

/// One (player, season) group of summed appearance stats. Backs every
/// season-trend line series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTotals {
    pub player: String,
    pub season: u16,
    pub goals: u32,
    pub shots: u32,
    pub assists: u32,
    pub key_passes: u32,
    pub x_goals: f64,
    pub nineties: f64,
    pub matches: usize,
}

impl SeasonTotals {
    /// Expected goals per 90 for this season, `None` when no minutes were
    /// recorded so a non-finite value never reaches a plot.
    pub fn xg_per90(&self) -> Option<f64> {
        if self.nineties > 0.0 {
            Some(round2(self.x_goals / self.nineties))
        } else {
            None
        }
    }

    /// Goals over expected goals (finishing ratio), `None` when xG is zero.
    pub fn goals_per_xg(&self) -> Option<f64> {
        if self.x_goals > 0.0 {
            Some(round2(self.goals as f64 / self.x_goals))
        } else {
            None
        }
    }
}

#[derive(Default)]
struct Totals {
    goals: u32,
    shots: u32,
    assists: u32,
    key_passes: u32,
    x_goals: f64,
    minutes: u32,
    matches: usize,
}

/// Group appearance rows by (player, season) and sum. Output is ordered by
/// player name, then season ascending, so each player's rows form a ready
/// line series. An empty input produces zero groups.
pub fn season_totals(appearances: &[&AppearanceRecord]) -> Vec<SeasonTotals> {
    let mut groups: HashMap<(String, u16), Totals> = HashMap::new();
    for app in appearances {
        let totals = groups
            .entry((app.player_name.clone(), app.season))
            .or_default();
        totals.goals += app.goals;
        totals.shots += app.shots;
        totals.assists += app.assists;
        totals.key_passes += app.key_passes;
        totals.x_goals += app.x_goals;
        totals.minutes += app.time;
        totals.matches += 1;
    }

    let mut rows: Vec<SeasonTotals> = groups
        .into_iter()
        .map(|((player, season), totals)| SeasonTotals {
            player,
            season,
            goals: totals.goals,
            shots: totals.shots,
            assists: totals.assists,
            key_passes: totals.key_passes,
            x_goals: totals.x_goals,
            nineties: totals.minutes as f64 / 90.0,
            matches: totals.matches,
        })
        .collect();
    rows.sort_by(|a, b| a.player.cmp(&b.player).then(a.season.cmp(&b.season)));
    rows
}

/// One player's rows out of a sorted totals table, season ascending.
pub fn player_series<'a>(rows: &'a [SeasonTotals], player: &str) -> Vec<&'a SeasonTotals> {
    rows.iter().filter(|row| row.player == player).collect()
}
