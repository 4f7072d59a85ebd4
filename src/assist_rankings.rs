use std::cmp::Ordering;
use std::collections::HashMap;

use crate::dataset::{ShotRecord, ShotResult};

pub const RANKING_LIMIT: usize = 10;

/// One row of an assist-relationship table: shot count ("key passes"),
/// goal count ("assists") and the summed shot xG.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistLine {
    pub name: String,
    pub key_passes: usize,
    pub assists: usize,
    pub x_value: f64,
}

/// Who created chances for `player`: shots where `player` was the shooter,
/// grouped by assister. Shots with no recorded assister are dropped.
/// Descending by summed xG, ties broken by ascending name, top 10.
pub fn top_assisters_to(shots: &[&ShotRecord], player: &str) -> Vec<AssistLine> {
    let mut groups: HashMap<&str, AssistLine> = HashMap::new();
    for shot in shots.iter().filter(|shot| shot.shooter_name == player) {
        let Some(assister) = shot.assister_name.as_deref() else {
            continue;
        };
        accumulate(&mut groups, assister, shot);
    }
    rank(groups)
}

/// The symmetric query: shots where `player` was the assister, grouped by
/// shooter. The summed value is labelled xAssist by consumers.
pub fn top_assisted_by(shots: &[&ShotRecord], player: &str) -> Vec<AssistLine> {
    let mut groups: HashMap<&str, AssistLine> = HashMap::new();
    for shot in shots {
        if shot.assister_name.as_deref() != Some(player) {
            continue;
        }
        accumulate(&mut groups, &shot.shooter_name, shot);
    }
    rank(groups)
}

fn accumulate<'a>(groups: &mut HashMap<&'a str, AssistLine>, name: &'a str, shot: &ShotRecord) {
    let line = groups.entry(name).or_insert_with(|| AssistLine {
        name: name.to_string(),
        key_passes: 0,
        assists: 0,
        x_value: 0.0,
    });
    line.key_passes += 1;
    if shot.shot_result == ShotResult::Goal {
        line.assists += 1;
    }
    line.x_value += shot.x_goal;
}

fn rank(groups: HashMap<&str, AssistLine>) -> Vec<AssistLine> {
    let mut rows: Vec<AssistLine> = groups.into_values().collect();
    rows.sort_by(|a, b| {
        b.x_value
            .partial_cmp(&a.x_value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    rows.truncate(RANKING_LIMIT);
    rows
}
