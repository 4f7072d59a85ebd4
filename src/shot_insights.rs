use std::collections::BTreeMap;

use crate::dataset::{PitchShot, ShotResult};

/// Count of open-play shots per outcome. Outcomes a player never produced
/// are absent from the map, not present as zero.
pub fn outcome_counts(shots: &[PitchShot]) -> BTreeMap<ShotResult, usize> {
    let mut counts = BTreeMap::new();
    for shot in shots {
        *counts.entry(shot.result).or_insert(0) += 1;
    }
    counts
}

/// Count of open-play goals per body part (shot type). Only shots that
/// resulted in a goal are considered.
pub fn goal_body_part_counts(shots: &[PitchShot]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for shot in shots.iter().filter(|shot| shot.result == ShotResult::Goal) {
        *counts.entry(shot.body_part.clone()).or_insert(0) += 1;
    }
    counts
}

/// The mutually-exclusive shot-map filter: all outcomes, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultFilter {
    All,
    Only(ShotResult),
}

impl ResultFilter {
    pub fn parse(raw: &str) -> Option<ResultFilter> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Some(ResultFilter::All);
        }
        ShotResult::from_label(raw).map(ResultFilter::Only)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultFilter::All => "All",
            ResultFilter::Only(result) => result.label(),
        }
    }

    pub fn matches(&self, shot: &PitchShot) -> bool {
        match self {
            ResultFilter::All => true,
            ResultFilter::Only(result) => shot.result == *result,
        }
    }
}

/// Shot-map tuples restricted to one outcome category (or all of them).
pub fn filtered<'a>(shots: &'a [PitchShot], filter: ResultFilter) -> Vec<&'a PitchShot> {
    shots.iter().filter(|shot| filter.matches(shot)).collect()
}

#[cfg(test)]
mod tests {
    use super::{ResultFilter, filtered, goal_body_part_counts, outcome_counts};
    use crate::dataset::{PitchShot, ShotResult};

    fn shot(result: ShotResult, body_part: &str) -> PitchShot {
        PitchShot {
            x: 94.5,
            y: 34.0,
            x_goal: 0.2,
            result,
            body_part: body_part.to_string(),
        }
    }

    #[test]
    fn zero_categories_are_absent() {
        let shots = vec![
            shot(ShotResult::Goal, "RightFoot"),
            shot(ShotResult::Goal, "Head"),
            shot(ShotResult::SavedShot, "RightFoot"),
        ];
        let outcomes = outcome_counts(&shots);
        assert_eq!(outcomes.get(&ShotResult::Goal), Some(&2));
        assert_eq!(outcomes.get(&ShotResult::SavedShot), Some(&1));
        assert!(!outcomes.contains_key(&ShotResult::BlockedShot));
    }

    #[test]
    fn body_parts_only_count_goals() {
        let shots = vec![
            shot(ShotResult::Goal, "LeftFoot"),
            shot(ShotResult::MissedShots, "LeftFoot"),
            shot(ShotResult::Goal, "Head"),
        ];
        let parts = goal_body_part_counts(&shots);
        assert_eq!(parts.get("LeftFoot"), Some(&1));
        assert_eq!(parts.get("Head"), Some(&1));
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn filter_is_mutually_exclusive() {
        let shots = vec![
            shot(ShotResult::Goal, "RightFoot"),
            shot(ShotResult::BlockedShot, "RightFoot"),
        ];
        assert_eq!(filtered(&shots, ResultFilter::All).len(), 2);
        let goals = filtered(&shots, ResultFilter::Only(ShotResult::Goal));
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].result, ShotResult::Goal);
    }

    #[test]
    fn filter_parsing_covers_the_radio_options() {
        assert_eq!(ResultFilter::parse("All"), Some(ResultFilter::All));
        assert_eq!(
            ResultFilter::parse("MissedShots"),
            Some(ResultFilter::Only(ShotResult::MissedShots))
        );
        assert_eq!(ResultFilter::parse("OwnGoal"), None);
    }
}
