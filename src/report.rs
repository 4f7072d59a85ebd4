use std::collections::BTreeMap;

use crate::assist_rankings::{self, AssistLine};
use crate::dataset::{Dataset, PitchShot, ShotResult};
use crate::filters;
use crate::per90::{self, Per90Rates};
use crate::shot_insights;
use crate::trends::{self, SeasonTotals};

/// The user's choice for one comparison. Passed explicitly into every
/// filter and aggregate call; there is no ambient selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub player_a: String,
    pub player_b: String,
    pub season: u16,
}

/// Everything the presentation layer needs for one player in the selected
/// season. Empty collections mean the filters matched nothing; `per90` is
/// `None` when the player has no recorded minutes.
#[derive(Debug, Clone)]
pub struct PlayerSection {
    pub name: String,
    pub general_info: Option<[String; 5]>,
    pub per90: Option<Per90Rates>,
    pub outcomes: BTreeMap<ShotResult, usize>,
    pub goal_body_parts: BTreeMap<String, usize>,
    pub shot_map: Vec<PitchShot>,
    pub assisters: Vec<AssistLine>,
    pub assisted: Vec<AssistLine>,
}

/// One comparison request's full derived output.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub selection: Selection,
    pub trends: Vec<SeasonTotals>,
    pub player_a: PlayerSection,
    pub player_b: PlayerSection,
}

/// Run the filter and aggregate stages for both selected players. Unknown
/// players and empty seasons produce empty sections, never errors.
pub fn build_comparison(data: &Dataset, selection: &Selection) -> ComparisonReport {
    let pair_apps =
        filters::pair_appearances(&data.appearances, &selection.player_a, &selection.player_b);
    ComparisonReport {
        selection: selection.clone(),
        trends: trends::season_totals(&pair_apps),
        player_a: build_player_section(data, selection, &selection.player_a),
        player_b: build_player_section(data, selection, &selection.player_b),
    }
}

fn build_player_section(data: &Dataset, selection: &Selection, player: &str) -> PlayerSection {
    let season_shots = filters::season_shots(&data.shots, selection.season);
    let pitch_shots = filters::player_open_play_shots(&data.shots, selection.season, player);
    let season_apps =
        filters::player_season_appearances(&data.appearances, player, selection.season);

    // Zero appearance rows means there is nothing to normalize; only call
    // the rate calculator when a denominator can exist.
    let per90 = if season_apps.is_empty() {
        None
    } else {
        match per90::per90_rates(&season_apps, player, selection.season) {
            Ok(rates) => Some(rates),
            Err(err) => {
                tracing::warn!(player, season = selection.season, %err, "per-90 snapshot unavailable");
                None
            }
        }
    };

    PlayerSection {
        name: player.to_string(),
        general_info: data.player(player).map(|record| record.general_info()),
        per90,
        outcomes: shot_insights::outcome_counts(&pitch_shots),
        goal_body_parts: shot_insights::goal_body_part_counts(&pitch_shots),
        assisters: assist_rankings::top_assisters_to(&season_shots, player),
        assisted: assist_rankings::top_assisted_by(&season_shots, player),
        shot_map: pitch_shots,
    }
}
