use crate::dataset::{AppearanceRecord, PitchShot, ShotRecord};

/// The only situation the open-play views consider. Set pieces, corners and
/// penalties are excluded by exact match.
pub const OPEN_PLAY: &str = "OpenPlay";

/// Shots from one season, all situations. Feeds the assist-relationship
/// tables, which rank over set pieces too.
pub fn season_shots<'a>(shots: &'a [ShotRecord], season: u16) -> Vec<&'a ShotRecord> {
    shots.iter().filter(|shot| shot.season == season).collect()
}

/// Open-play shots from one season.
pub fn open_play_shots<'a>(shots: &'a [ShotRecord], season: u16) -> Vec<&'a ShotRecord> {
    shots
        .iter()
        .filter(|shot| shot.season == season && shot.situation == OPEN_PLAY)
        .collect()
}

/// One player's open-play shots for a season, rescaled to pitch units.
pub fn player_open_play_shots(shots: &[ShotRecord], season: u16, player: &str) -> Vec<PitchShot> {
    shots
        .iter()
        .filter(|shot| {
            shot.season == season && shot.situation == OPEN_PLAY && shot.shooter_name == player
        })
        .map(PitchShot::from_record)
        .collect()
}

/// Appearance rows belonging to either selected player (union), across all
/// seasons. Drives the multi-season trend series.
pub fn pair_appearances<'a>(
    appearances: &'a [AppearanceRecord],
    player_a: &str,
    player_b: &str,
) -> Vec<&'a AppearanceRecord> {
    appearances
        .iter()
        .filter(|app| app.player_name == player_a || app.player_name == player_b)
        .collect()
}

/// One player's appearance rows for a single season.
pub fn player_season_appearances<'a>(
    appearances: &'a [AppearanceRecord],
    player: &str,
    season: u16,
) -> Vec<&'a AppearanceRecord> {
    appearances
        .iter()
        .filter(|app| app.player_name == player && app.season == season)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{open_play_shots, pair_appearances, player_open_play_shots};
    use crate::dataset::{AppearanceRecord, ShotRecord, ShotResult};

    fn shot(season: u16, shooter: &str, situation: &str) -> ShotRecord {
        ShotRecord {
            season,
            shooter_name: shooter.to_string(),
            assister_name: None,
            situation: situation.to_string(),
            shot_type: "RightFoot".to_string(),
            shot_result: ShotResult::SavedShot,
            position_x: 0.9,
            position_y: 0.5,
            x_goal: 0.1,
        }
    }

    fn appearance(player: &str, season: u16) -> AppearanceRecord {
        AppearanceRecord {
            player_name: player.to_string(),
            season,
            time: 90,
            goals: 0,
            shots: 1,
            key_passes: 0,
            assists: 0,
            x_goals: 0.1,
            x_assists: 0.0,
            x_goals_chain: 0.2,
            x_goals_buildup: 0.1,
            home_team: "Test FC".to_string(),
        }
    }

    #[test]
    fn open_play_filter_is_exact() {
        let shots = vec![
            shot(2020, "A", "OpenPlay"),
            shot(2020, "A", "SetPiece"),
            shot(2020, "A", "FromCorner"),
            shot(2019, "A", "OpenPlay"),
        ];
        let subset = open_play_shots(&shots, 2020);
        assert_eq!(subset.len(), 1);
        assert!(subset.iter().all(|s| s.situation == "OpenPlay" && s.season == 2020));
    }

    #[test]
    fn player_shots_are_rescaled() {
        let shots = vec![shot(2020, "A", "OpenPlay")];
        let pitch = player_open_play_shots(&shots, 2020, "A");
        assert_eq!(pitch.len(), 1);
        assert_eq!(pitch[0].x, 94.5);
        assert_eq!(pitch[0].y, 34.0);
    }

    #[test]
    fn pair_filter_is_a_union() {
        let apps = vec![
            appearance("A", 2019),
            appearance("B", 2020),
            appearance("C", 2020),
        ];
        let subset = pair_appearances(&apps, "A", "B");
        assert_eq!(subset.len(), 2);
    }

    #[test]
    fn unmatched_season_yields_empty_set() {
        let shots = vec![shot(2020, "A", "OpenPlay")];
        assert!(open_play_shots(&shots, 1999).is_empty());
        assert!(player_open_play_shots(&shots, 1999, "A").is_empty());
    }
}
