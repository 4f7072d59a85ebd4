use xg_compare::assist_rankings::{RANKING_LIMIT, top_assisters_to};
use xg_compare::dataset::{ShotRecord, ShotResult};

fn shot(shooter: &str, assister: &str, result: ShotResult, x_goal: f64) -> ShotRecord {
    ShotRecord {
        season: 2020,
        shooter_name: shooter.to_string(),
        assister_name: Some(assister.to_string()),
        situation: "OpenPlay".to_string(),
        shot_type: "RightFoot".to_string(),
        shot_result: result,
        position_x: 0.9,
        position_y: 0.5,
        x_goal,
    }
}

#[test]
fn ties_break_deterministically_by_name() {
    let shots = vec![
        shot("Target", "B", ShotResult::SavedShot, 0.8),
        shot("Target", "C", ShotResult::SavedShot, 0.5),
        shot("Target", "A", ShotResult::SavedShot, 0.8),
    ];
    let refs: Vec<&ShotRecord> = shots.iter().collect();

    for _ in 0..20 {
        let rows = top_assisters_to(&refs, "Target");
        let names: Vec<&str> = rows.iter().map(|line| line.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}

#[test]
fn ranking_is_truncated_to_ten_rows() {
    let mut shots = Vec::new();
    for idx in 0..15 {
        shots.push(shot(
            "Target",
            &format!("Assister {idx:02}"),
            ShotResult::SavedShot,
            0.1 + idx as f64 * 0.05,
        ));
    }
    let refs: Vec<&ShotRecord> = shots.iter().collect();
    let rows = top_assisters_to(&refs, "Target");

    assert_eq!(rows.len(), RANKING_LIMIT);
    for pair in rows.windows(2) {
        assert!(pair[0].x_value >= pair[1].x_value);
    }
    // The five smallest sums fell off the end.
    assert!(rows.iter().all(|line| line.x_value > 0.3));
}

#[test]
fn shots_without_an_assister_are_dropped() {
    let mut unassisted = shot("Target", "ignored", ShotResult::Goal, 0.9);
    unassisted.assister_name = None;
    let shots = vec![unassisted, shot("Target", "Creator", ShotResult::Goal, 0.4)];
    let refs: Vec<&ShotRecord> = shots.iter().collect();
    let rows = top_assisters_to(&refs, "Target");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Creator");
}
