use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use xg_compare::assist_rankings::top_assisters_to;
use xg_compare::dataset::{AppearanceRecord, ShotRecord, ShotResult};
use xg_compare::filters::player_open_play_shots;
use xg_compare::per90::per90_rates;
use xg_compare::trends::season_totals;

fn synthetic_appearances(players: usize, seasons: usize, matches: usize) -> Vec<AppearanceRecord> {
    let mut rows = Vec::with_capacity(players * seasons * matches);
    for player in 0..players {
        for season in 0..seasons {
            for game in 0..matches {
                rows.push(AppearanceRecord {
                    player_name: format!("Player {player:03}"),
                    season: 2016 + season as u16,
                    time: 60 + ((player + game) % 31) as u32,
                    goals: ((player + game) % 3) as u32,
                    shots: ((player + game) % 6) as u32,
                    key_passes: (game % 4) as u32,
                    assists: (game % 2) as u32,
                    x_goals: 0.1 * ((player + game) % 9) as f64,
                    x_assists: 0.05 * (game % 5) as f64,
                    x_goals_chain: 0.12 * ((player + game) % 7) as f64,
                    x_goals_buildup: 0.07 * (game % 6) as f64,
                    home_team: "Bench FC".to_string(),
                });
            }
        }
    }
    rows
}

fn synthetic_shots(count: usize) -> Vec<ShotRecord> {
    let results = ShotResult::ALL;
    let situations = ["OpenPlay", "FromCorner", "SetPiece", "DirectFreekick"];
    (0..count)
        .map(|idx| ShotRecord {
            season: 2016 + (idx % 5) as u16,
            shooter_name: format!("Player {:03}", idx % 40),
            assister_name: if idx % 7 == 0 {
                None
            } else {
                Some(format!("Player {:03}", (idx + 13) % 40))
            },
            situation: situations[idx % situations.len()].to_string(),
            shot_type: "RightFoot".to_string(),
            shot_result: results[idx % results.len()],
            position_x: 0.6 + 0.4 * ((idx % 10) as f64 / 10.0),
            position_y: (idx % 11) as f64 / 10.0,
            x_goal: 0.02 * (idx % 40) as f64,
        })
        .collect()
}

fn bench_season_totals(c: &mut Criterion) {
    let apps = synthetic_appearances(40, 5, 38);
    let refs: Vec<&AppearanceRecord> = apps.iter().collect();
    c.bench_function("season_totals", |b| {
        b.iter(|| {
            let rows = season_totals(black_box(&refs));
            black_box(rows.len());
        })
    });
}

fn bench_per90_rates(c: &mut Criterion) {
    let apps = synthetic_appearances(1, 1, 38);
    let refs: Vec<&AppearanceRecord> = apps.iter().collect();
    c.bench_function("per90_rates", |b| {
        b.iter(|| {
            let rates = per90_rates(black_box(&refs), "Player 000", 2016).unwrap();
            black_box(rates.goals90);
        })
    });
}

fn bench_assist_ranking(c: &mut Criterion) {
    let shots = synthetic_shots(20_000);
    let refs: Vec<&ShotRecord> = shots.iter().collect();
    c.bench_function("assist_ranking", |b| {
        b.iter(|| {
            let rows = top_assisters_to(black_box(&refs), "Player 007");
            black_box(rows.len());
        })
    });
}

fn bench_open_play_filter(c: &mut Criterion) {
    let shots = synthetic_shots(20_000);
    c.bench_function("open_play_filter", |b| {
        b.iter(|| {
            let pitch = player_open_play_shots(black_box(&shots), 2018, "Player 010");
            black_box(pitch.len());
        })
    });
}

criterion_group!(
    perf,
    bench_season_totals,
    bench_per90_rates,
    bench_assist_ranking,
    bench_open_play_filter
);
criterion_main!(perf);
