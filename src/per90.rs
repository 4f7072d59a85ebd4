use thiserror::Error;

use crate::dataset::{AppearanceRecord, round2};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateError {
    /// Zero recorded minutes in the selected season. Callers surface this
    /// as "no data" rather than letting a non-finite rate through.
    #[error("no recorded minutes for {player} in season {season}")]
    InsufficientMinutes { player: String, season: u16 },
}

/// Single-season snapshot of per-90-minute rates, all rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Per90Rates {
    pub nineties: f64,
    pub goals90: f64,
    pub shots90: f64,
    pub xg90: f64,
    pub xchain90: f64,
    pub xassist90: f64,
    pub xbuildup90: f64,
}

impl Per90Rates {
    /// The five radar metrics, in [`RADAR_AXES`] order.
    pub fn radar_values(&self) -> [f64; 5] {
        [
            self.goals90,
            self.shots90,
            self.xg90,
            self.xchain90,
            self.xassist90,
        ]
    }
}

/// Fixed display floor/ceiling per radar metric. Axis scaling only; computed
/// values are never clamped to these.
#[derive(Debug, Clone, Copy)]
pub struct RadarAxis {
    pub label: &'static str,
    pub floor: f64,
    pub ceiling: f64,
}

pub const RADAR_AXES: [RadarAxis; 5] = [
    RadarAxis { label: "Goals90", floor: 0.0, ceiling: 1.5 },
    RadarAxis { label: "Shots90", floor: 0.0, ceiling: 8.0 },
    RadarAxis { label: "xG90", floor: 0.0, ceiling: 1.2 },
    RadarAxis { label: "xC90", floor: 0.0, ceiling: 1.5 },
    RadarAxis { label: "xA90", floor: 0.0, ceiling: 0.5 },
];

/// Compute the per-90 snapshot from one player's single-season appearance
/// subset. The denominator is the 2-decimal-rounded nineties value, matching
/// the tables this feeds.
pub fn per90_rates(
    appearances: &[&AppearanceRecord],
    player: &str,
    season: u16,
) -> Result<Per90Rates, RateError> {
    let minutes: u32 = appearances.iter().map(|app| app.time).sum();
    if minutes == 0 {
        return Err(RateError::InsufficientMinutes {
            player: player.to_string(),
            season,
        });
    }

    let nineties = round2(minutes as f64 / 90.0);
    let goals: u32 = appearances.iter().map(|app| app.goals).sum();
    let shots: u32 = appearances.iter().map(|app| app.shots).sum();
    let x_goals: f64 = appearances.iter().map(|app| app.x_goals).sum();
    let x_chain: f64 = appearances.iter().map(|app| app.x_goals_chain).sum();
    let x_assists: f64 = appearances.iter().map(|app| app.x_assists).sum();
    let x_buildup: f64 = appearances.iter().map(|app| app.x_goals_buildup).sum();

    Ok(Per90Rates {
        nineties,
        goals90: round2(goals as f64 / nineties),
        shots90: round2(shots as f64 / nineties),
        xg90: round2(x_goals / nineties),
        xchain90: round2(x_chain / nineties),
        xassist90: round2(x_assists / nineties),
        xbuildup90: round2(x_buildup / nineties),
    })
}
