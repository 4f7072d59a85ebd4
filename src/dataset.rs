use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Physical pitch dimensions the normalized shot coordinates are scaled to.
pub const PITCH_LENGTH: f64 = 105.0;
pub const PITCH_WIDTH: f64 = 68.0;

pub const PLAYERS_FILE: &str = "filtered_players.csv";
pub const SHOTS_FILE: &str = "shots_modified.csv";
pub const APPEARANCES_FILE: &str = "appearances_modified.csv";

/// The players table is position-sensitive: the five general-info fields
/// must sit at columns 2..=6 (the comparison table slices them by index).
const PLAYER_COLUMNS: [&str; 7] = [
    "Player ID",
    "Player Name",
    "Age",
    "Nationality",
    "Position",
    "Preferred Foot",
    "Current Club",
];

const SHOT_COLUMNS: [&str; 9] = [
    "season",
    "shooterName",
    "assisterName",
    "situation",
    "shotType",
    "shotResult",
    "positionX",
    "positionY",
    "xGoal",
];

const APPEARANCE_COLUMNS: [&str; 12] = [
    "PlayerName",
    "season",
    "time",
    "goals",
    "shots",
    "keyPasses",
    "assists",
    "xGoals",
    "xAssists",
    "xGoalsChain",
    "xGoalsBuildup",
    "HomeTeam",
];

pub const GENERAL_INFO_LABELS: [&str; 5] = [
    "Age",
    "Nationality",
    "Position",
    "Preferred Foot",
    "Current Club",
];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("{path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path}: missing required column {column:?}")]
    MissingColumn { path: String, column: String },

    #[error("{path}: column {column:?} must be at position {expected}")]
    MisplacedColumn {
        path: String,
        column: String,
        expected: usize,
    },
}

/// One row per athlete. The non-name fields are opaque display strings.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Player ID")]
    pub id: u32,
    #[serde(rename = "Player Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Preferred Foot")]
    pub preferred_foot: String,
    #[serde(rename = "Current Club")]
    pub club: String,
}

impl PlayerRecord {
    /// The five general-info fields, in table order (columns 2..=6).
    pub fn general_info(&self) -> [String; 5] {
        [
            self.age.clone(),
            self.nationality.clone(),
            self.position.clone(),
            self.preferred_foot.clone(),
            self.club.clone(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum ShotResult {
    BlockedShot,
    Goal,
    MissedShots,
    SavedShot,
    ShotOnPost,
}

impl ShotResult {
    pub const ALL: [ShotResult; 5] = [
        ShotResult::BlockedShot,
        ShotResult::Goal,
        ShotResult::MissedShots,
        ShotResult::SavedShot,
        ShotResult::ShotOnPost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShotResult::BlockedShot => "BlockedShot",
            ShotResult::Goal => "Goal",
            ShotResult::MissedShots => "MissedShots",
            ShotResult::SavedShot => "SavedShot",
            ShotResult::ShotOnPost => "ShotOnPost",
        }
    }

    pub fn from_label(raw: &str) -> Option<ShotResult> {
        ShotResult::ALL
            .into_iter()
            .find(|result| result.label().eq_ignore_ascii_case(raw.trim()))
    }
}

/// One row per shot event. Coordinates are normalized to [0,1] as loaded;
/// converting to pitch units happens once, via [`PitchShot::from_record`].
#[derive(Debug, Clone, Deserialize)]
pub struct ShotRecord {
    pub season: u16,
    #[serde(rename = "shooterName")]
    pub shooter_name: String,
    #[serde(rename = "assisterName")]
    pub assister_name: Option<String>,
    pub situation: String,
    #[serde(rename = "shotType")]
    pub shot_type: String,
    #[serde(rename = "shotResult")]
    pub shot_result: ShotResult,
    #[serde(rename = "positionX")]
    pub position_x: f64,
    #[serde(rename = "positionY")]
    pub position_y: f64,
    #[serde(rename = "xGoal")]
    pub x_goal: f64,
}

/// A shot in pitch units (x in [0,105], y in [0,68]), ready for spatial
/// rendering. The rescale is applied exactly once, here.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchShot {
    pub x: f64,
    pub y: f64,
    pub x_goal: f64,
    pub result: ShotResult,
    pub body_part: String,
}

impl PitchShot {
    pub fn from_record(record: &ShotRecord) -> PitchShot {
        PitchShot {
            x: round2(record.position_x * PITCH_LENGTH),
            y: round2(record.position_y * PITCH_WIDTH),
            x_goal: record.x_goal,
            result: record.shot_result,
            body_part: record.shot_type.clone(),
        }
    }
}

/// One row per player per match.
#[derive(Debug, Clone, Deserialize)]
pub struct AppearanceRecord {
    #[serde(rename = "PlayerName")]
    pub player_name: String,
    pub season: u16,
    pub time: u32,
    pub goals: u32,
    pub shots: u32,
    #[serde(rename = "keyPasses")]
    pub key_passes: u32,
    pub assists: u32,
    #[serde(rename = "xGoals")]
    pub x_goals: f64,
    #[serde(rename = "xAssists")]
    pub x_assists: f64,
    #[serde(rename = "xGoalsChain")]
    pub x_goals_chain: f64,
    #[serde(rename = "xGoalsBuildup")]
    pub x_goals_buildup: f64,
    #[serde(rename = "HomeTeam")]
    pub home_team: String,
}

/// The three base tables, loaded once and never mutated. Every comparison
/// re-filters from here.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub players: Vec<PlayerRecord>,
    pub shots: Vec<ShotRecord>,
    pub appearances: Vec<AppearanceRecord>,
}

impl Dataset {
    pub fn load_from_dir(dir: &Path) -> Result<Dataset, DatasetError> {
        let players = load_players(&dir.join(PLAYERS_FILE))?;
        let shots = load_shots(&dir.join(SHOTS_FILE))?;
        let appearances = load_appearances(&dir.join(APPEARANCES_FILE))?;
        tracing::info!(
            players = players.len(),
            shots = shots.len(),
            appearances = appearances.len(),
            "datasets loaded"
        );
        Ok(Dataset {
            players,
            shots,
            appearances,
        })
    }

    pub fn player(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|player| player.name == name)
    }

    pub fn player_names(&self) -> Vec<&str> {
        self.players.iter().map(|player| player.name.as_str()).collect()
    }

    /// Distinct seasons across shots and appearances, ascending.
    pub fn seasons(&self) -> Vec<u16> {
        let mut seasons: BTreeSet<u16> = self.shots.iter().map(|shot| shot.season).collect();
        seasons.extend(self.appearances.iter().map(|app| app.season));
        seasons.into_iter().collect()
    }
}

pub fn load_players(path: &Path) -> Result<Vec<PlayerRecord>, DatasetError> {
    read_table(path, &PLAYER_COLUMNS, true)
}

pub fn load_shots(path: &Path) -> Result<Vec<ShotRecord>, DatasetError> {
    read_table(path, &SHOT_COLUMNS, false)
}

pub fn load_appearances(path: &Path) -> Result<Vec<AppearanceRecord>, DatasetError> {
    read_table(path, &APPEARANCE_COLUMNS, false)
}

fn read_table<T: serde::de::DeserializeOwned>(
    path: &Path,
    required: &[&str],
    positional: bool,
) -> Result<Vec<T>, DatasetError> {
    let display = path_label(path);
    let mut reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Csv {
        path: display.clone(),
        source,
    })?;
    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Csv {
            path: display.clone(),
            source,
        })?
        .clone();

    for (index, column) in required.iter().enumerate() {
        let Some(found) = headers.iter().position(|header| header == *column) else {
            return Err(DatasetError::MissingColumn {
                path: display,
                column: (*column).to_string(),
            });
        };
        if positional && found != index {
            return Err(DatasetError::MisplacedColumn {
                path: display,
                column: (*column).to_string(),
                expected: index,
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record.map_err(|source| DatasetError::Csv {
            path: display.clone(),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

fn path_label(path: &Path) -> String {
    path.display().to_string()
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
