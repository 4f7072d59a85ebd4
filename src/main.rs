use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use xg_compare::dataset::{Dataset, GENERAL_INFO_LABELS};
use xg_compare::export;
use xg_compare::per90::RADAR_AXES;
use xg_compare::report::{ComparisonReport, PlayerSection, Selection, build_comparison};
use xg_compare::shot_insights::{self, ResultFilter};
use xg_compare::trends;
use xg_compare::wiki_image::{self, PlayerImage};

const DEFAULT_PLAYER_A: &str = "Harry Kane";
const DEFAULT_PLAYER_B: &str = "Mohamed Salah";
const DEFAULT_SEASON: u16 = 2020;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let data_dir = flag_value(&args, "--data-dir")
        .map(PathBuf::from)
        .or_else(|| std::env::var("XG_COMPARE_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"));
    let player_a =
        flag_value(&args, "--player1").unwrap_or_else(|| DEFAULT_PLAYER_A.to_string());
    let player_b =
        flag_value(&args, "--player2").unwrap_or_else(|| DEFAULT_PLAYER_B.to_string());
    let season = flag_value(&args, "--season")
        .map(|raw| raw.parse::<u16>())
        .transpose()
        .context("invalid --season value")?
        .unwrap_or(DEFAULT_SEASON);
    let shot_filter = match flag_value(&args, "--shot-filter") {
        Some(raw) => ResultFilter::parse(&raw)
            .ok_or_else(|| anyhow!("unknown shot filter {raw:?} (try All, MissedShots, SavedShot, ShotOnPost, BlockedShot, Goal)"))?,
        None => ResultFilter::All,
    };
    let with_images = !args.iter().any(|arg| arg == "--no-image")
        && std::env::var("XG_COMPARE_SKIP_IMAGES").is_err();
    let export_path = flag_value(&args, "--export").map(PathBuf::from);

    let data = Dataset::load_from_dir(&data_dir)
        .with_context(|| format!("load datasets from {}", data_dir.display()))?;

    let seasons = data.seasons();
    if !seasons.contains(&season) {
        tracing::warn!(season, available = ?seasons, "season not present in datasets");
    }
    for name in [&player_a, &player_b] {
        if data.player(name).is_none() {
            tracing::warn!(player = name.as_str(), "player not in the players table");
        }
    }

    let selection = Selection {
        player_a,
        player_b,
        season,
    };
    let report = build_comparison(&data, &selection);

    print_report(&report, shot_filter, with_images);

    if let Some(path) = export_path {
        export::export_comparison(&path, &report)?;
        println!("Workbook written: {}", path.display());
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&format!("{flag}=")) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(next.trim().to_string());
            }
        }
    }
    None
}

fn print_report(report: &ComparisonReport, shot_filter: ResultFilter, with_images: bool) {
    let a = &report.player_a;
    let b = &report.player_b;

    println!("{} vs {}, season {}", a.name, b.name, report.selection.season);
    println!();

    if with_images {
        for section in [a, b] {
            match wiki_image::player_image(&section.name) {
                PlayerImage::Url(url) => println!("{}: {}", section.name, url),
                PlayerImage::Unavailable => println!("{}: (no image available)", section.name),
            }
        }
        println!();
    }

    println!("General Information");
    if a.general_info.is_none() && b.general_info.is_none() {
        println!("  (no player records matched)");
    }
    for (idx, label) in GENERAL_INFO_LABELS.iter().enumerate() {
        println!(
            "  {label:<16} {:<20} {:<20}",
            info_field(a, idx),
            info_field(b, idx)
        );
    }
    println!();

    println!("Season Trends");
    println!(
        "  {:<22} {:>6} {:>6} {:>6} {:>8} {:>6} {:>8} {:>7} {:>6} {:>9}",
        "Player", "Season", "Goals", "Shots", "Assists", "KP", "xGoals", "90s", "xG90", "Goals/xG"
    );
    for player in [&a.name, &b.name] {
        for row in trends::player_series(&report.trends, player) {
            println!(
                "  {:<22} {:>6} {:>6} {:>6} {:>8} {:>6} {:>8.2} {:>7.1} {:>6} {:>9}",
                row.player,
                row.season,
                row.goals,
                row.shots,
                row.assists,
                row.key_passes,
                row.x_goals,
                row.nineties,
                fmt_opt(row.xg_per90()),
                fmt_opt(row.goals_per_xg()),
            );
        }
    }
    println!();

    println!("Per-90 Comparison (season {})", report.selection.season);
    println!(
        "  {:<10} {:>10} {:>10}   axis {:>4}..{:<4}",
        "Metric", short(&a.name), short(&b.name), "lo", "hi"
    );
    let radar_a = a.per90.map(|rates| rates.radar_values());
    let radar_b = b.per90.map(|rates| rates.radar_values());
    for (idx, axis) in RADAR_AXES.iter().enumerate() {
        println!(
            "  {:<10} {:>10} {:>10}   axis {:>4}..{:<4}",
            axis.label,
            fmt_opt(radar_a.map(|values| values[idx])),
            fmt_opt(radar_b.map(|values| values[idx])),
            axis.floor,
            axis.ceiling,
        );
    }
    println!(
        "  {:<10} {:>10} {:>10}",
        "xB90",
        fmt_opt(a.per90.map(|rates| rates.xbuildup90)),
        fmt_opt(b.per90.map(|rates| rates.xbuildup90)),
    );
    println!(
        "  {:<10} {:>10} {:>10}",
        "90s",
        fmt_opt(a.per90.map(|rates| rates.nineties)),
        fmt_opt(b.per90.map(|rates| rates.nineties)),
    );
    println!();

    for section in [a, b] {
        println!("Open-Play Shot Outcomes: {}", section.name);
        if section.outcomes.is_empty() {
            println!("  (no open-play shots)");
        }
        for (result, count) in &section.outcomes {
            println!("  {:<14} {count}", result.label());
        }
        println!();
    }

    for section in [a, b] {
        println!("Open-Play Goals by Body Part: {}", section.name);
        if section.goal_body_parts.is_empty() {
            println!("  (no open-play goals)");
        }
        for (body_part, count) in &section.goal_body_parts {
            println!("  {body_part:<16} {count}");
        }
        println!();
    }

    println!("Shot Map ({} shots shown)", shot_filter.label());
    for section in [a, b] {
        let shots = shot_insights::filtered(&section.shot_map, shot_filter);
        println!("  {}: {} shot(s)", section.name, shots.len());
        for shot in shots {
            println!(
                "    x={:>6.2} y={:>6.2} xG={:.2} {:<12} {}",
                shot.x, shot.y, shot.x_goal, shot.result.label(), shot.body_part
            );
        }
    }
    println!();

    for section in [a, b] {
        println!("Top Assisters to {} (by xGoals)", section.name);
        print_assist_table(&section.assisters, "xGoals");
        println!();
        println!("Most Assisted by {} (by xAssist)", section.name);
        print_assist_table(&section.assisted, "xAssist");
        println!();
    }
}

fn print_assist_table(lines: &[xg_compare::assist_rankings::AssistLine], value_label: &str) {
    if lines.is_empty() {
        println!("  (no qualifying shots)");
        return;
    }
    println!(
        "  {:<24} {:>10} {:>8} {:>8}",
        "Name", "Key Passes", "Assists", value_label
    );
    for line in lines {
        println!(
            "  {:<24} {:>10} {:>8} {:>8.2}",
            line.name, line.key_passes, line.assists, line.x_value
        );
    }
}

fn info_field(section: &PlayerSection, idx: usize) -> String {
    section
        .general_info
        .as_ref()
        .map(|info| info[idx].clone())
        .unwrap_or_else(|| "-".to_string())
}

fn short(name: &str) -> String {
    name.chars().take(10).collect()
}

fn fmt_opt(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "-".to_string())
}
