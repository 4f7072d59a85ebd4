use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::dataset::GENERAL_INFO_LABELS;
use crate::per90::RADAR_AXES;
use crate::report::{ComparisonReport, PlayerSection};

/// Write a comparison to an Excel workbook, one sheet per backing table.
/// Cells are strings; numeric formatting stays a viewer concern.
pub fn export_comparison(path: &Path, report: &ComparisonReport) -> Result<()> {
    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("GeneralInfo")?;
        write_rows(sheet, &general_info_rows(report))?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("SeasonTrends")?;
        write_rows(sheet, &trend_rows(report))?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Per90")?;
        write_rows(sheet, &per90_rows(report))?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("ShotOutcomes")?;
        write_rows(sheet, &outcome_rows(report))?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("GoalBodyParts")?;
        write_rows(sheet, &body_part_rows(report))?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("ShotMap")?;
        write_rows(sheet, &shot_map_rows(report))?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("AssistsTo")?;
        write_rows(sheet, &assist_rows(report, true))?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("AssistsBy")?;
        write_rows(sheet, &assist_rows(report, false))?;
    }
    workbook
        .save(path)
        .with_context(|| format!("save workbook {}", path.display()))?;
    Ok(())
}

fn general_info_rows(report: &ComparisonReport) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Field".to_string(),
        report.player_a.name.clone(),
        report.player_b.name.clone(),
    ]];
    for (idx, label) in GENERAL_INFO_LABELS.iter().enumerate() {
        rows.push(vec![
            (*label).to_string(),
            info_field(&report.player_a, idx),
            info_field(&report.player_b, idx),
        ]);
    }
    rows
}

fn info_field(section: &PlayerSection, idx: usize) -> String {
    section
        .general_info
        .as_ref()
        .map(|info| info[idx].clone())
        .unwrap_or_else(|| "-".to_string())
}

fn trend_rows(report: &ComparisonReport) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Player".to_string(),
        "Season".to_string(),
        "Goals".to_string(),
        "Shots".to_string(),
        "Assists".to_string(),
        "Key Passes".to_string(),
        "xGoals".to_string(),
        "90s".to_string(),
        "Matches".to_string(),
        "xG90".to_string(),
        "Goals/xG".to_string(),
    ]];
    for row in &report.trends {
        rows.push(vec![
            row.player.clone(),
            row.season.to_string(),
            row.goals.to_string(),
            row.shots.to_string(),
            row.assists.to_string(),
            row.key_passes.to_string(),
            format!("{:.2}", row.x_goals),
            format!("{:.2}", row.nineties),
            row.matches.to_string(),
            opt_to_string(row.xg_per90()),
            opt_to_string(row.goals_per_xg()),
        ]);
    }
    rows
}

fn per90_rows(report: &ComparisonReport) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Metric".to_string(),
        report.player_a.name.clone(),
        report.player_b.name.clone(),
        "Floor".to_string(),
        "Ceiling".to_string(),
    ]];
    let a = report.player_a.per90.map(|rates| rates.radar_values());
    let b = report.player_b.per90.map(|rates| rates.radar_values());
    for (idx, axis) in RADAR_AXES.iter().enumerate() {
        rows.push(vec![
            axis.label.to_string(),
            opt_to_string(a.map(|values| values[idx])),
            opt_to_string(b.map(|values| values[idx])),
            format!("{:.1}", axis.floor),
            format!("{:.1}", axis.ceiling),
        ]);
    }
    rows.push(vec![
        "xB90".to_string(),
        opt_to_string(report.player_a.per90.map(|rates| rates.xbuildup90)),
        opt_to_string(report.player_b.per90.map(|rates| rates.xbuildup90)),
        String::new(),
        String::new(),
    ]);
    rows.push(vec![
        "90s Played".to_string(),
        opt_to_string(report.player_a.per90.map(|rates| rates.nineties)),
        opt_to_string(report.player_b.per90.map(|rates| rates.nineties)),
        String::new(),
        String::new(),
    ]);
    rows
}

fn outcome_rows(report: &ComparisonReport) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Player".to_string(),
        "Result".to_string(),
        "Shots".to_string(),
    ]];
    for section in [&report.player_a, &report.player_b] {
        for (result, count) in &section.outcomes {
            rows.push(vec![
                section.name.clone(),
                result.label().to_string(),
                count.to_string(),
            ]);
        }
    }
    rows
}

fn body_part_rows(report: &ComparisonReport) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Player".to_string(),
        "Body Part".to_string(),
        "Goals".to_string(),
    ]];
    for section in [&report.player_a, &report.player_b] {
        for (body_part, count) in &section.goal_body_parts {
            rows.push(vec![
                section.name.clone(),
                body_part.clone(),
                count.to_string(),
            ]);
        }
    }
    rows
}

fn shot_map_rows(report: &ComparisonReport) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Player".to_string(),
        "X".to_string(),
        "Y".to_string(),
        "xG".to_string(),
        "Result".to_string(),
        "Body Part".to_string(),
    ]];
    for section in [&report.player_a, &report.player_b] {
        for shot in &section.shot_map {
            rows.push(vec![
                section.name.clone(),
                format!("{:.2}", shot.x),
                format!("{:.2}", shot.y),
                format!("{:.2}", shot.x_goal),
                shot.result.label().to_string(),
                shot.body_part.clone(),
            ]);
        }
    }
    rows
}

fn assist_rows(report: &ComparisonReport, to_player: bool) -> Vec<Vec<String>> {
    let value_label = if to_player { "xGoals" } else { "xAssist" };
    let mut rows = vec![vec![
        "Player".to_string(),
        "Name".to_string(),
        "Key Passes".to_string(),
        "Assists".to_string(),
        value_label.to_string(),
    ]];
    for section in [&report.player_a, &report.player_b] {
        let lines = if to_player {
            &section.assisters
        } else {
            &section.assisted
        };
        for line in lines {
            rows.push(vec![
                section.name.clone(),
                line.name.clone(),
                line.key_passes.to_string(),
                line.assists.to_string(),
                format!("{:.2}", line.x_value),
            ]);
        }
    }
    rows
}

fn opt_to_string(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "-".to_string())
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
