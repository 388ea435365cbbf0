//! # timetable-cli
//!
//! Command-line interface for extracting class schedules from timetable workbooks.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use comfy_table::{presets::ASCII_FULL, Attribute, Cell, Color, Table};
use std::path::PathBuf;
use timetable_schedule::{parse_file, ScheduleEntry, ScheduleOptions};
use tracing_subscriber::EnvFilter;

/// timetable - Extract biweekly class schedules from merged-cell spreadsheets
#[derive(Parser)]
#[command(name = "timetable")]
#[command(author, version, about = "Extract class schedules from timetable workbooks", long_about = None)]
struct Cli {
    /// Timetable workbook (.xlsx)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format (table, json, csv)
    #[arg(short = 'f', long = "format", default_value = "table")]
    format: OutputFormat,

    /// Row holding the group labels (0-based)
    #[arg(long = "group-row", default_value_t = 1)]
    group_row: usize,

    /// First row holding schedule data (0-based)
    #[arg(long = "first-data-row", default_value_t = 2)]
    first_data_row: usize,

    /// Keep fully blank rows when indexing
    #[arg(long = "keep-blank-rows")]
    keep_blank_rows: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for results.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Pretty table output (default)
    #[default]
    Table,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let options = ScheduleOptions::default()
        .with_group_row(cli.group_row)
        .with_first_data_row(cli.first_data_row)
        .with_skip_blank_rows(!cli.keep_blank_rows);

    tracing::info!(file = %cli.file.display(), "parsing timetable");
    let entries = parse_file(&cli.file, &options)
        .await
        .with_context(|| format!("Failed to parse timetable: {}", cli.file.display()))?;

    match cli.format {
        OutputFormat::Table => print_table(&entries),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Csv => print_csv(&entries)?,
    }

    Ok(())
}

/// Print entries as a table.
fn print_table(entries: &[ScheduleEntry]) {
    if entries.is_empty() {
        println!("{}", "No classes found".yellow());
        return;
    }

    println!("{}", schedule_table(entries));
    println!("\n{} classes", entries.len().to_string().green().bold());
}

/// One row per entry; multi-line subjects stay on several lines of their cell.
fn schedule_table(entries: &[ScheduleEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(
        ["Day", "Time", "Group", "Subject", "Place", "Teacher", "Weeks"]
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan)),
    );

    for e in entries {
        table.add_row(vec![
            e.day.as_str(),
            e.time.as_str(),
            e.group.as_str(),
            e.subject.as_str(),
            e.place.as_str(),
            e.teacher.as_str(),
            e.recurrence.as_str(),
        ]);
    }
    table
}

/// Print entries as CSV.
fn print_csv(entries: &[ScheduleEntry]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetable_schedule::Recurrence;

    fn lecture(subject: &str, recurrence: Recurrence) -> ScheduleEntry {
        ScheduleEntry {
            subject: subject.to_string(),
            teacher: "Dr. Smith".to_string(),
            place: "Room 101".to_string(),
            group: "G1".to_string(),
            day: "Monday".to_string(),
            time: "8:00".to_string(),
            recurrence,
        }
    }

    #[test]
    fn test_schedule_table_has_row_per_entry() {
        let table = schedule_table(&[
            lecture("Math", Recurrence::EveryWeek),
            lecture("Physics", Recurrence::NumeratorOnly),
        ]);
        let rendered = table.to_string();

        assert_eq!(table.row_iter().count(), 2);
        assert!(rendered.contains("Physics"));
        assert!(rendered.contains("numerator_only"));
        assert!(rendered.contains("Room 101"));
    }

    #[test]
    fn test_multi_line_subject_stays_in_one_cell() {
        let table = schedule_table(&[lecture("Math\nLecture", Recurrence::EveryWeek)]);
        let rendered = table.to_string();

        assert_eq!(table.row_iter().count(), 1);
        assert!(rendered.lines().any(|line| line.contains("Math")));
        assert!(rendered.lines().any(|line| line.contains("Lecture")));
    }
}
