//! Command implementations for the registry reporter CLI
//!
//! Contains the command dispatcher, logging setup, and the report command,
//! which builds the registry and renders the three summary views. Rendering
//! consumes only the projector's rows; the core never learns about output
//! formats.

use crate::app::services::summary::{DepartmentRow, InstructorRow, StudentRow};
use crate::cli::args::{Args, Commands, OutputFormat, ReportArgs};
use crate::config::RegistryConfig;
use crate::{Error, RegistryBuilder, Result, SummaryProjector};
use colored::*;
use tracing::info;

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Report(report_args)) => run_report(report_args),
        None => Err(Error::configuration("No command given".to_string())),
    }
}

/// Set up structured logging for the reporter
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("registrar={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(())
}

/// Report command runner: build the registry and print the summaries
pub fn run_report(args: ReportArgs) -> Result<()> {
    setup_logging(&args.log_level)?;

    let config =
        RegistryConfig::load_layered(args.data_dir.clone(), args.config_file.as_deref())?;

    let registry = RegistryBuilder::new(config).build()?;
    info!("Projecting summary views");

    let projector = SummaryProjector::new(&registry);
    let departments = projector.department_rows();
    let students = projector.student_rows();
    let instructors = projector.instructor_rows();

    match args.format {
        OutputFormat::Text => {
            print_department_summary(&departments);
            print_student_summary(&students);
            print_instructor_summary(&instructors);
        }
        OutputFormat::Json => {
            let document = serde_json::json!({
                "departments": departments,
                "students": students,
                "instructors": instructors,
            });
            let rendered = serde_json::to_string_pretty(&document)
                .map_err(|e| Error::registry(format!("Failed to serialize summary: {}", e)))?;
            println!("{}", rendered);
        }
    }

    Ok(())
}

fn print_department_summary(rows: &[DepartmentRow]) {
    println!("{}", "Department Summary".bold());
    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.department.clone(),
                row.required.join(", "),
                row.electives.join(", "),
            ]
        })
        .collect();
    print_table(&["Major", "Required Courses", "Electives"], &table);
}

fn print_student_summary(rows: &[StudentRow]) {
    println!("{}", "Student Summary".bold());
    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.cwid.clone(),
                row.name.clone(),
                row.major.clone(),
                row.completed.join(", "),
                row.remaining_required.join(", "),
                row.remaining_elective.join(", "),
                format!("{:.2}", row.gpa),
            ]
        })
        .collect();
    print_table(
        &[
            "CWID",
            "Name",
            "Major",
            "Completed Courses",
            "Remaining Required",
            "Remaining Electives",
            "GPA",
        ],
        &table,
    );
}

fn print_instructor_summary(rows: &[InstructorRow]) {
    println!("{}", "Instructor Summary".bold());
    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.cwid.clone(),
                row.name.clone(),
                row.department.clone(),
                row.course.clone(),
                row.students.to_string(),
            ]
        })
        .collect();
    print_table(&["CWID", "Name", "Dept", "Course", "Students"], &table);
}

/// Print an aligned plain-text table with a header rule
fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  "));
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", cells.join("  "));
    }
    println!();
}
