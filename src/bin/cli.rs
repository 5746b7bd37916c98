//! Registrar CLI
//!
//! Command-line front end over a snapshot directory. Each invocation opens
//! the engine, runs one command and persists the result, so history (and
//! therefore `undo`) carries across invocations.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use registrar::report;
use registrar::{Config, Engine, RegistrarError, SearchField, SortAlgorithm, UpsertOutcome};
use tracing_subscriber::{fmt, EnvFilter};

/// Registrar CLI
#[derive(Parser, Debug)]
#[command(name = "registrar-cli")]
#[command(about = "Student roster with sorting, search, enrollment queue and undo")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./registrar_data")]
    data_dir: String,

    /// Do not load the sample roster into an empty data directory
    #[arg(long)]
    no_seed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a student, or edit the one with this ID
    #[command(aliases = ["upsert", "edit"])]
    Add {
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        course: String,

        /// Comma-separated grades, e.g. "89.5, 92.1"
        #[arg(long, default_value = "")]
        grades: String,
    },

    /// Delete a student by ID
    Delete {
        id: String,
    },

    /// Find a student by name or ID
    Find {
        term: String,

        /// Field to search: name or id
        #[arg(long, default_value = "name", value_parser = parse_field)]
        by: SearchField,
    },

    /// Sort every distinct grade in the roster
    Sort {
        /// bubble, selection, insertion or default
        #[arg(short, long, default_value = "default")]
        algorithm: String,

        #[arg(long)]
        descending: bool,
    },

    /// Add a name to the enrollment queue
    Enqueue {
        name: String,
    },

    /// Process the next name in the enrollment queue
    Process,

    /// Undo the most recent action
    Undo,

    /// List all students
    List,

    /// Show the enrollment queue
    Queue,

    /// Show counts and the last action
    Status,
}

fn parse_field(s: &str) -> Result<SearchField, String> {
    s.parse().map_err(|e: RegistrarError| e.to_string())
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,registrar=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder().data_dir(&args.data_dir);
    if !args.no_seed {
        builder = builder.sample_seed();
    }
    let config = builder.build();

    let mut engine = match Engine::open(config) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Failed to open engine: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&mut engine, args.command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_empty_condition() => {
            println!("{}", empty_message(&e));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(engine: &mut Engine, command: Commands) -> registrar::Result<String> {
    match command {
        Commands::Add {
            id,
            name,
            course,
            grades,
        } => {
            let outcome = engine.upsert_student_from_input(&id, &name, &course, &grades)?;
            let verb = match outcome {
                UpsertOutcome::Created => "added",
                UpsertOutcome::Updated => "updated",
            };
            Ok(format!("Student {} {} successfully!", name.trim(), verb))
        }
        Commands::Delete { id } => {
            let record = engine.delete_student(&id)?;
            Ok(format!("Deleted {} (ID: {})", record.name, record.id))
        }
        Commands::Find { term, by } => Ok(match engine.find_student(&term, by)? {
            Some(record) => report::student_details(record),
            None => report::not_found(&term, by),
        }),
        Commands::Sort {
            algorithm,
            descending,
        } => {
            let algorithm = SortAlgorithm::from_name_or_default(&algorithm);
            let sorted = engine.sort_grades(algorithm, !descending)?;
            if sorted.is_empty() {
                Ok("No grades to sort. Add students with grades first.".to_string())
            } else {
                Ok(report::format_grades(&sorted))
            }
        }
        Commands::Enqueue { name } => {
            let entry = engine.enqueue_student(&name)?;
            Ok(format!("{} added to enrollment queue.", entry.name))
        }
        Commands::Process => {
            let entry = engine.dequeue_student()?;
            Ok(format!("Processed: {}", entry.name))
        }
        Commands::Undo => {
            let undone = engine.undo()?;
            let next = engine
                .last_action_summary()
                .unwrap_or_else(|| "No actions to undo.".to_string());
            Ok(format!("{}\nNext: {}", undone, next))
        }
        Commands::List => Ok(report::roster_listing(engine.roster())),
        Commands::Queue => Ok(report::queue_listing(engine.queue())),
        Commands::Status => {
            let counts = engine.counts();
            Ok(format!(
                "Total Students: {}\nQueue Length: {}\nLast Action: {}",
                counts.total_students,
                counts.queue_length,
                engine.last_action_label().unwrap_or("None")
            ))
        }
    }
}

fn empty_message(err: &RegistrarError) -> &'static str {
    match err {
        RegistrarError::QueueEmpty => "Queue is empty. No students to process.",
        _ => "No actions to undo.",
    }
}
