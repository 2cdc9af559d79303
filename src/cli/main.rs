//! `roster` command line front end

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use student_roster::RosterConfig;
use student_roster::cli::CliError;
use student_roster::cli::commands::{
    ListFormat, UpdateArgs, handle_add, handle_clear, handle_delete, handle_list, handle_show,
    handle_update, open_session,
};
use student_roster::cli::logging::init_logging;
use student_roster::models::StudentForm;
use tracing::error;

#[derive(Parser)]
#[command(name = "roster", version, about = "Manage a student roster")]
struct Cli {
    /// Config file (defaults to ./roster.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the roster file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Storage slot key
    #[arg(long, global = true)]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a student
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        student_id: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        contact: String,
    },
    /// Update fields of an existing student
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        student_id: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        contact: Option<String>,
    },
    /// Delete a student
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Delete every student
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// List students, optionally filtered by name or student id
    List {
        #[arg(long, short)]
        query: Option<String>,
        /// table, json or html
        #[arg(long, default_value = "table")]
        format: ListFormat,
    },
    /// Show one student
    Show { id: String },
}

fn run(cli: Cli) -> Result<String, CliError> {
    let mut config = RosterConfig::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(key) = cli.key {
        config.storage_key = key;
    }

    init_logging(&config.log_filter);

    let mut session = open_session(&config);
    let mut stdin = std::io::stdin().lock();

    match cli.command {
        Commands::Add {
            name,
            student_id,
            email,
            contact,
        } => handle_add(
            &mut session,
            &StudentForm::new(name, student_id, email, contact),
        ),
        Commands::Update {
            id,
            name,
            student_id,
            email,
            contact,
        } => handle_update(
            &mut session,
            &id,
            UpdateArgs {
                name,
                student_id,
                email,
                contact,
            },
        ),
        Commands::Delete { id, yes } => handle_delete(&mut session, &id, yes, &mut stdin),
        Commands::Clear { yes } => handle_clear(&mut session, yes, &mut stdin),
        Commands::List { query, format } => handle_list(&mut session, query.as_deref(), format),
        Commands::Show { id } => handle_show(&session, &id),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
