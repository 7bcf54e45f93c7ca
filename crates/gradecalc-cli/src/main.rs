//! gradecalc CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod session;

#[derive(Parser)]
#[command(
    name = "gradecalc",
    version,
    about = "Prelim grade calculator and student record table"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the prelim exam score needed to pass and to reach excellent
    Calc {
        /// Number of attendances (prompted for when omitted)
        #[arg(long, allow_hyphen_values = true)]
        attendance: Option<String>,

        /// Lab work 1 grade, 0-100
        #[arg(long, allow_hyphen_values = true)]
        lab1: Option<String>,

        /// Lab work 2 grade, 0-100
        #[arg(long, allow_hyphen_values = true)]
        lab2: Option<String>,

        /// Lab work 3 grade, 0-100
        #[arg(long, allow_hyphen_values = true)]
        lab3: Option<String>,

        /// Output format: text, json (default from config)
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Work with the CSV student record table
    Records {
        #[command(subcommand)]
        command: RecordsCommand,

        /// CSV file to read (default from config)
        #[arg(long, global = true)]
        file: Option<PathBuf>,

        /// Config file path
        #[arg(long, global = true)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and sample records file
    Init,
}

#[derive(Subcommand)]
enum RecordsCommand {
    /// Print every record with its final grade
    List,

    /// Edit the table interactively (changes are not written back)
    Edit,

    /// Export the table as a self-contained HTML page
    Export {
        /// Output HTML file
        #[arg(long)]
        output: PathBuf,

        /// Page title
        #[arg(long, default_value = "Student Records")]
        title: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gradecalc=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Calc {
            attendance,
            lab1,
            lab2,
            lab3,
            format,
            config,
        } => commands::calc::execute(
            commands::calc::RawInputs {
                attendance,
                lab1,
                lab2,
                lab3,
            },
            format,
            config,
        ),
        Commands::Records {
            command,
            file,
            config,
        } => match command {
            RecordsCommand::List => commands::records::list(file, config),
            RecordsCommand::Edit => commands::records::edit(file, config),
            RecordsCommand::Export { output, title } => {
                commands::records::export(file, config, output, title)
            }
        },
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
