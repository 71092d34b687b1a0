use std::path::PathBuf;

use alquimista_leads::alquimista::leads::pipeline;
use alquimista_leads::{Result, ToolError};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Consolidate(args) => execute_consolidate(args),
    }
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn execute_consolidate(args: ConsolidateArgs) -> Result<()> {
    for input in &args.inputs {
        if !input.exists() {
            return Err(ToolError::MissingInput(input.clone()));
        }
    }

    let count = pipeline::consolidate_workbooks(&args.inputs, &args.output, args.csv.as_deref())?;

    println!("consolidated records: {count}");
    println!("wrote {}", args.output.display());
    if let Some(csv) = &args.csv {
        println!("wrote {}", csv.display());
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Consolidate phone and email lead sheets into one deduplicated workbook."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Merge the Telefones and Emails sheets of the given workbooks.
    Consolidate(ConsolidateArgs),
}

#[derive(clap::Args)]
struct ConsolidateArgs {
    /// Source workbook paths, processed in the order given.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output workbook path.
    #[arg(long)]
    output: PathBuf,

    /// Optional flat CSV copy of the output rows.
    #[arg(long)]
    csv: Option<PathBuf>,
}
