mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compare::CompareArgs;
use commands::disclose::DiscloseArgs;
use commands::note_sale::NoteSaleArgs;
use commands::schedule::ScheduleArgs;

/// Seller-financed note schedules and TILA disclosure figures
#[derive(Parser)]
#[command(
    name = "snote",
    version,
    about = "Seller-financed note schedules and TILA disclosure figures",
    long_about = "A CLI for computing amortization schedules, Reg Z disclosure figures, \
                  side-by-side payment-structure comparisons, and note-sale pricing for \
                  seller-financed real-estate notes, with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full payment schedule for one structure
    Schedule(ScheduleArgs),
    /// Compute Reg Z disclosure figures for one structure
    Disclose(DiscloseArgs),
    /// Compare all three payment structures side by side
    Compare(CompareArgs),
    /// Price the note at one or more buyer yields
    NoteSale(NoteSaleArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Disclose(args) => commands::disclose::run_disclose(args),
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::NoteSale(args) => commands::note_sale::run_note_sale(args),
        Commands::Version => {
            println!("snote {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
