use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rust_decimal::Decimal;

use loan_schedule::error::ScheduleError;
use loan_schedule::schedule::{self, AmortizationResult, LoanTerms};
use loan_schedule::{rates, render, store};

/// Fixed-rate loan amortization schedules
#[derive(Parser)]
#[command(
    name = "loans",
    version,
    about = "Fixed-rate loan amortization schedules",
    long_about = "Computes the fixed monthly payment for a fixed-rate, fixed-term \
                  loan and the month-by-month split between interest, principal \
                  and remaining balance. The last run can be saved to a session \
                  file and restored later."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    output: OutputFormat,

    /// Session slot file used by --save, `last` and `clear`
    #[arg(long, default_value = store::DEFAULT_SLOT, global = true)]
    session: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the amortization schedule for a loan
    Schedule(ScheduleArgs),
    /// Show the last saved schedule
    Last,
    /// Remove the saved session
    Clear,
    /// Chart a historical annual-rates dataset
    Rates(RatesArgs),
}

#[derive(Args)]
struct ScheduleArgs {
    /// Borrowed capital
    #[arg(long)]
    principal: Decimal,

    /// Nominal annual interest rate as a percentage (e.g. 5.5)
    #[arg(long)]
    rate: Decimal,

    /// Loan term in years
    #[arg(long)]
    years: u32,

    /// Save the result to the session slot
    #[arg(long)]
    save: bool,

    /// Also chart this historical rates dataset (failure is a warning only)
    #[arg(long, value_name = "FILE")]
    rates: Option<PathBuf>,
}

#[derive(Args)]
struct RatesArgs {
    /// JSON file with the year/rate series
    #[arg(long, value_name = "FILE")]
    data: PathBuf,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Schedule(args) => run_schedule(args, &cli.output, &cli.session),
        Commands::Last => run_last(&cli.output, &cli.session),
        Commands::Clear => store::clear(&cli.session).map_err(Into::into),
        Commands::Rates(args) => run_rates(args),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        process::exit(1);
    }
}

fn run_schedule(args: ScheduleArgs, output: &OutputFormat, session: &Path) -> anyhow::Result<()> {
    let terms = LoanTerms::new(args.principal, args.rate, args.years)?;
    let result = schedule::amortize(&terms);

    print_result(&terms, &result, output)?;

    if args.save {
        store::save(session, &terms, &result)?;
    }

    // The chart is decorative: a missing or malformed dataset must not take
    // the schedule down with it.
    if let Some(path) = args.rates {
        match rates::load(&path).map(|points| rates::chart(&points)) {
            Ok(chart) => println!("\n{chart}"),
            Err(e) => eprintln!("{}: could not chart rates: {}", "warning".yellow().bold(), e),
        }
    }

    Ok(())
}

fn run_last(output: &OutputFormat, session: &Path) -> anyhow::Result<()> {
    let saved = store::load(session).map_err(|e| match e {
        ScheduleError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            anyhow::anyhow!("no saved session at {}", session.display())
        }
        other => other.into(),
    })?;
    print_result(&saved.terms, &saved.result, output)
}

fn run_rates(args: RatesArgs) -> anyhow::Result<()> {
    let points = rates::load(&args.data)?;
    println!("{}", rates::chart(&points));
    Ok(())
}

fn print_result(
    terms: &LoanTerms,
    result: &AmortizationResult,
    output: &OutputFormat,
) -> anyhow::Result<()> {
    match output {
        OutputFormat::Table => {
            println!("{}", render::schedule_table(result));
            println!("{}", render::summary_table(terms, result));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
    }
    Ok(())
}
