use anyhow::{Context, Result};
use clap::Parser;
use math::PythagoreanTriples;
use special_triplet::{DEFAULT_PERIMETER, solve};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "special-triplet")]
#[command(about = "Find the Pythagorean triplet with a given perimeter and report a*b*c")]
struct Cli {
    /// Perimeter a + b + c of the triplet to find
    #[arg(short, long, default_value_t = DEFAULT_PERIMETER)]
    perimeter: u64,

    /// Also print every triple with perimeter up to the target
    #[arg(short, long)]
    list: bool,

    /// Print the problem title and the triplet found
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Failed to parse log filter")?;

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if cli.verbose {
        println!("Project Euler Problem 9 -- Special Pythagorean Triples");
    }

    let report = solve(cli.perimeter)
        .with_context(|| format!("Failed to solve for perimeter {}", cli.perimeter))?;
    println!("{}", report);

    if cli.verbose {
        println!("   Triplet:                                         {}", report.solution.triple);
    }

    if cli.list {
        for triple in PythagoreanTriples::new(cli.perimeter) {
            println!("   {} (perimeter {})", triple, triple.perimeter());
        }
    }

    Ok(())
}
