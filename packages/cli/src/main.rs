#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the bikeshare explorer.
//!
//! With no subcommand, starts the interactive shell. The subcommands run a
//! single non-interactive analysis for scripting.

mod interactive;
mod report;
mod rows;
mod session;

use std::path::PathBuf;

use bikeshare_source::{paths, registry};
use bikeshare_source_models::FilterSpec;
use clap::{Parser, Subcommand};

/// Rows shown per page when browsing raw trip data.
pub const PAGE_SIZE: usize = 5;

#[derive(Parser)]
#[command(name = "bikeshare", about = "Explore US bike-share trip data")]
struct Cli {
    /// Directory containing the city CSV files (overrides
    /// `BIKESHARE_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported cities and their data files
    Cities,
    /// Print every statistic group for one city
    Stats {
        /// City name (e.g., "chicago", "new york city", "washington")
        #[arg(long)]
        city: String,
        /// Month name, or "all"
        #[arg(long, default_value = "all")]
        month: String,
        /// Day of week, or "all"
        #[arg(long, default_value = "all")]
        day: String,
    },
    /// Print raw trip rows for one city
    Rows {
        /// City name (e.g., "chicago", "new york city", "washington")
        #[arg(long)]
        city: String,
        /// Month name, or "all"
        #[arg(long, default_value = "all")]
        month: String,
        /// Day of week, or "all"
        #[arg(long, default_value = "all")]
        day: String,
        /// Number of rows to print
        #[arg(long, default_value_t = PAGE_SIZE)]
        limit: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = bikeshare_cli_utils::init_logger();
    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(paths::data_dir);
    log::debug!("Using data directory {}", data_dir.display());

    let Some(command) = cli.command else {
        return interactive::run(&multi, &data_dir);
    };

    match command {
        Commands::Cities => {
            println!("{:<16} {:<40} FILE", "CITY", "NAME");
            println!("{}", "-".repeat(72));
            for source in &registry::all_sources() {
                println!(
                    "{:<16} {:<40} {}",
                    source.city.id(),
                    source.name,
                    paths::source_path(&data_dir, source).display()
                );
            }
        }
        Commands::Stats { city, month, day } => {
            let spec = FilterSpec::parse(&city, &month, &day)?;
            let dataset = session::load(&multi, &data_dir, &spec)?;
            let view = bikeshare_analytics::filter::apply(&dataset, &spec);
            println!("{}", report::describe_selection(&spec, view.len()));
            report::print_statistics(&view);
        }
        Commands::Rows {
            city,
            month,
            day,
            limit,
        } => {
            let spec = FilterSpec::parse(&city, &month, &day)?;
            let dataset = session::load(&multi, &data_dir, &spec)?;
            let view = bikeshare_analytics::filter::apply(&dataset, &spec);
            print!("{}", rows::render(view.schema(), view.page(0, limit), 0));
        }
    }

    Ok(())
}
