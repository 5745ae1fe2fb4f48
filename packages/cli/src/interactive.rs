//! Interactive shell for exploring one city at a time.
//!
//! Prompts for a city, month, and day with `dialoguer`, pages through the
//! matching raw rows, prints every statistic group, and offers a restart.

use std::path::Path;

use bikeshare_analytics::filter;
use bikeshare_cli_utils::MultiProgress;
use bikeshare_source_models::{City, FilterSpec};
use bikeshare_trip_models::{ALL_KEYWORD, Month, Selection, TripView, Weekday};
use dialoguer::{Confirm, Input, Select};

use crate::{PAGE_SIZE, report, rows, session};

/// Runs analysis rounds until the user declines a restart.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read from or written to.
/// Load failures are reported and end only the current round.
pub fn run(multi: &MultiProgress, data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Hello! Let's explore some US bikeshare data!");

    loop {
        let spec = prompt_filters()?;
        println!("{}", "-".repeat(40));

        match session::load(multi, data_dir, &spec) {
            Ok(dataset) => {
                let view = filter::apply(&dataset, &spec);
                println!("{}", report::describe_selection(&spec, view.len()));
                page_rows(&view)?;
                report::print_statistics(&view);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", spec.city);
                println!("Could not load data for {}: {e}", spec.city);
            }
        }

        let again = Confirm::new()
            .with_prompt("Would you like to restart?")
            .default(false)
            .interact()?;
        if !again {
            return Ok(());
        }
    }
}

/// Asks for the city, month, and day to analyze.
fn prompt_filters() -> Result<FilterSpec, Box<dyn std::error::Error>> {
    let labels: Vec<String> = City::all().iter().map(ToString::to_string).collect();
    let idx = Select::new()
        .with_prompt("Which city would you like to see data for?")
        .items(&labels)
        .default(0)
        .interact()?;
    let city = City::all()[idx];

    let month: Selection<Month> =
        prompt_selection("Which month? (january..december, or \"all\")")?;
    let day: Selection<Weekday> =
        prompt_selection("Which day of the week? (monday..sunday, or \"all\")")?;

    Ok(FilterSpec { city, month, day })
}

/// Reads a free-text month or day, re-prompting until it parses.
fn prompt_selection<T>(prompt: &str) -> Result<Selection<T>, Box<dyn std::error::Error>>
where
    Selection<T>: std::str::FromStr<Err = bikeshare_trip_models::InvalidFilterError>,
{
    let text: String = Input::new()
        .with_prompt(prompt)
        .default(ALL_KEYWORD.to_string())
        .validate_with(|input: &String| input.parse::<Selection<T>>().map(|_| ()))
        .interact_text()?;
    Ok(text.parse()?)
}

/// Shows raw rows [`PAGE_SIZE`] at a time for as long as the user asks.
fn page_rows(view: &TripView<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let mut offset = 0;
    while offset < view.len() {
        let prompt = if offset == 0 {
            format!("Would you like to see {PAGE_SIZE} rows of raw data?")
        } else {
            format!("Would you like to see {PAGE_SIZE} more rows?")
        };
        let show = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        if !show {
            return Ok(());
        }

        print!("{}", rows::render(view.schema(), view.page(offset, PAGE_SIZE), offset));
        offset += PAGE_SIZE;
    }

    if offset > 0 {
        println!("No more rows to display.");
    }
    Ok(())
}
