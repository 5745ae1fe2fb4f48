//! Raw trip row display.

use bikeshare_trip_models::{Column, SchemaCapabilities, TripRecord};

/// Placeholder for a blank cell.
const BLANK: &str = "-";

fn cell(record: &TripRecord, column: Column) -> String {
    match column {
        Column::StartTime => record.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        Column::TripDuration => record
            .trip_duration
            .map_or_else(|| BLANK.to_string(), |secs| secs.to_string()),
        Column::BirthYear => record
            .birth_year
            .map_or_else(|| BLANK.to_string(), |year| year.to_string()),
        Column::StartStation | Column::EndStation | Column::UserType | Column::Gender => {
            record.text(column).unwrap_or(BLANK).to_string()
        }
    }
}

/// Renders `records` one per block, showing `Start Time` and every
/// optional column the dataset carries. Row numbers start at
/// `first_index + 1`.
#[must_use]
pub fn render(schema: SchemaCapabilities, records: &[&TripRecord], first_index: usize) -> String {
    let mut columns = vec![Column::StartTime];
    columns.extend(schema.present());
    let width = columns
        .iter()
        .map(|c| c.to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("#{}\n", first_index + i + 1));
        for column in &columns {
            let name: &str = column.as_ref();
            out.push_str(&format!("  {name:<width$}  {}\n", cell(record, *column)));
        }
    }
    out
}
