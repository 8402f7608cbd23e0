use std::fs::File;
use std::path::Path;

use rand::Rng;

use crate::errors::PickError;

/// Reads every record of a comma separated file and returns one at random.
///
/// The first line is treated as data like any other, and rows may have
/// differing lengths.
pub fn pick_address_row(path: &Path, rng: &mut impl Rng) -> Result<Vec<String>, PickError> {
    let file = File::open(path).map_err(|source| PickError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    if rows.is_empty() {
        return Err(PickError::Empty(path.to_path_buf()));
    }

    let index = rng.random_range(0..rows.len());
    tracing::debug!(event = "address_picked", rows = rows.len(), index = index);
    Ok(rows.swap_remove(index))
}

pub fn format_row(row: &[String]) -> String {
    row.join(", ")
}
