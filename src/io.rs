/**
 * RecData
 * Copyright (C) 2026 The RecData developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

extern crate csv;
extern crate serde_json;

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::stdout;
use std::path::Path;

use Dataset;
use errors::DatasetError;
use schema::ColumnSchema;

/// Reads a split file. We expect NO headers, and one interaction per line
/// with the configured separator.
pub fn interaction_reader(file: &Path, separator: u8) -> Result<csv::Reader<File>, csv::Error> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(separator)
        .from_path(file)?;

    Ok(reader)
}

/// Materializes the interactions of one split file, interpreted with the
/// given column schema. Malformed lines are read errors, not warnings.
pub fn read_interactions(
    file: &Path,
    separator: u8,
    schema: ColumnSchema,
) -> Result<Vec<(u32, u32)>, DatasetError> {

    let mut reader = interaction_reader(file, separator)?;

    let mut interactions = Vec::new();

    match schema {
        ColumnSchema::UserItem => {
            for record in reader.deserialize() {
                let (user, item): (u32, u32) = record?;
                interactions.push((user, item));
            }
        },
    }

    Ok(interactions)
}

/// Output the dataset statistics in JSON format. If a `statistics_path` is
/// supplied, we write to a file at the specified path, otherwise, we output
/// to stdout.
pub fn write_statistics(
    dataset: &Dataset,
    statistics_path: Option<String>,
) -> io::Result<()> {

    let mut out: Box<dyn Write> = match statistics_path {
        Some(path) => Box::new(File::create(&Path::new(&path))?),
        _ => Box::new(stdout())
    };

    match dataset.statistics() {
        Some(statistics) => {
            let statistics_as_json = serde_json::to_string(&statistics)?;
            write!(out, "{}\n", statistics_as_json)?;
        },
        None => write!(out, "statistical information is unavailable now\n")?,
    }

    Ok(())
}
