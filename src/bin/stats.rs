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

extern crate getopts;
extern crate recdata;

use std::env;
use std::error::Error;
use getopts::Options;

use recdata::Dataset;
use recdata::io;
use recdata::schema::ColumnSchema;

fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("d", "data-dir", "Directory holding the datasets (required). We expect one \
        subdirectory per dataset, containing the files <dataset>/<dataset>.train, .valid and \
        .test, where the .valid file is optional.", "PATH");
    opts.optopt("n", "dataset", "Name of the dataset to load (required).", "NAME");
    opts.optopt("s", "separator", "Field separator used in the split files (optional, defaults \
        to a tab).", "CHAR");
    opts.optopt("c", "columns", "Columns selector describing the layout of the split files \
        (optional, defaults to 'UI').", "SELECTOR");
    opts.optopt("o", "outputfile", "File to additionally write the dataset statistics to as \
        JSON (optional).", "PATH");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    if !matches.opt_present("d") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify a data directory via --data-dir."),
        );
    }

    if !matches.opt_present("n") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify a dataset name via --dataset."),
        );
    }

    let data_dir = matches.opt_str("d").unwrap();
    let dataset_name = matches.opt_str("n").unwrap();
    let statistics_path = matches.opt_str("o");

    let separator = match parse_separator(matches.opt_str("s")) {
        Ok(separator) => separator,
        Err(hint) => return print_usage_and_exit(&program, opts, Some(&hint)),
    };

    let columns = matches.opt_str("c").unwrap_or_else(|| String::from("UI"));

    // Validate the selector up front for a friendlier hint than a late failure
    let schema = match ColumnSchema::parse(&columns) {
        Ok(schema) => schema,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    println!(
        "Reading dataset {} from {} (columns: {})",
        dataset_name,
        data_dir,
        schema.columns().join(", "),
    );

    print_statistics(&data_dir, &dataset_name, separator, &columns, statistics_path).unwrap();
}

fn parse_separator(separator: Option<String>) -> Result<u8, String> {
    match separator {
        None => Ok(b'\t'),
        Some(ref escaped) if escaped == "\\t" => Ok(b'\t'),
        Some(ref single) if single.len() == 1 => Ok(single.as_bytes()[0]),
        Some(other) => Err(format!("'{}' is not a single character separator.", other)),
    }
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));
}

fn print_statistics(
    data_dir: &str,
    dataset_name: &str,
    separator: u8,
    columns: &str,
    statistics_path: Option<String>,
) -> Result<(), Box<dyn Error>> {

    let dataset = Dataset::load(data_dir, dataset_name, separator, columns)?;

    println!("{}", dataset);

    if statistics_path.is_some() {
        println!("Writing statistics...");
        io::write_statistics(&dataset, statistics_path)?;
    }

    Ok(())
}
