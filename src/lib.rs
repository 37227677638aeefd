/*
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

//! Loading, validation and indexing of user-item interaction datasets as
//! used by recommender-system benchmarks. A dataset is a directory with up
//! to three delimiter-separated split files (train/valid/test); loading
//! unifies the user/item index space across the splits and derives the
//! representations downstream models want: per-user item lists, a sparse
//! incidence matrix, flat interaction pairs and item popularity counts.

extern crate csv;
extern crate fnv;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[cfg(test)]
extern crate tempfile;

use std::cmp::max;
use std::fmt;
use std::path::{Path, PathBuf};

pub mod errors;
pub mod interactions;
pub mod io;
pub mod schema;
pub mod types;

use errors::DatasetError;
use interactions::InteractionSet;
use schema::ColumnSchema;
use types::{DenseVector, SparseMatrix};

/// A fully loaded dataset: the three splits rebuilt over one shared
/// user/item index space, plus eagerly derived training structures.
pub struct Dataset {
    name: String,
    data_dir: PathBuf,
    train: InteractionSet,
    valid: InteractionSet,
    test: InteractionSet,
    num_users: usize,
    num_items: usize,
    num_ratings: usize,
    num_train_ratings: usize,
    train_matrix: SparseMatrix,
    item_degrees: DenseVector,
}

/// Summary statistics of a loaded dataset. Field names will be used in JSON.
#[derive(Serialize, Debug)]
pub struct DatasetStatistics {
    pub name: String,
    pub num_users: usize,
    pub num_items: usize,
    pub num_ratings: usize,
    pub num_train_ratings: usize,
    pub num_valid_ratings: usize,
    pub num_test_ratings: usize,
    pub avg_actions_per_user: f64,
    pub avg_actions_per_item: f64,
    pub sparsity: f64,
}

impl Dataset {

    /// Loads the dataset `<data_dir>/<name>` from its split files
    /// `<name>.train`, `<name>.valid` and `<name>.test`. The train and test
    /// files are mandatory, a missing valid file yields an empty validation
    /// split and a warning.
    ///
    /// The user/item index space is unified over all splits: `num_users` and
    /// `num_items` are one past the largest id found in any split, and every
    /// split is rebuilt with that shared shape. An item seen only in the test
    /// split is therefore always a valid column index into the training
    /// incidence matrix.
    pub fn load(
        data_dir: &str,
        name: &str,
        separator: u8,
        columns: &str,
    ) -> Result<Dataset, DatasetError> {

        let schema = ColumnSchema::parse(columns)?;

        let split_dir = Path::new(data_dir).join(name);

        let train_file = split_dir.join(format!("{}.train", name));
        if !train_file.is_file() {
            return Err(DatasetError::MissingFile(train_file));
        }

        let test_file = split_dir.join(format!("{}.test", name));
        if !test_file.is_file() {
            return Err(DatasetError::MissingFile(test_file));
        }

        let train_interactions = io::read_interactions(&train_file, separator, schema)?;

        let valid_file = split_dir.join(format!("{}.valid", name));
        let valid_interactions = if valid_file.is_file() {
            io::read_interactions(&valid_file, separator, schema)?
        } else {
            eprintln!(
                "warning: {} does not exist, proceeding with an empty validation split",
                valid_file.display()
            );
            Vec::new()
        };

        let test_interactions = io::read_interactions(&test_file, separator, schema)?;

        let mut num_users = 0;
        let mut num_items = 0;

        let all_interactions = train_interactions.iter()
            .chain(valid_interactions.iter())
            .chain(test_interactions.iter());

        for &(user, item) in all_interactions {
            num_users = max(num_users, user as usize + 1);
            num_items = max(num_items, item as usize + 1);
        }

        let num_train_ratings = train_interactions.len();
        let num_ratings =
            num_train_ratings + valid_interactions.len() + test_interactions.len();

        let train = InteractionSet::with_shape(train_interactions, num_users, num_items);
        let valid = InteractionSet::with_shape(valid_interactions, num_users, num_items);
        let test = InteractionSet::with_shape(test_interactions, num_users, num_items);

        let train_matrix = train.to_incidence_matrix()
            .unwrap_or_else(|| types::new_sparse_matrix(num_users));
        let item_degrees = types::column_sums(&train_matrix, num_items);

        Ok(Dataset {
            name: name.to_string(),
            data_dir: PathBuf::from(data_dir),
            train,
            valid,
            test,
            num_users,
            num_items,
            num_ratings,
            num_train_ratings,
            train_matrix,
            item_degrees,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directory the dataset was loaded from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn train(&self) -> &InteractionSet {
        &self.train
    }

    pub fn valid(&self) -> &InteractionSet {
        &self.valid
    }

    pub fn test(&self) -> &InteractionSet {
        &self.test
    }

    pub fn num_users(&self) -> usize {
        self.num_users
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Total number of interactions over all splits.
    pub fn num_ratings(&self) -> usize {
        self.num_ratings
    }

    pub fn num_train_ratings(&self) -> usize {
        self.num_train_ratings
    }

    /// The incidence matrix of the training split, shape
    /// (num_users, num_items).
    pub fn train_matrix(&self) -> &SparseMatrix {
        &self.train_matrix
    }

    /// Popularity of each item: the column sums of the training incidence
    /// matrix.
    pub fn item_degrees(&self) -> &DenseVector {
        &self.item_degrees
    }

    /// Activity level of each user: the row sums of the training incidence
    /// matrix, computed on demand.
    pub fn user_degrees(&self) -> DenseVector {
        types::row_sums(&self.train_matrix)
    }

    /// Summary statistics, or `None` while any of the user/item/rating
    /// totals is still zero and the averages would divide by zero.
    pub fn statistics(&self) -> Option<DatasetStatistics> {

        if self.num_users == 0 || self.num_items == 0 || self.num_ratings == 0 {
            return None;
        }

        let num_cells = (self.num_users * self.num_items) as f64;

        Some(DatasetStatistics {
            name: self.name.clone(),
            num_users: self.num_users,
            num_items: self.num_items,
            num_ratings: self.num_ratings,
            num_train_ratings: self.num_train_ratings,
            num_valid_ratings: self.valid.size(),
            num_test_ratings: self.test.size(),
            avg_actions_per_user: self.num_ratings as f64 / self.num_users as f64,
            avg_actions_per_item: self.num_ratings as f64 / self.num_items as f64,
            sparsity: 1.0 - self.num_ratings as f64 / num_cells,
        })
    }
}

impl fmt::Display for Dataset {

    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.statistics() {
            Some(statistics) => {
                writeln!(formatter, "Dataset statistics:")?;
                writeln!(formatter, "Name: {}", statistics.name)?;
                writeln!(formatter, "The number of users: {}", statistics.num_users)?;
                writeln!(formatter, "The number of items: {}", statistics.num_items)?;
                writeln!(formatter, "The number of ratings: {}", statistics.num_ratings)?;
                writeln!(
                    formatter,
                    "Average actions of users: {:.2}",
                    statistics.avg_actions_per_user
                )?;
                writeln!(
                    formatter,
                    "Average actions of items: {:.2}",
                    statistics.avg_actions_per_item
                )?;
                writeln!(
                    formatter,
                    "The sparsity of the dataset: {:.6}%",
                    statistics.sparsity * 100.0
                )?;
                writeln!(formatter)?;
                writeln!(formatter, "The number of training: {}", statistics.num_train_ratings)?;
                writeln!(
                    formatter,
                    "The number of validation: {}",
                    statistics.num_valid_ratings
                )?;
                write!(formatter, "The number of testing: {}", statistics.num_test_ratings)
            },
            None => write!(formatter, "statistical information is unavailable now"),
        }
    }
}


#[cfg(test)]
mod tests {

    use std::fs;
    use std::path::Path;

    use tempfile;

    use Dataset;
    use errors::DatasetError;

    fn write_split(data_dir: &Path, name: &str, extension: &str, content: &str) {
        let split_dir = data_dir.join(name);
        fs::create_dir_all(&split_dir).unwrap();
        fs::write(split_dir.join(format!("{}.{}", name, extension)), content).unwrap();
    }

    /* Fixture from a tiny benchmark dataset: three training interactions,
       an empty validation split and one test-only interaction for item 1
       of user 1. */
    fn movielens_like_fixture(data_dir: &Path) {
        write_split(data_dir, "ml-tiny", "train", "0\t0\n0\t1\n1\t0\n");
        write_split(data_dir, "ml-tiny", "valid", "");
        write_split(data_dir, "ml-tiny", "test", "1\t1\n");
    }

    #[test]
    fn unifies_the_index_space_across_splits() {
        let data_dir = tempfile::tempdir().unwrap();
        movielens_like_fixture(data_dir.path());

        let dataset =
            Dataset::load(data_dir.path().to_str().unwrap(), "ml-tiny", b'\t', "UI").unwrap();

        assert_eq!(dataset.num_users(), 2);
        assert_eq!(dataset.num_items(), 2);
        assert_eq!(dataset.num_ratings(), 4);
        assert_eq!(dataset.num_train_ratings(), 3);

        // The test-only item id 1 must be a valid column for training data
        assert_eq!(dataset.train().num_users(), 2);
        assert_eq!(dataset.train().num_items(), 2);
        assert_eq!(dataset.test().num_users(), 2);
        assert_eq!(dataset.test().num_items(), 2);

        assert_eq!(dataset.valid().size(), 0);
        assert_eq!(dataset.test().size(), 1);
    }

    #[test]
    fn derives_training_matrix_and_degrees() {
        let data_dir = tempfile::tempdir().unwrap();
        movielens_like_fixture(data_dir.path());

        let dataset =
            Dataset::load(data_dir.path().to_str().unwrap(), "ml-tiny", b'\t', "UI").unwrap();

        let matrix = dataset.train_matrix();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0][&0], 1.0);
        assert_eq!(matrix[0][&1], 1.0);
        assert_eq!(matrix[1][&0], 1.0);
        assert!(!matrix[1].contains_key(&1));

        assert_eq!(dataset.item_degrees(), &vec![2.0, 1.0]);
        assert_eq!(dataset.user_degrees(), vec![2.0, 1.0]);

        let items_by_user = dataset.train().group_by_user().unwrap();
        assert_eq!(items_by_user[&0], vec![0, 1]);
        assert_eq!(items_by_user[&1], vec![0]);
    }

    #[test]
    fn a_missing_validation_file_is_tolerated() {
        let data_dir = tempfile::tempdir().unwrap();
        write_split(data_dir.path(), "ml-tiny", "train", "0\t0\n1\t1\n");
        write_split(data_dir.path(), "ml-tiny", "test", "0\t1\n");

        let dataset =
            Dataset::load(data_dir.path().to_str().unwrap(), "ml-tiny", b'\t', "UI").unwrap();

        assert!(dataset.valid().is_empty());
        assert_eq!(dataset.num_ratings(), 3);
    }

    #[test]
    fn a_missing_train_file_is_an_error() {
        let data_dir = tempfile::tempdir().unwrap();
        write_split(data_dir.path(), "ml-tiny", "test", "0\t1\n");

        let result = Dataset::load(data_dir.path().to_str().unwrap(), "ml-tiny", b'\t', "UI");

        match result {
            Err(DatasetError::MissingFile(ref path)) => {
                assert!(path.ends_with("ml-tiny/ml-tiny.train"))
            },
            other => panic!("expected a missing file error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn a_missing_test_file_is_an_error() {
        let data_dir = tempfile::tempdir().unwrap();
        write_split(data_dir.path(), "ml-tiny", "train", "0\t0\n");

        let result = Dataset::load(data_dir.path().to_str().unwrap(), "ml-tiny", b'\t', "UI");

        match result {
            Err(DatasetError::MissingFile(ref path)) => {
                assert!(path.ends_with("ml-tiny/ml-tiny.test"))
            },
            other => panic!("expected a missing file error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn an_unknown_columns_selector_is_rejected() {
        let data_dir = tempfile::tempdir().unwrap();
        movielens_like_fixture(data_dir.path());

        let result = Dataset::load(data_dir.path().to_str().unwrap(), "ml-tiny", b'\t', "UIRT");

        match result {
            Err(DatasetError::UnknownSchema(ref selector)) => assert_eq!(selector, "UIRT"),
            other => panic!("expected an unknown schema error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn a_malformed_split_file_is_a_read_error() {
        let data_dir = tempfile::tempdir().unwrap();
        write_split(data_dir.path(), "ml-tiny", "train", "0\tnot-an-item\n");
        write_split(data_dir.path(), "ml-tiny", "test", "0\t1\n");

        let result = Dataset::load(data_dir.path().to_str().unwrap(), "ml-tiny", b'\t', "UI");

        match result {
            Err(DatasetError::Read(_)) => (),
            other => panic!("expected a read error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn renders_the_statistics_summary() {
        let data_dir = tempfile::tempdir().unwrap();
        movielens_like_fixture(data_dir.path());

        let dataset =
            Dataset::load(data_dir.path().to_str().unwrap(), "ml-tiny", b'\t', "UI").unwrap();

        let expected = "Dataset statistics:\n\
                        Name: ml-tiny\n\
                        The number of users: 2\n\
                        The number of items: 2\n\
                        The number of ratings: 4\n\
                        Average actions of users: 2.00\n\
                        Average actions of items: 2.00\n\
                        The sparsity of the dataset: 0.000000%\n\
                        \n\
                        The number of training: 3\n\
                        The number of validation: 0\n\
                        The number of testing: 1";

        assert_eq!(format!("{}", dataset), expected);
    }

    #[test]
    fn statistics_are_unavailable_for_an_all_empty_dataset() {
        let data_dir = tempfile::tempdir().unwrap();
        write_split(data_dir.path(), "ml-tiny", "train", "");
        write_split(data_dir.path(), "ml-tiny", "test", "");

        let dataset =
            Dataset::load(data_dir.path().to_str().unwrap(), "ml-tiny", b'\t', "UI").unwrap();

        assert!(dataset.statistics().is_none());
        assert_eq!(format!("{}", dataset), "statistical information is unavailable now");
    }

    #[test]
    fn writes_statistics_as_json() {
        let data_dir = tempfile::tempdir().unwrap();
        movielens_like_fixture(data_dir.path());

        let dataset =
            Dataset::load(data_dir.path().to_str().unwrap(), "ml-tiny", b'\t', "UI").unwrap();

        let statistics_path = data_dir.path().join("statistics.json");
        ::io::write_statistics(
            &dataset,
            Some(statistics_path.to_str().unwrap().to_string()),
        ).unwrap();

        let written = fs::read_to_string(&statistics_path).unwrap();
        assert!(written.contains("\"name\":\"ml-tiny\""));
        assert!(written.contains("\"num_users\":2"));
        assert!(written.contains("\"num_train_ratings\":3"));
    }
}
