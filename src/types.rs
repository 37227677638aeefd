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

extern crate fnv;

use fnv::FnvHashMap;

pub type DenseVector = Vec<f64>;

pub type SparseVector = FnvHashMap<u32, f64>;
pub type SparseMatrix = Vec<SparseVector>;

pub fn new_dense_vector(dimensions: usize) -> DenseVector {
    vec![0.0; dimensions]
}

pub fn new_sparse_matrix(num_rows: usize) -> SparseMatrix {
    vec![FnvHashMap::with_capacity_and_hasher(0, Default::default()); num_rows]
}

/// Sums the entries of each column, e.g., the popularity of each item in an
/// incidence matrix with one column per item.
pub fn column_sums(matrix: &SparseMatrix, num_columns: usize) -> DenseVector {

    let mut sums = new_dense_vector(num_columns);

    for row in matrix.iter() {
        for (column, value) in row.iter() {
            sums[*column as usize] += *value;
        }
    }

    sums
}

/// Sums the entries of each row, e.g., the activity level of each user in an
/// incidence matrix with one row per user.
pub fn row_sums(matrix: &SparseMatrix) -> DenseVector {
    matrix.iter()
        .map(|row| row.values().sum())
        .collect()
}
