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

use std::cmp::max;
use std::collections::BTreeMap;

use types;
use types::SparseMatrix;

/// One split of user-item interactions together with the declared shape of
/// the interaction space. The shape may exceed the largest id actually
/// present, e.g., when a dataset-wide shape is shared into a small split.
///
/// The derived views serve different consumers: sequence models want the
/// per-user item lists, matrix factorization wants the sparse incidence
/// matrix, pairwise samplers want the flat pairs. Each view is computed on
/// request, so no consumer pays for the others.
#[derive(Debug)]
pub struct InteractionSet {
    interactions: Vec<(u32, u32)>,
    num_users: usize,
    num_items: usize,
}

impl InteractionSet {

    pub fn empty() -> InteractionSet {
        InteractionSet { interactions: Vec::new(), num_users: 0, num_items: 0 }
    }

    /// Creates a set from a single split, inferring the shape from the
    /// largest user and item ids present.
    pub fn new(interactions: Vec<(u32, u32)>) -> InteractionSet {

        let mut num_users = 0;
        let mut num_items = 0;

        for &(user, item) in interactions.iter() {
            num_users = max(num_users, user as usize + 1);
            num_items = max(num_items, item as usize + 1);
        }

        InteractionSet { interactions, num_users, num_items }
    }

    /// Creates a set with an externally supplied shape, typically the
    /// dataset-wide one unified over all splits. An empty split collapses to
    /// shape (0, 0) regardless of the supplied shape.
    pub fn with_shape(
        interactions: Vec<(u32, u32)>,
        num_users: usize,
        num_items: usize,
    ) -> InteractionSet {

        if interactions.is_empty() {
            return InteractionSet::empty();
        }

        debug_assert!(
            interactions.iter()
                .all(|&(user, item)| (user as usize) < num_users && (item as usize) < num_items),
            "interaction ids must lie within the supplied shape"
        );

        InteractionSet { interactions, num_users, num_items }
    }

    pub fn num_users(&self) -> usize {
        self.num_users
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Number of interactions in this split.
    pub fn size(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Groups the interactions by user: keys ascend by user id, each user's
    /// item list keeps the row order of the split file. Returns `None` for an
    /// empty split, which is expected for validation data and not an error.
    pub fn group_by_user(&self) -> Option<BTreeMap<u32, Vec<u32>>> {

        if self.interactions.is_empty() {
            eprintln!("warning: empty interaction set, nothing to group by user");
            return None;
        }

        let mut items_by_user: BTreeMap<u32, Vec<u32>> = BTreeMap::new();

        for &(user, item) in self.interactions.iter() {
            items_by_user.entry(user).or_insert_with(Vec::new).push(item);
        }

        Some(items_by_user)
    }

    /// Assembles the sparse user-item incidence matrix of shape
    /// (num_users, num_items), adding a weight of 1.0 per interaction.
    /// Duplicate (user, item) pairs accumulate additively. Returns `None` for
    /// an empty split.
    pub fn to_incidence_matrix(&self) -> Option<SparseMatrix> {

        if self.interactions.is_empty() {
            eprintln!("warning: empty interaction set, no incidence matrix to build");
            return None;
        }

        let mut matrix = types::new_sparse_matrix(self.num_users);

        for &(user, item) in self.interactions.iter() {
            *matrix[user as usize].entry(item).or_insert(0.0) += 1.0;
        }

        Some(matrix)
    }

    /// An independent copy of the (user, item) pairs in row order, safe for
    /// the caller to mutate. Returns `None` for an empty split.
    pub fn to_pairs(&self) -> Option<Vec<(u32, u32)>> {

        if self.interactions.is_empty() {
            eprintln!("warning: empty interaction set, no pairs to extract");
            return None;
        }

        Some(self.interactions.clone())
    }
}
