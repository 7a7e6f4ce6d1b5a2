// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::collections::HashSet;

use crate::hash::HashFamily;

/// Result of scoring one batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchEstimate {
    /// Exact number of distinct identifiers in the batch.
    pub ground_truth: u64,
    /// Median-of-means combined estimate. Integer-truncate for reporting.
    pub estimate: f64,
}

/// Flajolet-Martin estimator with median-of-means combination.
///
/// The estimator holds no mutable state; each call to
/// [`FlajoletMartin::estimate_batch`] allocates fresh trailing-zero maxima,
/// so nothing leaks from one batch into the next.
#[derive(Debug, Clone)]
pub struct FlajoletMartin {
    family: HashFamily,
    group_size: usize,
}

impl FlajoletMartin {
    /// Creates an estimator over `family`, combining per-function estimates
    /// in groups of `group_size`.
    ///
    /// # Panics
    ///
    /// Panics if `group_size` is zero or does not divide the number of hash
    /// functions in the family.
    pub fn new(family: HashFamily, group_size: usize) -> Self {
        assert!(!family.is_empty(), "hash family must not be empty");
        assert!(group_size > 0, "group_size must be at least 1");
        assert!(
            family.len() % group_size == 0,
            "number of hash functions ({}) must be divisible by group_size ({})",
            family.len(),
            group_size
        );
        Self { family, group_size }
    }

    /// Returns the number of hash functions.
    pub fn num_hashes(&self) -> usize {
        self.family.len()
    }

    /// Returns the group size used for combination.
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Returns the number of groups.
    pub fn num_groups(&self) -> usize {
        self.family.len() / self.group_size
    }

    /// Scores one batch: exact distinct count plus combined estimate.
    ///
    /// Duplicates within the batch are harmless; the running maxima are
    /// idempotent under repeated values.
    pub fn estimate_batch(&self, batch: &[String]) -> BatchEstimate {
        let mut distinct: HashSet<&str> = HashSet::new();
        let mut max_trailing = vec![0u32; self.family.len()];

        for identifier in batch {
            distinct.insert(identifier.as_str());
            let key = self.family.key(identifier);
            for (index, slot) in max_trailing.iter_mut().enumerate() {
                let zeros = trailing_zeros(self.family.value_at(index, key));
                if zeros > *slot {
                    *slot = zeros;
                }
            }
        }

        let estimates: Vec<f64> = max_trailing
            .iter()
            .map(|&r| (1u64 << r) as f64)
            .collect();
        let mut group_means: Vec<f64> = estimates
            .chunks(self.group_size)
            .map(|group| group.iter().sum::<f64>() / self.group_size as f64)
            .collect();
        group_means.sort_by(f64::total_cmp);

        BatchEstimate {
            ground_truth: distinct.len() as u64,
            estimate: group_means[group_means.len() / 2],
        }
    }
}

/// Trailing-zero count of a hash value's binary representation.
///
/// Zero is scored as a single trailing zero (its representation is the one
/// digit `0`), so an all-zero hash cannot dominate the maxima.
fn trailing_zeros(value: u64) -> u32 {
    if value == 0 { 1 } else { value.trailing_zeros() }
}
