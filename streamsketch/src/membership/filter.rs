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

/// Classification of a single identifier presented to the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    /// The exact side-set already held the identifier; nothing was counted
    /// or mutated.
    Repeat,
    /// All hash bits were already set although the identifier is new: the
    /// filter wrongly claims prior membership. Setting bits would be a
    /// no-op, so none are touched.
    FalsePositive,
    /// The identifier is new and at least one hash bit was clear; all of
    /// its bits are now set.
    Inserted,
}

/// Per-batch tally of filter classifications.
///
/// Only first-occurrences within the run contribute; repeats are skipped
/// entirely and counted separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchTally {
    /// Identifiers skipped because the exact side-set already held them.
    pub repeats: u64,
    /// First-occurrences the filter wrongly claimed to have seen.
    pub false_positives: u64,
    /// First-occurrences the filter correctly reported as unseen.
    pub true_negatives: u64,
}

impl BatchTally {
    /// Returns the number of first-occurrences in the batch.
    pub fn first_occurrences(&self) -> u64 {
        self.false_positives + self.true_negatives
    }

    /// Returns the false-positive rate over first-occurrences, or `None`
    /// when the batch had no first-occurrences and the rate is undefined.
    pub fn false_positive_rate(&self) -> Option<f64> {
        let first = self.first_occurrences();
        if first == 0 {
            None
        } else {
            Some(self.false_positives as f64 / first as f64)
        }
    }
}

/// Bloom-style approximate-membership filter over identifier strings.
///
/// The bit array has `family.range()` bits, all zero at construction, and is
/// monotone: once a bit is set it is never cleared. State accumulates across
/// every batch of a run.
#[derive(Debug, Clone)]
pub struct MembershipFilter {
    family: HashFamily,
    words: Vec<u64>,
    num_bits: u64,
    seen: HashSet<String>,
}

impl MembershipFilter {
    /// Creates an empty filter whose bit-array length is the hash range of
    /// `family`.
    pub fn new(family: HashFamily) -> Self {
        let num_bits = family.range();
        let num_words = num_bits.div_ceil(64) as usize;
        Self {
            family,
            words: vec![0u64; num_words],
            num_bits,
            seen: HashSet::new(),
        }
    }

    /// Returns the bit-array length.
    pub fn num_bits(&self) -> u64 {
        self.num_bits
    }

    /// Returns the number of bits currently set.
    pub fn bits_used(&self) -> u64 {
        self.words.iter().map(|word| word.count_ones() as u64).sum()
    }

    /// Returns the number of distinct identifiers admitted so far.
    pub fn distinct_seen(&self) -> usize {
        self.seen.len()
    }

    /// Queries the filter without mutating it.
    ///
    /// `false` means the identifier was definitely never inserted; `true`
    /// means it possibly was.
    pub fn contains(&self, identifier: &str) -> bool {
        let key = self.family.key(identifier);
        (0..self.family.len()).all(|i| self.bit(self.family.value_at(i, key)))
    }

    /// Presents one identifier to the filter and classifies the outcome.
    ///
    /// Repeats (per the exact side-set) are skipped without touching the
    /// bits. For a first-occurrence, the filter either flags a false
    /// positive (all bits already set) or sets all of its bits.
    pub fn test_and_add(&mut self, identifier: &str) -> TestOutcome {
        if self.seen.contains(identifier) {
            return TestOutcome::Repeat;
        }
        self.seen.insert(identifier.to_string());

        let values = self.family.values(identifier);
        if values.iter().all(|&value| self.bit(value)) {
            return TestOutcome::FalsePositive;
        }
        for &value in &values {
            self.set_bit(value);
        }
        TestOutcome::Inserted
    }

    /// Feeds a whole batch through [`MembershipFilter::test_and_add`] and
    /// tallies the outcomes.
    pub fn observe_batch(&mut self, batch: &[String]) -> BatchTally {
        let mut tally = BatchTally::default();
        for identifier in batch {
            match self.test_and_add(identifier) {
                TestOutcome::Repeat => tally.repeats += 1,
                TestOutcome::FalsePositive => tally.false_positives += 1,
                TestOutcome::Inserted => tally.true_negatives += 1,
            }
        }
        tally
    }

    fn bit(&self, index: u64) -> bool {
        (self.words[(index / 64) as usize] >> (index % 64)) & 1 == 1
    }

    fn set_bit(&mut self, index: u64) {
        self.words[(index / 64) as usize] |= 1u64 << (index % 64);
    }
}
