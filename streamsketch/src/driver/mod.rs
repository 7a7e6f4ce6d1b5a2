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

//! Batch-sequential driver loop.
//!
//! The driver fetches one batch at a time from a [`StreamSource`], feeds it
//! through a single algorithm instance, and writes one CSV row per batch
//! (or per sampling milestone) to the output sink. Each batch is processed
//! atomically with respect to observable state: a fetch failure or an early
//! stop leaves every already-emitted row valid.

use std::io::Write;

use rand::Rng;

use crate::cardinality::{BatchEstimate, FlajoletMartin};
use crate::error::Error;
use crate::membership::MembershipFilter;
use crate::sampling::ReservoirSampler;
use crate::stream::StreamSource;

/// Number of sample columns in a reservoir snapshot row.
const SNAPSHOT_COLUMNS: usize = 5;

/// Outcome of a membership-filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    /// Batches processed.
    pub batches: usize,
    /// Rows whose false-positive rate was undefined (no first-occurrences)
    /// and reported as `NaN`.
    pub undefined_rates: usize,
}

/// Outcome of a cardinality run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardinalitySummary {
    /// Sum of exact distinct counts over all batches.
    pub total_ground_truth: u64,
    /// Sum of combined estimates over all batches.
    pub total_estimate: f64,
}

impl CardinalitySummary {
    /// Returns the aggregate estimate-to-truth ratio.
    ///
    /// Roughly within `[0.2, 5]` for a healthy configuration; `NaN` when
    /// nothing was counted.
    pub fn ratio(&self) -> f64 {
        if self.total_ground_truth == 0 {
            f64::NAN
        } else {
            self.total_estimate / self.total_ground_truth as f64
        }
    }

    fn absorb(&mut self, scored: &BatchEstimate) {
        self.total_ground_truth += scored.ground_truth;
        self.total_estimate += scored.estimate;
    }
}

/// Drives one algorithm over a fixed number of fixed-size batches.
#[derive(Debug)]
pub struct StreamDriver<S> {
    source: S,
    batch_size: usize,
    num_batches: usize,
}

impl<S: StreamSource> StreamDriver<S> {
    /// Creates a driver that will request `num_batches` batches of
    /// `batch_size` identifiers from `source`.
    ///
    /// # Panics
    ///
    /// Panics if `batch_size` is zero.
    pub fn new(source: S, batch_size: usize, num_batches: usize) -> Self {
        assert!(batch_size > 0, "batch_size must be positive");
        Self {
            source,
            batch_size,
            num_batches,
        }
    }

    /// Runs the membership filter, one row per batch: `Time,FPR`.
    ///
    /// A batch with no first-occurrences has no defined rate; its row
    /// reports `NaN` and is counted in the summary.
    pub fn run_filter<W: Write>(
        mut self,
        filter: &mut MembershipFilter,
        out: &mut W,
    ) -> Result<FilterSummary, Error> {
        writeln!(out, "Time,FPR")?;
        let mut undefined_rates = 0;
        for batch_index in 0..self.num_batches {
            let batch = self.source.fetch_batch(self.batch_size)?;
            let tally = filter.observe_batch(&batch);
            match tally.false_positive_rate() {
                Some(rate) => writeln!(out, "{batch_index},{rate}")?,
                None => {
                    undefined_rates += 1;
                    writeln!(out, "{batch_index},NaN")?;
                }
            }
        }
        Ok(FilterSummary {
            batches: self.num_batches,
            undefined_rates,
        })
    }

    /// Runs the cardinality estimator, one row per batch:
    /// `Time,Ground Truth,Estimation` (estimate integer-truncated).
    pub fn run_cardinality<W: Write>(
        mut self,
        estimator: &FlajoletMartin,
        out: &mut W,
    ) -> Result<CardinalitySummary, Error> {
        writeln!(out, "Time,Ground Truth,Estimation")?;
        let mut summary = CardinalitySummary {
            total_ground_truth: 0,
            total_estimate: 0.0,
        };
        for batch_index in 0..self.num_batches {
            let batch = self.source.fetch_batch(self.batch_size)?;
            let scored = estimator.estimate_batch(&batch);
            writeln!(
                out,
                "{},{},{}",
                batch_index,
                scored.ground_truth,
                scored.estimate as u64
            )?;
            summary.absorb(&scored);
        }
        Ok(summary)
    }

    /// Runs the reservoir sampler.
    ///
    /// Every identifier is offered in batch order. After each batch, when
    /// the running total is a positive multiple of the sampler's capacity,
    /// one snapshot row is written: the total followed by the buffer values
    /// at stride `capacity / 5`.
    pub fn run_sampler<W, R>(
        mut self,
        sampler: &mut ReservoirSampler,
        rng: &mut R,
        out: &mut W,
    ) -> Result<(), Error>
    where
        W: Write,
        R: Rng + ?Sized,
    {
        let stride = (sampler.capacity() / SNAPSHOT_COLUMNS).max(1);
        write!(out, "seqnum")?;
        let mut index = 0;
        while index < sampler.capacity() {
            write!(out, ",{index}_id")?;
            index += stride;
        }
        writeln!(out)?;

        for _ in 0..self.num_batches {
            let batch = self.source.fetch_batch(self.batch_size)?;
            for identifier in batch {
                sampler.offer(rng, identifier);
            }
            let total = sampler.total_seen();
            if total > 0 && total % sampler.capacity() as u64 == 0 {
                writeln!(out, "{},{}", total, sampler.snapshot(stride).join(","))?;
            }
        }
        Ok(())
    }
}
