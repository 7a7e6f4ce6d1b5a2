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

//! Flajolet-Martin distinct-count estimation.
//!
//! Each hash function contributes an estimate `2^r`, where `r` is the
//! maximum trailing-zero count observed in that function's output across a
//! batch. Estimates are averaged within fixed-size groups and the median of
//! the group means is reported: averaging controls variance, the median
//! controls outlier sensitivity.
//!
//! Unlike the membership filter, the estimator scores every batch from a
//! clean slate; its counters live only for the duration of one
//! [`FlajoletMartin::estimate_batch`] call.
//!
//! # Usage
//!
//! ```rust
//! # use rand::SeedableRng;
//! # use rand::rngs::StdRng;
//! # use streamsketch::cardinality::FlajoletMartin;
//! # use streamsketch::hash::HashFamily;
//! let mut rng = StdRng::seed_from_u64(553);
//! let family = HashFamily::generate(&mut rng, 50, 600).unwrap();
//! let estimator = FlajoletMartin::new(family, 5);
//!
//! let batch: Vec<String> = (0..300).map(|i| format!("user-{i}")).collect();
//! let scored = estimator.estimate_batch(&batch);
//! assert_eq!(scored.ground_truth, 300);
//! assert!(scored.estimate >= 0.0);
//! ```

mod sketch;
pub use self::sketch::BatchEstimate;
pub use self::sketch::FlajoletMartin;

/// Default number of hash functions for the estimator.
pub const DEFAULT_NUM_HASHES: usize = 50;

/// Default hash range for the estimator.
pub const DEFAULT_HASH_RANGE: u64 = 600;

/// Default group size for median-of-means combination.
pub const DEFAULT_GROUP_SIZE: usize = 5;
