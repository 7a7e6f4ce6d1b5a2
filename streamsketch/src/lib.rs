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

//! Streaming estimators for batched identifier streams.
//!
//! The crate processes an unbounded sequence of string identifiers arriving
//! in fixed-size batches and trades exactness for bounded memory in three
//! different ways:
//!
//! - [`membership::MembershipFilter`] answers "have I seen this identifier
//!   before?" with one-sided error (false positives only) in sub-linear
//!   space, and measures its own per-batch false-positive rate against an
//!   exact side-set.
//! - [`cardinality::FlajoletMartin`] estimates the number of distinct
//!   identifiers in a batch from trailing-zero patterns of hashed values,
//!   combined with median-of-means.
//! - [`sampling::ReservoirSampler`] maintains a fixed-capacity uniform
//!   sample of everything offered so far.
//!
//! The filter and the estimator share [`hash::HashFamily`], a set of `k`
//! independent affine hash functions over a bounded range. The
//! [`driver::StreamDriver`] loop feeds batches from a
//! [`stream::StreamSource`] into one algorithm and writes one CSV row per
//! batch (or per sampling milestone).
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use streamsketch::hash::HashFamily;
//! use streamsketch::membership::MembershipFilter;
//!
//! let mut rng = StdRng::seed_from_u64(553);
//! let family = HashFamily::generate(&mut rng, 20, 69_997).unwrap();
//! let mut filter = MembershipFilter::new(family);
//!
//! let tally = filter.observe_batch(&["u1".into(), "u2".into(), "u1".into()]);
//! assert_eq!(tally.first_occurrences(), 2);
//! assert_eq!(tally.false_positive_rate(), Some(0.0));
//! ```
//!
//! All randomness is drawn from an explicitly seeded generator handed into
//! each component, so whole runs are reproducible from a single seed.

pub mod cardinality;
pub mod driver;
pub mod error;
pub mod hash;
pub mod membership;
pub mod sampling;
pub mod stream;
