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

//! Approximate-membership filtering with observable error rates.
//!
//! The filter answers "possibly present" or "definitely absent" with
//! one-sided error: false positives are possible, false negatives are not.
//! Alongside the bit array it keeps an exact side-set of every identifier
//! admitted, used purely to classify filter claims as true negatives or
//! false positives for measurement.
//!
//! # Usage
//!
//! ```rust
//! # use rand::SeedableRng;
//! # use rand::rngs::StdRng;
//! # use streamsketch::hash::HashFamily;
//! # use streamsketch::membership::{MembershipFilter, TestOutcome};
//! let mut rng = StdRng::seed_from_u64(553);
//! let family = HashFamily::generate(&mut rng, 20, 69_997).unwrap();
//! let mut filter = MembershipFilter::new(family);
//!
//! assert_eq!(filter.test_and_add("u1"), TestOutcome::Inserted);
//! assert_eq!(filter.test_and_add("u1"), TestOutcome::Repeat);
//! assert!(filter.contains("u1"));
//! ```

mod filter;
pub use self::filter::BatchTally;
pub use self::filter::MembershipFilter;
pub use self::filter::TestOutcome;

/// Default bit-array length for the filter.
pub const DEFAULT_FILTER_BITS: u64 = 69_997;

/// Default number of hash functions for the filter.
pub const DEFAULT_NUM_HASHES: usize = 20;
