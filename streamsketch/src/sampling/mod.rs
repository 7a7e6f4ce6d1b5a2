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

//! Uniform fixed-capacity sampling from an unbounded stream.
//!
//! # Usage
//!
//! ```rust
//! # use rand::SeedableRng;
//! # use rand::rngs::StdRng;
//! # use streamsketch::sampling::ReservoirSampler;
//! let mut rng = StdRng::seed_from_u64(553);
//! let mut sampler = ReservoirSampler::new(100);
//!
//! for i in 0..250 {
//!     sampler.offer(&mut rng, format!("user-{i}"));
//! }
//! assert_eq!(sampler.len(), 100);
//! assert_eq!(sampler.total_seen(), 250);
//! ```

mod reservoir;
pub use self::reservoir::ReservoirSampler;

/// Default sample capacity.
pub const DEFAULT_CAPACITY: usize = 100;
