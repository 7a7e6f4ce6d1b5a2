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

use rand::Rng;

/// Uniform fixed-capacity reservoir sampler over identifier strings.
///
/// The first `capacity` offers fill the buffer in order. The `n`-th offer
/// thereafter is accepted with probability `capacity / n` and, when
/// accepted, replaces a uniformly chosen slot. After `n` offers every
/// identifier seen has probability `capacity / n` of being in the buffer.
///
/// Randomness comes from the injected generator, never from global state;
/// one probability draw per offer, plus one index draw on acceptance, so a
/// seeded run is reproducible draw-for-draw.
#[derive(Debug, Clone)]
pub struct ReservoirSampler {
    capacity: usize,
    buffer: Vec<String>,
    total_seen: u64,
}

impl ReservoirSampler {
    /// Creates an empty sampler with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            capacity,
            buffer: Vec::with_capacity(capacity),
            total_seen: 0,
        }
    }

    /// Offers one identifier to the sampler.
    pub fn offer<R: Rng + ?Sized>(&mut self, rng: &mut R, identifier: String) {
        self.total_seen += 1;
        if self.buffer.len() < self.capacity {
            self.buffer.push(identifier);
            return;
        }
        let accept = rng.random::<f64>();
        if accept < self.capacity as f64 / self.total_seen as f64 {
            let slot = rng.random_range(0..self.capacity);
            self.buffer[slot] = identifier;
        }
    }

    /// Returns the current sample, in insertion order except for replaced
    /// slots.
    pub fn sample(&self) -> &[String] {
        &self.buffer
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of identifiers currently held.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no identifier has been offered yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns true once the buffer holds `capacity` identifiers.
    pub fn is_full(&self) -> bool {
        self.buffer.len() >= self.capacity
    }

    /// Returns the total number of identifiers ever offered.
    pub fn total_seen(&self) -> u64 {
        self.total_seen
    }

    /// Returns the probability that any previously offered identifier is
    /// still in the buffer.
    pub fn sampling_probability(&self) -> f64 {
        if self.total_seen == 0 {
            0.0
        } else {
            (self.capacity as f64 / self.total_seen as f64).min(1.0)
        }
    }

    /// Returns the buffer values at indices `0, stride, 2 * stride, ...`
    /// without side effects on sampler state.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero.
    pub fn snapshot(&self, stride: usize) -> Vec<&str> {
        assert!(stride > 0, "stride must be positive");
        self.buffer.iter().step_by(stride).map(String::as_str).collect()
    }
}
