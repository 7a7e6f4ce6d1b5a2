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

//! Batch-delivering identifier sources.
//!
//! A [`StreamSource`] hands the driver one batch per request. A batch is
//! delivered whole or the call fails; there are no partial batches.

use std::fs;
use std::path::Path;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Error;

/// A source of identifier batches.
pub trait StreamSource {
    /// Fetches the next batch of exactly `size` identifiers.
    ///
    /// Fails with a `StreamExhausted` error when a full batch cannot be
    /// delivered; in that case no identifiers are consumed.
    fn fetch_batch(&mut self, size: usize) -> Result<Vec<String>, Error>;
}

/// File-backed source that draws each batch by uniform random sampling
/// (with replacement) from the identifiers in the backing file.
///
/// The whole file is loaded once at open, one identifier per line. The
/// source carries its own seeded generator so it can be asked for any
/// number of batches.
#[derive(Debug)]
pub struct FileSource {
    pool: Vec<String>,
    rng: StdRng,
}

impl FileSource {
    /// Opens the identifier file and seeds the source's generator.
    pub fn open(path: &Path, seed: u64) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|source| Error::io("failed to read identifier file", source))?;
        let pool = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self {
            pool,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Returns the number of identifiers in the backing pool.
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }
}

impl StreamSource for FileSource {
    fn fetch_batch(&mut self, size: usize) -> Result<Vec<String>, Error> {
        if self.pool.is_empty() {
            return Err(Error::stream_exhausted(size, 0));
        }
        Ok((0..size)
            .map(|_| self.pool[self.rng.random_range(0..self.pool.len())].clone())
            .collect())
    }
}

/// In-memory source that delivers a fixed pool sequentially.
///
/// Deterministic and duplicate-preserving, which makes it the natural
/// source for tests and for replaying a recorded stream.
#[derive(Debug, Clone)]
pub struct MemorySource {
    pool: Vec<String>,
    cursor: usize,
}

impl MemorySource {
    /// Creates a source over the given pool.
    pub fn new(pool: Vec<String>) -> Self {
        Self { pool, cursor: 0 }
    }

    /// Returns the number of identifiers not yet delivered.
    pub fn remaining(&self) -> usize {
        self.pool.len() - self.cursor
    }
}

impl StreamSource for MemorySource {
    fn fetch_batch(&mut self, size: usize) -> Result<Vec<String>, Error> {
        if self.remaining() < size {
            return Err(Error::stream_exhausted(size, self.remaining()));
        }
        let batch = self.pool[self.cursor..self.cursor + size].to_vec();
        self.cursor += size;
        Ok(batch)
    }
}
