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

//! Families of independent affine hash functions over a bounded range.
//!
//! A [`HashFamily`] holds `k` coefficient pairs `(a_i, b_i)` and evaluates
//! `h_i(x) = (a_i * x + b_i) mod range` for an integer key `x` derived
//! deterministically from an identifier string. Both the membership filter
//! and the cardinality estimator consume one family; coefficients are drawn
//! once per run and immutable thereafter.

use rand::Rng;
use rand::seq::index;

use crate::error::Error;

/// A fixed set of `k` independent affine hash functions.
///
/// Coefficients are sampled without replacement from `[1, range)`, so within
/// each coefficient sequence all values are pairwise distinct.
#[derive(Debug, Clone)]
pub struct HashFamily {
    a: Vec<u64>,
    b: Vec<u64>,
    range: u64,
}

impl HashFamily {
    /// Generates a family of `count` hash functions over `[0, range)`.
    ///
    /// Returns an [`ErrorKind::InsufficientDomain`](crate::error::ErrorKind)
    /// error when `range - 1 < count`, since `count` distinct coefficients
    /// cannot be drawn from `[1, range)`.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        range: u64,
    ) -> Result<Self, Error> {
        if (range.saturating_sub(1) as usize) < count {
            return Err(Error::insufficient_domain(count, range));
        }
        let a = draw_coefficients(rng, count, range);
        let b = draw_coefficients(rng, count, range);
        Ok(Self { a, b, range })
    }

    /// Returns the number of hash functions in the family.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// Returns true if the family holds no hash functions.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Returns the hash range `M`; every hash value lies in `[0, M)`.
    pub fn range(&self) -> u64 {
        self.range
    }

    /// Derives the integer key for an identifier.
    ///
    /// The identifier's UTF-8 bytes are interpreted as a base-256 integer
    /// and reduced modulo the range as the fold proceeds. Since every hash
    /// function is affine modulo the range, this is numerically identical
    /// to hashing the full (unbounded) integer value of the byte string.
    pub fn key(&self, identifier: &str) -> u64 {
        identifier.bytes().fold(0u64, |acc, byte| {
            ((acc as u128 * 256 + byte as u128) % self.range as u128) as u64
        })
    }

    /// Evaluates the `index`-th hash function on a previously derived key.
    pub fn value_at(&self, index: usize, key: u64) -> u64 {
        ((self.a[index] as u128 * key as u128 + self.b[index] as u128)
            % self.range as u128) as u64
    }

    /// Evaluates all hash functions on an identifier.
    pub fn values(&self, identifier: &str) -> Vec<u64> {
        let key = self.key(identifier);
        (0..self.len()).map(|i| self.value_at(i, key)).collect()
    }
}

/// Draws `count` distinct values uniformly from `[1, range)`.
///
/// Uses index sampling without replacement rather than rejection, so the
/// draw terminates and stays uniform even when `count` approaches the
/// domain size.
fn draw_coefficients<R: Rng + ?Sized>(rng: &mut R, count: usize, range: u64) -> Vec<u64> {
    index::sample(rng, range.saturating_sub(1) as usize, count)
        .into_iter()
        .map(|offset| offset as u64 + 1)
        .collect()
}
