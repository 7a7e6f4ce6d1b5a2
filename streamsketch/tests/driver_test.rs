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

use rand::SeedableRng;
use rand::rngs::StdRng;
use streamsketch::cardinality::FlajoletMartin;
use streamsketch::driver::StreamDriver;
use streamsketch::error::ErrorKind;
use streamsketch::hash::HashFamily;
use streamsketch::membership::MembershipFilter;
use streamsketch::sampling::ReservoirSampler;
use streamsketch::stream::{MemorySource, StreamSource};

fn pool(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_filter_rows() {
    let mut rng = StdRng::seed_from_u64(553);
    let family = HashFamily::generate(&mut rng, 20, 69_997).unwrap();
    let mut filter = MembershipFilter::new(family);

    let source = MemorySource::new(pool(&["a", "b", "a", "c"]));
    let driver = StreamDriver::new(source, 2, 2);
    let mut out = Vec::new();
    let summary = driver.run_filter(&mut filter, &mut out).unwrap();

    // Batch 0 is ["a", "b"], batch 1 is ["a", "c"]: one repeat, one new.
    assert_eq!(lines(&out), ["Time,FPR", "0,0", "1,0"]);
    assert_eq!(summary.batches, 2);
    assert_eq!(summary.undefined_rates, 0);
}

#[test]
fn test_filter_undefined_rate_row() {
    let mut rng = StdRng::seed_from_u64(553);
    let family = HashFamily::generate(&mut rng, 20, 69_997).unwrap();
    let mut filter = MembershipFilter::new(family);

    // Second batch repeats the first identifier, so it has no
    // first-occurrences and its rate is undefined.
    let source = MemorySource::new(pool(&["a", "a"]));
    let driver = StreamDriver::new(source, 1, 2);
    let mut out = Vec::new();
    let summary = driver.run_filter(&mut filter, &mut out).unwrap();

    assert_eq!(lines(&out), ["Time,FPR", "0,0", "1,NaN"]);
    assert_eq!(summary.undefined_rates, 1);
}

#[test]
fn test_cardinality_rows_and_summary() {
    let mut rng = StdRng::seed_from_u64(553);
    let family = HashFamily::generate(&mut rng, 50, 600).unwrap();
    let estimator = FlajoletMartin::new(family, 5);

    let source = MemorySource::new(pool(&["a", "b", "c", "d", "e", "f"]));
    let driver = StreamDriver::new(source, 3, 2);
    let mut out = Vec::new();
    let summary = driver.run_cardinality(&estimator, &mut out).unwrap();

    let rows = lines(&out);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], "Time,Ground Truth,Estimation");
    for (index, row) in rows[1..].iter().enumerate() {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], index.to_string());
        assert_eq!(fields[1], "3");
        // Estimation column is a non-negative integer.
        fields[2].parse::<u64>().unwrap();
    }

    assert_eq!(summary.total_ground_truth, 6);
    assert!(summary.total_estimate >= 0.0);
    assert!(summary.ratio().is_finite());
}

#[test]
fn test_sampler_rows_at_capacity_multiples() {
    let mut rng = StdRng::seed_from_u64(553);
    let mut sampler = ReservoirSampler::new(10);

    let ids: Vec<String> = (0..25).map(|i| format!("user-{i}")).collect();
    let driver = StreamDriver::new(MemorySource::new(ids), 5, 5);
    let mut out = Vec::new();
    driver.run_sampler(&mut sampler, &mut rng, &mut out).unwrap();

    let rows = lines(&out);
    // Totals after each batch are 5, 10, 15, 20, 25; only 10 and 20 are
    // positive multiples of the capacity.
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], "seqnum,0_id,2_id,4_id,6_id,8_id");
    for (row, expected_total) in rows[1..].iter().zip(["10", "20"]) {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0], expected_total);
        for field in &fields[1..] {
            assert!(field.starts_with("user-"));
        }
    }
}

#[test]
fn test_exhausted_source_keeps_emitted_rows_valid() {
    let mut rng = StdRng::seed_from_u64(553);
    let family = HashFamily::generate(&mut rng, 20, 69_997).unwrap();
    let mut filter = MembershipFilter::new(family);

    let source = MemorySource::new(pool(&["a", "b", "c"]));
    let driver = StreamDriver::new(source, 2, 2);
    let mut out = Vec::new();
    let err = driver.run_filter(&mut filter, &mut out).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::StreamExhausted);
    // The first batch was processed atomically before the failure.
    assert_eq!(lines(&out), ["Time,FPR", "0,0"]);
    assert_eq!(filter.distinct_seen(), 2);
}

#[test]
fn test_memory_source_sequential_delivery() {
    let mut source = MemorySource::new(pool(&["a", "b", "c", "d"]));
    assert_eq!(source.fetch_batch(2).unwrap(), ["a", "b"]);
    assert_eq!(source.remaining(), 2);
    assert_eq!(source.fetch_batch(2).unwrap(), ["c", "d"]);
    let err = source.fetch_batch(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StreamExhausted);
}
