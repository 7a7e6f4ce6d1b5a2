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

use googletest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use streamsketch::cardinality::FlajoletMartin;
use streamsketch::hash::HashFamily;

fn default_estimator(seed: u64) -> FlajoletMartin {
    let mut rng = StdRng::seed_from_u64(seed);
    let family = HashFamily::generate(&mut rng, 50, 600).unwrap();
    FlajoletMartin::new(family, 5)
}

#[gtest]
fn test_scenario_300_distinct() {
    let estimator = default_estimator(553);
    assert_that!(estimator.num_hashes(), eq(50));
    assert_that!(estimator.num_groups(), eq(10));

    let batch: Vec<String> = (0..300).map(|i| format!("user-{i}")).collect();
    let scored = estimator.estimate_batch(&batch);

    assert_that!(scored.ground_truth, eq(300));
    assert_that!(scored.estimate, ge(0.0));
    assert!(scored.estimate.is_finite());
    // Emitted value is integer-truncated and non-negative.
    let emitted = scored.estimate as u64;
    assert_that!(emitted as f64, le(scored.estimate));
}

#[gtest]
fn test_ground_truth_counts_distinct_only() {
    let estimator = default_estimator(553);
    let batch: Vec<String> = ["u1", "u2", "u1", "u3", "u2", "u1"]
        .iter()
        .map(|id| id.to_string())
        .collect();
    let scored = estimator.estimate_batch(&batch);
    assert_that!(scored.ground_truth, eq(3));
}

#[gtest]
fn test_batches_are_scored_independently() {
    let estimator = default_estimator(553);
    let large: Vec<String> = (0..1000).map(|i| format!("big-{i}")).collect();
    let small: Vec<String> = (0..4).map(|i| format!("small-{i}")).collect();

    let small_alone = estimator.estimate_batch(&small);
    estimator.estimate_batch(&large);
    let small_after = estimator.estimate_batch(&small);

    // Counters are per-call; a heavy batch must not inflate a later one.
    assert_that!(small_after.estimate, eq(small_alone.estimate));
    assert_that!(small_after.ground_truth, eq(4));
}

#[gtest]
fn test_aggregate_ratio_over_many_batches() {
    let estimator = default_estimator(553);
    let mut total_truth = 0u64;
    let mut total_estimate = 0.0f64;

    for round in 0..30 {
        let batch: Vec<String> = (0..300).map(|i| format!("r{round}-u{i}")).collect();
        let scored = estimator.estimate_batch(&batch);
        assert_that!(scored.ground_truth, eq(300));
        total_truth += scored.ground_truth;
        total_estimate += scored.estimate;
    }

    // Statistical expectation, generous by design.
    let ratio = total_estimate / total_truth as f64;
    assert_that!(ratio, gt(0.2));
    assert_that!(ratio, lt(5.0));
}

#[test]
#[should_panic(expected = "divisible by group_size")]
fn test_group_size_must_divide_num_hashes() {
    let mut rng = StdRng::seed_from_u64(553);
    let family = HashFamily::generate(&mut rng, 50, 600).unwrap();
    FlajoletMartin::new(family, 7);
}

#[test]
#[should_panic(expected = "group_size must be at least 1")]
fn test_group_size_must_be_positive() {
    let mut rng = StdRng::seed_from_u64(553);
    let family = HashFamily::generate(&mut rng, 50, 600).unwrap();
    FlajoletMartin::new(family, 0);
}
