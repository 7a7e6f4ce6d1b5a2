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

//! Command-line drivers for the three streaming estimators.
//!
//! Usage: streamsketch <COMMAND> [OPTIONS]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use streamsketch::cardinality::{self, FlajoletMartin};
use streamsketch::driver::StreamDriver;
use streamsketch::error::Error;
use streamsketch::hash::HashFamily;
use streamsketch::membership::{self, MembershipFilter};
use streamsketch::sampling::{self, ReservoirSampler};
use streamsketch::stream::FileSource;

/// Default seed for the run's random number generator.
const DEFAULT_SEED: u64 = 553;

#[derive(Parser)]
#[command(name = "streamsketch")]
#[command(version)]
#[command(
    about = "Streaming estimators over batched identifier streams",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Track approximate membership and report per-batch false-positive rates
    Filter(RunArgs),
    /// Estimate per-batch distinct counts with a Flajolet-Martin sketch
    Distinct(RunArgs),
    /// Maintain a fixed-size uniform sample and report periodic snapshots
    Sample(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Identifier file backing the stream source (one identifier per line)
    #[arg(short, long)]
    input: PathBuf,

    /// Identifiers per batch (default depends on the command)
    #[arg(long)]
    batch_size: Option<usize>,

    /// Number of batches to process (default depends on the command)
    #[arg(long)]
    batches: Option<usize>,

    /// Output CSV path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for the run's random number generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Filter(args) => run_filter(args),
        Commands::Distinct(args) => run_distinct(args),
        Commands::Sample(args) => run_sample(args),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run_filter(args: RunArgs) -> Result<(), Error> {
    let batch_size = args.batch_size.unwrap_or(100);
    let batches = args.batches.unwrap_or(30);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let family = HashFamily::generate(
        &mut rng,
        membership::DEFAULT_NUM_HASHES,
        membership::DEFAULT_FILTER_BITS,
    )?;
    let mut filter = MembershipFilter::new(family);
    let source = FileSource::open(&args.input, args.seed)?;
    let mut out = open_output(args.output.as_deref())?;

    StreamDriver::new(source, batch_size, batches).run_filter(&mut filter, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run_distinct(args: RunArgs) -> Result<(), Error> {
    let batch_size = args.batch_size.unwrap_or(300);
    let batches = args.batches.unwrap_or(30);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let family = HashFamily::generate(
        &mut rng,
        cardinality::DEFAULT_NUM_HASHES,
        cardinality::DEFAULT_HASH_RANGE,
    )?;
    let estimator = FlajoletMartin::new(family, cardinality::DEFAULT_GROUP_SIZE);
    let source = FileSource::open(&args.input, args.seed)?;
    let mut out = open_output(args.output.as_deref())?;

    let summary =
        StreamDriver::new(source, batch_size, batches).run_cardinality(&estimator, &mut out)?;
    out.flush()?;
    eprintln!("estimate/truth ratio: {}", summary.ratio());
    Ok(())
}

fn run_sample(args: RunArgs) -> Result<(), Error> {
    let batch_size = args.batch_size.unwrap_or(100);
    let batches = args.batches.unwrap_or(100);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut sampler = ReservoirSampler::new(sampling::DEFAULT_CAPACITY);
    let source = FileSource::open(&args.input, args.seed)?;
    let mut out = open_output(args.output.as_deref())?;

    StreamDriver::new(source, batch_size, batches).run_sampler(&mut sampler, &mut rng, &mut out)?;
    out.flush()?;
    Ok(())
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, Error> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
