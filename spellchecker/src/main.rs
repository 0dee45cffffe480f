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

use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Parser;
use spellchecker::build_filter;
use spellchecker::check_document;
use spellchecker::exit_code_for_error;
use spellchecker::CliExitCode;
use spellchecker::DEFAULT_BLOOM_FILTER_FILE;
use spellchecker::DEFAULT_EPSILON;
use spellchecker::EXPECTED_INSERTIONS;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Build a Bloom filter from a dictionary and check documents for spelling errors.
#[derive(Debug, Parser)]
#[command(name = "spellchecker", version, about)]
struct Cli {
    /// Dictionary file to build the Bloom filter from, one word per line
    #[arg(long, value_name = "FILE")]
    build: Option<PathBuf>,

    /// False positive probability of the built filter
    #[arg(long, value_name = "NUMBER", default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Number of words the built filter is sized for
    #[arg(long, value_name = "N", default_value_t = EXPECTED_INSERTIONS)]
    expected_insertions: u64,

    /// Bloom filter file to save to or load from
    #[arg(
        long,
        value_name = "FILE",
        env = "SPELLCHECKER_BLOOM_FILTER",
        default_value = DEFAULT_BLOOM_FILTER_FILE
    )]
    bloom_filter: PathBuf,

    /// Document to check for spelling errors
    #[arg(long, value_name = "FILE")]
    check: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                CliExitCode::Usage
            } else {
                CliExitCode::Success
            };
            // help and version go to stdout, parse failures to stderr
            let _ = err.print();
            return code.into();
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => CliExitCode::Success.into(),
        Err(err) => {
            let code = exit_code_for_error(&err);
            eprintln!("{}: {err:#}", code.label());
            code.into()
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.build.is_none() && cli.check.is_none() {
        warn!("nothing to do, pass --build and/or --check");
        return Ok(());
    }

    if let Some(dictionary) = &cli.build {
        build_filter(
            dictionary,
            &cli.bloom_filter,
            cli.expected_insertions,
            cli.epsilon,
        )?;
        println!(
            "Bloom filter created successfully and saved to: {}",
            cli.bloom_filter.display()
        );
    }

    if let Some(document) = &cli.check {
        let misspelled = check_document(&cli.bloom_filter, document)?;
        println!(
            "Found {} spelling errors in {}: {}",
            misspelled.len(),
            document.display(),
            misspelled.into_iter().collect::<Vec<_>>().join(", ")
        );
    }

    Ok(())
}
