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

//! The build and check operations behind the command line.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;
use ccbf::bloom::BloomFilter;
use ccbf::bloom::BloomFilterBuilder;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::words::insert_dictionary;
use crate::words::misspelled_words;

/// Builds a filter sized for `expected_insertions` words at false positive probability
/// `epsilon` from the dictionary at `dictionary`, and saves it to `output`.
pub fn build_filter(
    dictionary: &Path,
    output: &Path,
    expected_insertions: u64,
    epsilon: f64,
) -> anyhow::Result<BloomFilter> {
    let mut filter = BloomFilterBuilder::with_accuracy(expected_insertions, epsilon)?.build();
    debug!(
        capacity = filter.capacity(),
        num_hashes = filter.num_hashes(),
        expected_insertions,
        epsilon,
        "sized bloom filter"
    );

    let file = File::open(dictionary)
        .with_context(|| format!("cannot open dictionary {}", dictionary.display()))?;
    let inserted = insert_dictionary(BufReader::new(file), &mut filter)
        .with_context(|| format!("cannot read dictionary {}", dictionary.display()))?;
    info!(
        inserted,
        bits_used = filter.bits_used(),
        dictionary = %dictionary.display(),
        "loaded dictionary"
    );
    if inserted > expected_insertions {
        warn!(
            inserted,
            expected_insertions,
            "dictionary is larger than the filter was sized for"
        );
    }

    let file = File::create(output)
        .with_context(|| format!("cannot create bloom filter file {}", output.display()))?;
    filter
        .write_to(BufWriter::new(file))
        .with_context(|| format!("cannot write bloom filter file {}", output.display()))?;
    info!(path = %output.display(), "saved bloom filter");

    Ok(filter)
}

/// Loads the filter stored at `filter_path` and returns the distinct words of `document` it
/// does not contain.
pub fn check_document(filter_path: &Path, document: &Path) -> anyhow::Result<BTreeSet<String>> {
    let file = File::open(filter_path)
        .with_context(|| format!("cannot open bloom filter file {}", filter_path.display()))?;
    let filter = BloomFilter::read_from(BufReader::new(file))
        .with_context(|| format!("cannot load bloom filter file {}", filter_path.display()))?;
    debug!(
        capacity = filter.capacity(),
        num_hashes = filter.num_hashes(),
        bits_used = filter.bits_used(),
        "loaded bloom filter"
    );

    let file = File::open(document)
        .with_context(|| format!("cannot open document {}", document.display()))?;
    let misspelled = misspelled_words(BufReader::new(file), &filter)
        .with_context(|| format!("cannot read document {}", document.display()))?;
    info!(
        misspelled = misspelled.len(),
        document = %document.display(),
        "checked document"
    );

    Ok(misspelled)
}
