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

//! Turning dictionaries and documents into filter inserts and queries.

use std::collections::BTreeSet;
use std::io;
use std::io::BufRead;

use ccbf::bloom::BloomFilter;

/// Normalizes a token into a dictionary word.
///
/// Every character outside `[A-Za-z0-9]` is dropped and the rest is lowercased. The result may
/// be empty.
///
/// ```
/// # use spellchecker::normalize_word;
/// assert_eq!(normalize_word("Don't!"), "dont");
/// assert_eq!(normalize_word("--"), "");
/// ```
pub fn normalize_word(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Splits a line into normalized, non-empty words.
pub fn words(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(is_word_separator)
        .map(normalize_word)
        .filter(|word| !word.is_empty())
}

// space, \t, \n, vertical tab, form feed, \r
fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Inserts every line of `dictionary` into `filter` verbatim, returning the number of lines.
///
/// Lines are not normalized: a dictionary is expected to hold lowercase words already.
///
/// # Errors
///
/// Returns the reader's error, including invalid UTF-8.
pub fn insert_dictionary<R: BufRead>(dictionary: R, filter: &mut BloomFilter) -> io::Result<u64> {
    let mut inserted = 0;
    for line in dictionary.lines() {
        filter.insert(line?);
        inserted += 1;
    }
    Ok(inserted)
}

/// Returns the distinct words of `document` that `filter` does not contain.
///
/// # Errors
///
/// Returns the reader's error, including invalid UTF-8.
pub fn misspelled_words<R: BufRead>(
    document: R,
    filter: &BloomFilter,
) -> io::Result<BTreeSet<String>> {
    let mut misspelled = BTreeSet::new();
    for line in document.lines() {
        let line = line?;
        misspelled.extend(words(&line).filter(|word| !filter.contains(word)));
    }
    Ok(misspelled)
}
