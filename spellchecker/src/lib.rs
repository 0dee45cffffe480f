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

//! Find spelling errors in a document using a [`ccbf`] Bloom filter.
//!
//! A dictionary is loaded line by line into a filter that is persisted in the `CCBF` format.
//! Checking a document splits it into words, normalizes each word and reports the words the
//! filter has definitely never seen.
//!
//! ```
//! use ccbf::bloom::BloomFilterBuilder;
//! use spellchecker::insert_dictionary;
//! use spellchecker::misspelled_words;
//!
//! let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01)?.build();
//! insert_dictionary("the\nquick\nfox\n".as_bytes(), &mut filter)?;
//!
//! let misspelled = misspelled_words("The quikc fox!".as_bytes(), &filter)?;
//! assert_eq!(misspelled.into_iter().collect::<Vec<_>>(), vec!["quikc"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod commands;
pub mod error;
pub mod words;

pub use self::commands::build_filter;
pub use self::commands::check_document;
pub use self::error::exit_code_for_error;
pub use self::error::CliExitCode;
pub use self::words::insert_dictionary;
pub use self::words::misspelled_words;
pub use self::words::normalize_word;

/// Filter file used when `--bloom-filter` is not given.
pub const DEFAULT_BLOOM_FILTER_FILE: &str = "words.bf";
/// False positive probability used when `--epsilon` is not given.
pub const DEFAULT_EPSILON: f64 = 0.01;
/// Number of dictionary words the filter is sized for by default.
pub const EXPECTED_INSERTIONS: u64 = 500_000;
