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

//! Bloom filter for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If an item was inserted, `contains()` will always return `true`
//! - **Possible false positives**: `contains()` may return `true` for items never inserted
//! - **Fixed size**: the number of bits and hash functions never change after construction
//! - **Insert only**: bits are set by inserts and never cleared
//!
//! # Usage
//!
//! ```rust
//! use ccbf::bloom::BloomFilterBuilder;
//!
//! // Create a filter sized for 1000 items with 1% false positive rate
//! let mut filter = BloomFilterBuilder::with_accuracy(1000, 0.01)?.build();
//!
//! filter.insert("apple");
//! filter.insert(b"banana");
//!
//! assert!(filter.contains("apple"));
//! assert!(!filter.contains("grape"));
//!
//! println!("Capacity: {} bits", filter.capacity());
//! println!("Bits used: {}", filter.bits_used());
//! println!("Est. FPP: {:.4}%", filter.estimated_fpp() * 100.0);
//! # Ok::<(), ccbf::error::Error>(())
//! ```
//!
//! # Persistence
//!
//! Filters are stored in the `CCBF` format: a 12-byte big-endian header followed by the raw
//! bit array.
//!
//! ```text
//! Offset | Size               | Field
//! -------+--------------------+-------------------------------
//!      0 | 4                  | magic identifier "CCBF"
//!      4 | 2                  | format version, always 1
//!      6 | 2                  | number of hash functions
//!      8 | 4                  | number of bits (signed 32-bit)
//!     12 | ceil(num_bits / 8) | bit array
//! ```
//!
//! ```rust
//! # use ccbf::bloom::{BloomFilter, BloomFilterBuilder};
//! let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01)?.build();
//! filter.insert("test");
//!
//! let mut file = Vec::new();
//! filter.write_to(&mut file)?;
//!
//! let restored = BloomFilter::read_from(file.as_slice())?;
//! assert!(restored.contains("test"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Implementation Details
//!
//! - Hash function `i` is MurmurHash3 x64-128 seeded with `i`
//! - The 16-byte digest is read as a big-endian unsigned integer and reduced modulo the
//!   number of bits
//! - Bits within a byte are addressed most significant bit first
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with allowable errors"

mod builder;
mod filter;

pub use self::builder::BloomFilterBuilder;
pub use self::builder::MAX_NUM_BITS;
pub use self::builder::MAX_NUM_HASHES;
pub use self::builder::MIN_NUM_BITS;
pub use self::builder::MIN_NUM_HASHES;
pub use self::filter::BloomFilter;
