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

//! Seeded MurmurHash3 x64-128 hash family.
//!
//! A Bloom filter needs several independent-looking hash functions. This module derives them
//! from a single algorithm by varying the seed: [`HashFunction::new(i)`](HashFunction::new)
//! is the `i`-th member of the family.
//!
//! ```
//! # use ccbf::hash::HashFunction;
//! let first = HashFunction::new(0);
//! let second = HashFunction::new(1);
//! assert_ne!(first.hash(b"apple"), second.hash(b"apple"));
//! assert_eq!(first.hash(b"apple"), HashFunction::new(0).hash(b"apple"));
//! ```

mod murmurhash;

use std::hash::Hasher;

pub use self::murmurhash::MurmurHash3X64128;

/// Length in bytes of a [`HashFunction`] digest.
pub const DIGEST_LEN: usize = 16;

/// One seeded member of the MurmurHash3 x64-128 family.
///
/// The 32-bit seed is sign-extended to the 64-bit accumulators of the algorithm, so digests
/// are interchangeable with other implementations that take a signed 32-bit seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashFunction {
    seed: i32,
}

impl HashFunction {
    /// Creates the hash function with the given seed.
    pub const fn new(seed: i32) -> Self {
        HashFunction { seed }
    }

    /// Returns the seed of this hash function.
    pub const fn seed(&self) -> i32 {
        self.seed
    }

    /// Computes the 16-byte digest of `key`.
    ///
    /// The digest is `h1` followed by `h2`, both little-endian. Any input, including the empty
    /// slice, is accepted.
    pub fn hash(&self, key: &[u8]) -> [u8; DIGEST_LEN] {
        let mut hasher = MurmurHash3X64128::with_seed(i64::from(self.seed) as u64);
        hasher.write(key);
        hasher.digest()
    }
}

/// Computes MurmurHash3 x64-128 of `key` in one call, returning `(h1, h2)`.
pub fn murmurhash3_x64_128(key: &[u8], seed: u64) -> (u64, u64) {
    let mut hasher = MurmurHash3X64128::with_seed(seed);
    hasher.write(key);
    hasher.finish128()
}
