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

use std::f64::consts::LN_2;

use super::filter::hash_family;
use super::BloomFilter;
use crate::error::Error;

/// Smallest number of bits a filter may have.
pub const MIN_NUM_BITS: u64 = 1;
/// Largest number of bits a filter may have; the file format stores it as a signed 32-bit value.
pub const MAX_NUM_BITS: u64 = i32::MAX as u64;
/// Smallest number of hash functions a filter may use.
pub const MIN_NUM_HASHES: u16 = 1;
/// Largest number of hash functions a filter may use.
pub const MAX_NUM_HASHES: u16 = i16::MAX as u16;

/// Builder for creating [`BloomFilter`] instances.
///
/// Provides two construction modes:
/// - [`with_accuracy()`](Self::with_accuracy): Specify target items and false positive rate
///   (recommended)
/// - [`with_size()`](Self::with_size): Specify bit count and hash functions (manual)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilterBuilder {
    num_bits: u32,
    num_hashes: u16,
}

impl BloomFilterBuilder {
    /// Creates a builder sized for a target accuracy.
    ///
    /// # Arguments
    ///
    /// - `max_items`: Expected number of distinct items
    /// - `epsilon`: Target false positive probability (e.g., 0.01 for 1%)
    ///
    /// The number of bits is `floor(-max_items * ln(epsilon) / ln(2)^2)` and the number of
    /// hash functions is `floor(-log2(epsilon))`, each raised to at least one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`](crate::error::ErrorKind::InvalidParameter) if `epsilon` is
    /// not strictly between 0 and 1, if `max_items` is 0, or if the resulting number of bits
    /// exceeds [`MAX_NUM_BITS`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use ccbf::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_accuracy(1000, 0.01)?.build();
    /// assert_eq!(filter.capacity(), 9585);
    /// assert_eq!(filter.num_hashes(), 6);
    ///
    /// assert!(BloomFilterBuilder::with_accuracy(1000, 1.5).is_err());
    /// # Ok::<(), ccbf::error::Error>(())
    /// ```
    pub fn with_accuracy(max_items: u64, epsilon: f64) -> Result<Self, Error> {
        if !(epsilon > 0.0 && epsilon < 1.0) {
            return Err(
                Error::invalid_parameter("epsilon must be greater than 0 and less than 1")
                    .with_context("epsilon", epsilon),
            );
        }
        if max_items == 0 {
            return Err(Error::invalid_parameter("max_items must be greater than 0"));
        }

        let num_bits = Self::suggest_num_bits(max_items, epsilon).max(MIN_NUM_BITS);
        if num_bits > MAX_NUM_BITS {
            return Err(Error::invalid_parameter(format!(
                "number of bits must not exceed {MAX_NUM_BITS}"
            ))
            .with_context("max_items", max_items)
            .with_context("epsilon", epsilon)
            .with_context("num_bits", num_bits));
        }
        let num_hashes = Self::suggest_num_hashes(epsilon).clamp(MIN_NUM_HASHES, MAX_NUM_HASHES);

        Ok(BloomFilterBuilder {
            num_bits: num_bits as u32,
            num_hashes,
        })
    }

    /// Creates a builder with manual size specification.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`](crate::error::ErrorKind::InvalidParameter) if any of:
    /// - `num_bits` < [`MIN_NUM_BITS`] or `num_bits` > [`MAX_NUM_BITS`]
    /// - `num_hashes` < [`MIN_NUM_HASHES`] or `num_hashes` > [`MAX_NUM_HASHES`]
    ///
    /// # Examples
    ///
    /// ```
    /// # use ccbf::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_size(10_000, 7)?.build();
    /// assert_eq!(filter.capacity(), 10_000);
    /// # Ok::<(), ccbf::error::Error>(())
    /// ```
    pub fn with_size(num_bits: u32, num_hashes: u16) -> Result<Self, Error> {
        let bits = u64::from(num_bits);
        if !(MIN_NUM_BITS..=MAX_NUM_BITS).contains(&bits) {
            return Err(Error::invalid_parameter(format!(
                "num_bits must be between {MIN_NUM_BITS} and {MAX_NUM_BITS}"
            ))
            .with_context("num_bits", num_bits));
        }
        if !(MIN_NUM_HASHES..=MAX_NUM_HASHES).contains(&num_hashes) {
            return Err(Error::invalid_parameter(format!(
                "num_hashes must be between {MIN_NUM_HASHES} and {MAX_NUM_HASHES}"
            ))
            .with_context("num_hashes", num_hashes));
        }

        Ok(BloomFilterBuilder {
            num_bits,
            num_hashes,
        })
    }

    /// Builds the Bloom filter with every bit cleared.
    pub fn build(self) -> BloomFilter {
        let num_bytes = self.num_bits.div_ceil(8) as usize;

        BloomFilter {
            num_bits: self.num_bits,
            hash_functions: hash_family(self.num_hashes),
            num_bits_set: 0,
            bit_array: vec![0u8; num_bytes],
        }
    }

    /// Suggests the number of bits given expected items and target false positive probability.
    ///
    /// Formula: `m = floor(-n * ln(p) / (ln(2)^2))`
    /// where n = max_items, p = epsilon
    ///
    /// # Examples
    ///
    /// ```
    /// # use ccbf::bloom::BloomFilterBuilder;
    /// assert_eq!(BloomFilterBuilder::suggest_num_bits(1000, 0.01), 9585);
    /// assert_eq!(BloomFilterBuilder::suggest_num_bits(500_000, 0.01), 4_792_529);
    /// ```
    pub fn suggest_num_bits(max_items: u64, epsilon: f64) -> u64 {
        let n = max_items as f64;
        let bits = -((n * epsilon.ln()) / LN_2.powi(2));
        // float-to-int casts saturate, and truncation is floor for non-negative values
        bits as u64
    }

    /// Suggests the number of hash functions from the target false positive probability.
    ///
    /// Formula: `k = floor(-log2(p))`
    ///
    /// # Examples
    ///
    /// ```
    /// # use ccbf::bloom::BloomFilterBuilder;
    /// assert_eq!(BloomFilterBuilder::suggest_num_hashes(0.01), 6); // -log2(0.01) ≈ 6.64
    /// assert_eq!(BloomFilterBuilder::suggest_num_hashes(0.5), 1);
    /// ```
    pub fn suggest_num_hashes(epsilon: f64) -> u16 {
        let k = -(epsilon.ln() / LN_2);
        k as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_with_accuracy_sizes() {
        let builder = BloomFilterBuilder::with_accuracy(10, 0.1).unwrap();
        assert_eq!(builder, BloomFilterBuilder::with_size(47, 3).unwrap());

        let builder = BloomFilterBuilder::with_accuracy(1, 0.5).unwrap();
        assert_eq!(builder, BloomFilterBuilder::with_size(1, 1).unwrap());
    }

    #[test]
    fn test_with_accuracy_raises_degenerate_sizes() {
        // floor(-log2(0.9)) == 0 and floor(-ln(0.9) / ln(2)^2) == 0
        let builder = BloomFilterBuilder::with_accuracy(1, 0.9).unwrap();
        assert_eq!(builder, BloomFilterBuilder::with_size(1, 1).unwrap());
    }

    #[test]
    fn test_invalid_epsilon() {
        for epsilon in [0.0, -0.1, 1.0, 1.5, f64::NAN] {
            let err = BloomFilterBuilder::with_accuracy(1000, epsilon).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidParameter);
            assert_eq!(
                err.message(),
                "epsilon must be greater than 0 and less than 1"
            );
        }
        assert!(BloomFilterBuilder::with_accuracy(1000, 0.5).is_ok());
    }

    #[test]
    fn test_invalid_max_items() {
        let err = BloomFilterBuilder::with_accuracy(0, 0.01).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(err.message(), "max_items must be greater than 0");
    }

    #[test]
    fn test_too_many_bits() {
        let err = BloomFilterBuilder::with_accuracy(u64::from(u32::MAX), 1e-9).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(err.context("num_bits").is_some());
    }

    #[test]
    fn test_invalid_size() {
        let err = BloomFilterBuilder::with_size(0, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);

        let err = BloomFilterBuilder::with_size(u32::MAX, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);

        let err = BloomFilterBuilder::with_size(64, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);

        let err = BloomFilterBuilder::with_size(64, MAX_NUM_HASHES + 1).unwrap_err();
        assert_eq!(err.context("num_hashes"), Some("32768"));
    }

    #[test]
    fn test_build_allocates_rounded_up_bytes() {
        let filter = BloomFilterBuilder::with_size(47, 3).unwrap().build();
        assert_eq!(filter.as_bytes(), &[0u8; 6]);

        let filter = BloomFilterBuilder::with_size(48, 3).unwrap().build();
        assert_eq!(filter.as_bytes().len(), 6);

        let filter = BloomFilterBuilder::with_size(1, 1).unwrap().build();
        assert_eq!(filter.as_bytes().len(), 1);
    }
}
