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

use std::io;
use std::io::Read;
use std::io::Write;

use crate::codec::FilterBytes;
use crate::codec::FilterSlice;
use crate::codec::Header;
use crate::error::Error;
use crate::hash::HashFunction;

/// A Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (inserted items always return `true`)
/// - Tunable false positive rate
/// - Constant space usage
///
/// Use [`super::BloomFilterBuilder`] to construct new instances, or
/// [`deserialize()`](Self::deserialize) / [`read_from()`](Self::read_from) to load a stored one.
///
/// Mutation requires `&mut self`, so a filter cannot be inserted into while another reference
/// reads or serializes its bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    /// Total number of bits in the filter (m), in `1..=i32::MAX`
    pub(super) num_bits: u32,
    /// Hash function `i` is seeded with `i`
    pub(super) hash_functions: Vec<HashFunction>,
    /// Count of bits set to 1 (for statistics)
    pub(super) num_bits_set: u64,
    /// Length = ceil(num_bits / 8), most significant bit first
    pub(super) bit_array: Vec<u8>,
}

/// Creates the hash functions seeded `0..num_hashes`.
pub(super) fn hash_family(num_hashes: u16) -> Vec<HashFunction> {
    (0..num_hashes)
        .map(|seed| HashFunction::new(i32::from(seed)))
        .collect()
}

impl BloomFilter {
    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Item was **possibly** inserted (or false positive)
    /// - `false`: Item was **definitely not** inserted
    ///
    /// # Examples
    ///
    /// ```
    /// # use ccbf::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01)?.build();
    /// filter.insert("apple");
    ///
    /// assert!(filter.contains("apple")); // true - was inserted
    /// assert!(!filter.contains("grape")); // false - never inserted
    /// # Ok::<(), ccbf::error::Error>(())
    /// ```
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        if self.is_empty() {
            return false;
        }

        let item = item.as_ref();
        self.hash_functions.iter().all(|function| {
            let (byte_index, mask) = self.bit_position(&function.hash(item));
            self.bit_array[byte_index] & mask != 0
        })
    }

    /// Tests and inserts an item in a single operation.
    ///
    /// Returns whether the item was possibly already in the set before insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ccbf::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01)?.build();
    ///
    /// assert!(!filter.contains_and_insert("apple")); // First insertion
    /// assert!(filter.contains_and_insert("apple")); // Now it's in the set
    /// # Ok::<(), ccbf::error::Error>(())
    /// ```
    pub fn contains_and_insert(&mut self, item: impl AsRef<[u8]>) -> bool {
        let item = item.as_ref();
        let mut was_present = true;
        for i in 0..self.hash_functions.len() {
            let digest = self.hash_functions[i].hash(item);
            let (byte_index, mask) = self.bit_position(&digest);
            was_present &= self.set_bit(byte_index, mask);
        }
        was_present
    }

    /// Inserts an item into the filter.
    ///
    /// After insertion, `contains(item)` will always return `true`. Any byte sequence,
    /// including an empty one, can be inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ccbf::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01)?.build();
    ///
    /// filter.insert("apple");
    /// filter.insert([1u8, 2, 3]);
    /// filter.insert(String::from("banana"));
    ///
    /// assert!(filter.contains("apple"));
    /// assert!(filter.contains(&[1u8, 2, 3]));
    /// # Ok::<(), ccbf::error::Error>(())
    /// ```
    pub fn insert(&mut self, item: impl AsRef<[u8]>) {
        self.contains_and_insert(item);
    }

    /// Returns whether the filter is empty (no items inserted).
    pub fn is_empty(&self) -> bool {
        self.num_bits_set == 0
    }

    /// Returns the number of bits set to 1.
    ///
    /// Useful for monitoring filter saturation.
    pub fn bits_used(&self) -> u64 {
        self.num_bits_set
    }

    /// Returns the total number of bits in the filter (capacity).
    pub fn capacity(&self) -> u32 {
        self.num_bits
    }

    /// Returns the number of hash functions used.
    pub fn num_hashes(&self) -> u16 {
        // bounded by MAX_NUM_HASHES at construction
        self.hash_functions.len() as u16
    }

    /// Returns the hash functions in the order they are applied.
    pub fn hash_functions(&self) -> &[HashFunction] {
        &self.hash_functions
    }

    /// Returns the raw bit array, `ceil(capacity / 8)` bytes, most significant bit first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bit_array
    }

    /// Returns the current load factor (fraction of bits set).
    pub fn load_factor(&self) -> f64 {
        self.num_bits_set as f64 / f64::from(self.num_bits)
    }

    /// Estimates the current false positive probability.
    ///
    /// Uses the approximation: `load_factor^k`
    /// where:
    /// - load_factor = fraction of bits set (bits_used / capacity)
    /// - k = num_hashes
    pub fn estimated_fpp(&self) -> f64 {
        self.load_factor().powi(i32::from(self.num_hashes()))
    }

    /// Serializes the filter to a byte vector in the `CCBF` format.
    ///
    /// The result is exactly `12 + ceil(capacity / 8)` bytes long.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ccbf::bloom::{BloomFilter, BloomFilterBuilder};
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01)?.build();
    /// filter.insert("test");
    ///
    /// let bytes = filter.serialize();
    /// assert_eq!(&bytes[..4], b"CCBF");
    ///
    /// let restored = BloomFilter::deserialize(&bytes)?;
    /// assert!(restored.contains("test"));
    /// # Ok::<(), ccbf::error::Error>(())
    /// ```
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = FilterBytes::with_capacity(Header::LEN + self.bit_array.len());

        Header {
            num_hashes: self.num_hashes(),
            // bounded by MAX_NUM_BITS at construction
            num_bits: self.num_bits as i32,
        }
        .encode(&mut bytes);
        bytes.write(&self.bit_array);

        bytes.into_bytes()
    }

    /// Writes the serialized filter to `writer`.
    ///
    /// # Errors
    ///
    /// Returns the writer's error unchanged if writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(&self.serialize())?;
        writer.flush()
    }

    /// Deserializes a filter from bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The magic identifier is not `CCBF` ([`InvalidFormat`])
    /// - The format version is not 1 ([`UnsupportedVersion`])
    /// - The header is truncated, a count is not positive, or the bit array is not exactly
    ///   `ceil(num_bits / 8)` bytes long ([`InvalidFormat`])
    ///
    /// [`InvalidFormat`]: crate::error::ErrorKind::InvalidFormat
    /// [`UnsupportedVersion`]: crate::error::ErrorKind::UnsupportedVersion
    ///
    /// # Examples
    ///
    /// ```
    /// # use ccbf::bloom::{BloomFilter, BloomFilterBuilder};
    /// # use ccbf::error::ErrorKind;
    /// let original = BloomFilterBuilder::with_accuracy(100, 0.01)?.build();
    /// let bytes = original.serialize();
    ///
    /// let restored = BloomFilter::deserialize(&bytes)?;
    /// assert_eq!(original, restored);
    ///
    /// let err = BloomFilter::deserialize(b"not a filter").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    /// # Ok::<(), ccbf::error::Error>(())
    /// ```
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        let mut cursor = FilterSlice::new(bytes);
        let Header {
            num_hashes,
            num_bits,
        } = Header::decode(&mut cursor)?;

        // positive, checked by Header::decode
        let num_bits = num_bits as u32;
        let expected_len = num_bits.div_ceil(8) as usize;
        let bit_array = cursor.remaining();
        if bit_array.len() != expected_len {
            return Err(
                Error::invalid_format("bit array length does not match number of bits")
                    .with_context("num_bits", num_bits)
                    .with_context("expected_bytes", expected_len)
                    .with_context("actual_bytes", bit_array.len()),
            );
        }

        let bit_array = bit_array.to_vec();
        let num_bits_set = bit_array.iter().map(|b| u64::from(b.count_ones())).sum();

        Ok(BloomFilter {
            num_bits,
            hash_functions: hash_family(num_hashes),
            num_bits_set,
            bit_array,
        })
    }

    /// Reads the whole of `reader` and deserializes a filter from it.
    ///
    /// # Errors
    ///
    /// A read failure is returned as [`ErrorKind::Io`](crate::error::ErrorKind::Io) whose
    /// [`source()`](std::error::Error::source) is the original [`io::Error`]. Otherwise the
    /// errors of [`deserialize()`](Self::deserialize) apply.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::deserialize(&bytes)
    }

    /// Maps a digest to the byte holding its bit and the mask selecting that bit.
    ///
    /// The digest is an unsigned big-endian 128-bit integer reduced modulo `num_bits`; bit 0 is
    /// the most significant bit of byte 0.
    fn bit_position(&self, digest: &[u8; 16]) -> (usize, u8) {
        let bit_index = u128::from_be_bytes(*digest) % u128::from(self.num_bits);
        let bit_index = bit_index as u32;
        let byte_index = (bit_index >> 3) as usize;
        let mask = 1u8 << (7 - (bit_index & 7));
        (byte_index, mask)
    }

    /// Sets a single bit, returning whether it was already set.
    fn set_bit(&mut self, byte_index: usize, mask: u8) -> bool {
        let byte = &mut self.bit_array[byte_index];
        if *byte & mask != 0 {
            return true;
        }
        *byte |= mask;
        self.num_bits_set += 1;
        false
    }
}
