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

use super::FilterBytes;
use super::FilterSlice;
use crate::error::Error;

/// The fixed 12-byte preamble of a serialized Bloom filter.
///
/// ```text
/// Offset | Size | Field
/// -------+------+---------------------------------
///      0 |    4 | magic identifier "CCBF"
///      4 |    2 | format version (unsigned)
///      6 |    2 | number of hash functions (unsigned)
///      8 |    4 | number of bits (signed)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Number of hash functions of the filter.
    pub num_hashes: u16,
    /// Number of addressable bits of the filter.
    pub num_bits: i32,
}

impl Header {
    /// ASCII identifier every serialized filter starts with.
    pub const MAGIC: [u8; 4] = *b"CCBF";
    /// The only format version this crate reads and writes.
    pub const SERIAL_VERSION: u16 = 1;
    /// Size of the header in bytes.
    pub const LEN: usize = 12;

    pub fn encode(&self, bytes: &mut FilterBytes) {
        bytes.write(&Self::MAGIC);
        bytes.write_u16_be(Self::SERIAL_VERSION);
        bytes.write_u16_be(self.num_hashes);
        bytes.write_i32_be(self.num_bits);
    }

    /// Reads and validates the header.
    ///
    /// Fields are checked in file order, so a stream with the right magic and a wrong version
    /// reports the version even if it ends right after it.
    pub fn decode(slice: &mut FilterSlice<'_>) -> Result<Header, Error> {
        let mut magic = [0u8; 4];
        slice
            .read_exact(&mut magic)
            .map_err(|_| Error::insufficient_data("magic"))?;
        if magic != Self::MAGIC {
            return Err(Error::not_a_bloom_filter(&magic));
        }

        let version = slice
            .read_u16_be()
            .map_err(|_| Error::insufficient_data("version"))?;
        if version != Self::SERIAL_VERSION {
            return Err(Error::unsupported_version(version));
        }

        let num_hashes = slice
            .read_u16_be()
            .map_err(|_| Error::insufficient_data("num_hashes"))?;
        let num_bits = slice
            .read_i32_be()
            .map_err(|_| Error::insufficient_data("num_bits"))?;

        if num_hashes == 0 {
            return Err(Error::invalid_format("number of hash functions must be positive"));
        }
        if num_bits <= 0 {
            return Err(
                Error::invalid_format("number of bits must be positive")
                    .with_context("num_bits", num_bits),
            );
        }

        Ok(Header {
            num_hashes,
            num_bits,
        })
    }
}
