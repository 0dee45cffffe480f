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
use std::io::Cursor;
use std::io::Read;

use byteorder::ReadBytesExt;
use byteorder::BE;

/// A wrapper around a byte slice that provides methods for reading big-endian fields from it.
pub struct FilterSlice<'a> {
    slice: Cursor<&'a [u8]>,
}

impl FilterSlice<'_> {
    /// Creates a new `FilterSlice` from the given byte slice.
    pub fn new(slice: &[u8]) -> FilterSlice<'_> {
        FilterSlice {
            slice: Cursor::new(slice),
        }
    }

    /// Reads exactly `buf.len()` bytes from the slice into `buf`.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.slice.read_exact(buf)
    }

    /// Reads a 16-bit unsigned integer from the slice in big-endian byte order.
    pub fn read_u16_be(&mut self) -> io::Result<u16> {
        self.slice.read_u16::<BE>()
    }

    /// Reads a 32-bit signed integer from the slice in big-endian byte order.
    pub fn read_i32_be(&mut self) -> io::Result<i32> {
        self.slice.read_i32::<BE>()
    }

    /// Returns the bytes that have not been read yet.
    pub fn remaining(&self) -> &[u8] {
        let data = *self.slice.get_ref();
        let pos = (self.slice.position() as usize).min(data.len());
        &data[pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::FilterSlice;

    #[test]
    fn test_big_endian_fields() {
        let data = [b'A', b'B', 0x01, 0x02, 0xff, 0xff, 0xff, 0xfe, 0x7f];
        let mut slice = FilterSlice::new(&data);

        let mut magic = [0u8; 2];
        slice.read_exact(&mut magic).unwrap();
        assert_eq!(&magic, b"AB");
        assert_eq!(slice.read_u16_be().unwrap(), 0x0102);
        assert_eq!(slice.read_i32_be().unwrap(), -2);
        assert_eq!(slice.remaining(), &[0x7f]);
        assert!(slice.read_u16_be().is_err());
    }
}
