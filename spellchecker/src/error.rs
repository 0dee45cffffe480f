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

//! Process exit codes.
//!
//! Exit codes:
//! - 0: Success, including `--help` and `--version`
//! - 1: The command line could not be parsed
//! - 2: Reading or writing a file failed
//! - 3: Anything else, such as an invalid parameter or a corrupt filter file

use std::io;
use std::process::ExitCode;

use ccbf::error::ErrorKind;

/// Exit codes of the `spellchecker` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    /// Success
    Success = 0,
    /// Command line parse failure
    Usage = 1,
    /// I/O failure
    Io = 2,
    /// Any other failure
    Unexpected = 3,
}

impl CliExitCode {
    /// Prefix of the message printed to stderr for this exit code.
    pub const fn label(self) -> &'static str {
        match self {
            CliExitCode::Success => "Success",
            CliExitCode::Usage => "Error parsing command line",
            CliExitCode::Io => "I/O error",
            CliExitCode::Unexpected => "Unexpected error",
        }
    }
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Determine the exit code for an error returned by a command.
///
/// An [`io::Error`] anywhere in the source chain, or a [`ccbf::error::Error`] of kind
/// [`ErrorKind::Io`], is an I/O failure. Everything else is unexpected.
pub fn exit_code_for_error(err: &anyhow::Error) -> CliExitCode {
    let is_io = err.chain().any(|cause| {
        cause.is::<io::Error>()
            || cause
                .downcast_ref::<ccbf::error::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::Io)
    });

    if is_io {
        CliExitCode::Io
    } else {
        CliExitCode::Unexpected
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;
    use ccbf::bloom::BloomFilter;
    use ccbf::bloom::BloomFilterBuilder;

    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(CliExitCode::Success as u8, 0);
        assert_eq!(CliExitCode::Usage as u8, 1);
        assert_eq!(CliExitCode::Io as u8, 2);
        assert_eq!(CliExitCode::Unexpected as u8, 3);
    }

    #[test]
    fn test_io_errors() {
        let err = anyhow::Error::new(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert_eq!(exit_code_for_error(&err), CliExitCode::Io);

        let err: anyhow::Error = Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "missing"))
            .context("cannot open dictionary")
            .unwrap_err();
        assert_eq!(exit_code_for_error(&err), CliExitCode::Io);
    }

    #[test]
    fn test_filter_errors() {
        let err = anyhow::Error::new(BloomFilter::deserialize(b"junk").unwrap_err());
        assert_eq!(exit_code_for_error(&err), CliExitCode::Unexpected);

        let err = anyhow::Error::new(BloomFilterBuilder::with_accuracy(10, 1.5).unwrap_err());
        assert_eq!(exit_code_for_error(&err), CliExitCode::Unexpected);

        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "broken");
        let err = anyhow::Error::new(ccbf::error::Error::from(io_err));
        assert_eq!(exit_code_for_error(&err), CliExitCode::Io);
    }
}
