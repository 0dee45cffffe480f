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

//! Error types for Bloom filter operations

use std::fmt;
use std::io;

/// ErrorKind is all kinds of Error of ccbf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The argument provided to a constructor is invalid.
    InvalidParameter,
    /// The serialized filter is malformed.
    InvalidFormat,
    /// The serialized filter carries a format version this crate cannot read.
    UnsupportedVersion,
    /// Reading the serialized filter from its source failed.
    Io,
}

impl ErrorKind {
    /// Convert this error kind instance into static str.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::InvalidParameter => "InvalidParameter",
            ErrorKind::InvalidFormat => "InvalidFormat",
            ErrorKind::UnsupportedVersion => "UnsupportedVersion",
            ErrorKind::Io => "Io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

/// Error is the error struct returned by all ccbf functions.
///
/// # Examples
///
/// ```
/// # use ccbf::error::Error;
/// # use ccbf::error::ErrorKind;
/// let err = Error::new(ErrorKind::InvalidParameter, "bad input");
/// assert_eq!(err.kind(), ErrorKind::InvalidParameter);
/// assert_eq!(err.message(), "bad input");
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
    source: Option<io::Error>,
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: vec![],
            source: None,
        }
    }

    /// Add more context in error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Return the value recorded under `key` by [`with_context`](Self::with_context), if any.
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

// Convenient constructors used within ccbf crate.
impl Error {
    pub(crate) fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParameter, msg)
    }

    pub(crate) fn invalid_format(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFormat, msg)
    }

    pub(crate) fn insufficient_data(field: &'static str) -> Self {
        Self::invalid_format(format!("insufficient data: {field}"))
    }

    pub(crate) fn not_a_bloom_filter(magic: &[u8]) -> Self {
        Self::invalid_format("not a bloom filter").with_context("magic", format!("{magic:02x?}"))
    }

    pub(crate) fn unsupported_version(version: u16) -> Self {
        Self::new(
            ErrorKind::UnsupportedVersion,
            format!("unsupported version: {version}"),
        )
        .with_context("version", version)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: err.to_string(),
            context: vec![],
            source: Some(err),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // If alternate has been specified, we will print like Debug.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("kind", &self.kind);
            de.field("message", &self.message);
            de.field("context", &self.context);
            de.field("source", &self.source);
            return de.finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "Source:")?;
            writeln!(f, "   {source:?}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            for (i, (k, v)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", k, v)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn test_format_consistency() {
        let err = Error::new(ErrorKind::InvalidParameter, "something went wrong");
        assert_snapshot!(err, @"InvalidParameter => something went wrong");
    }

    #[test]
    fn test_format_unsupported_version() {
        let err = Error::unsupported_version(2);
        assert_snapshot!(err, @"UnsupportedVersion, context: { version: 2 } => unsupported version: 2");
        assert_eq!(err.context("version"), Some("2"));
        assert_eq!(err.context("magic"), None);
    }

    #[test]
    fn test_format_not_a_bloom_filter() {
        let err = Error::not_a_bloom_filter(b"XYZW");
        assert_snapshot!(err, @"InvalidFormat, context: { magic: [58, 59, 5a, 57] } => not a bloom filter");
    }

    #[test]
    fn test_io_source_is_preserved() {
        let err = Error::from(io::Error::new(io::ErrorKind::UnexpectedEof, "stream closed"));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.message(), "stream closed");

        let source = err.source().expect("io error source");
        let io_err = source.downcast_ref::<io::Error>().expect("io::Error");
        assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
