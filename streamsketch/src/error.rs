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

//! Error types for streamsketch operations.

use std::error;
use std::fmt;

/// Broad classification of a [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The hash-family sampling range is too small for the requested
    /// number of coefficients.
    InsufficientDomain,
    /// The stream source could not deliver a full batch.
    StreamExhausted,
    /// An underlying I/O operation failed.
    Io,
}

/// Error raised by streamsketch operations.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn insufficient_domain(count: usize, range: u64) -> Self {
        Self {
            kind: ErrorKind::InsufficientDomain,
            message: format!(
                "cannot draw {count} distinct coefficients from [1, {range})"
            ),
        }
    }

    pub(crate) fn stream_exhausted(requested: usize, available: usize) -> Self {
        Self {
            kind: ErrorKind::StreamExhausted,
            message: format!(
                "stream source cannot deliver a full batch: requested {requested}, {available} available"
            ),
        }
    }

    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: format!("{context}: {source}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::io("i/o error", source)
    }
}
