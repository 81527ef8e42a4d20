// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Errors surfaced by the cursor and the LEB128 codecs.
//!
//! Every failure is terminal for the call that produced it: callers are
//! expected to reject the bytecode being parsed.

use core::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::core_compat::alloc::collections::TryReserveError;

/// Represents errors that can arise while encoding or decoding a varint.
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// Failed memory allocation while appending to an output buffer.
    AllocError,
    /// A cursor read or advance would move past the cursor's bound.
    OutOfBounds {
        /// The cursor position at the time of the access.
        offset: usize,
        /// The number of bytes the access needed.
        requested: usize,
        /// The cursor's exclusive upper bound.
        bound: usize,
    },
    /// An indexed scan ran off the end of the buffer before finding a
    /// terminating byte.
    TruncatedInput {
        /// The index of the first missing byte.
        index: usize,
        /// The length of the buffer.
        len: usize,
    },
    /// The stored bytes of a codec value are not a terminated sequence of at
    /// most the width's capacity.
    MalformedVarint,
    /// The decoded value does not fit in 64 bits, or no terminating byte was
    /// found within the width's capacity.
    Overflow,
    /// The value to encode is not representable in the declared width.
    ValueOutOfRange { bits: u32 },
    /// A maximal-length signed encoding whose high bits are not a sign
    /// extension.
    NonCanonicalEncoding(u8),
}

impl Error {
    /// Returns the field-less kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AllocError => ErrorKind::AllocError,
            Error::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Error::TruncatedInput { .. } => ErrorKind::TruncatedInput,
            Error::MalformedVarint => ErrorKind::MalformedVarint,
            Error::Overflow => ErrorKind::Overflow,
            Error::ValueOutOfRange { .. } => ErrorKind::ValueOutOfRange,
            Error::NonCanonicalEncoding(_) => ErrorKind::NonCanonicalEncoding,
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AllocError => write!(f, "allocation failure"),
            Error::OutOfBounds {
                offset,
                requested,
                bound,
            } => write!(
                f,
                "out of bounds: {requested:#x} byte(s) at {offset:#x} with bound {bound:#x}"
            ),
            Error::TruncatedInput { index, len } => write!(
                f,
                "varint not terminated before end of input: index {index:#x}, length {len:#x}"
            ),
            Error::MalformedVarint => write!(f, "malformed varint"),
            Error::Overflow => write!(f, "varint too big for 64 bits"),
            Error::ValueOutOfRange { bits } => {
                write!(f, "value too large for a {bits}-bit varint")
            }
            Error::NonCanonicalEncoding(byte) => {
                write!(f, "non-canonical final byte of 64-bit varint ({byte:#x})")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::AllocError
    }
}

/// Stable diagnostic codes for [`Error`], suitable for reporting through a
/// single byte (e.g., as an interpreter trap reason).
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ErrorKind {
    OutOfBounds = 1,
    TruncatedInput = 2,
    MalformedVarint = 3,
    Overflow = 4,
    ValueOutOfRange = 5,
    NonCanonicalEncoding = 6,
    AllocError = 7,
}
