// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

use core::fmt;

use crate::Allocator;
use crate::core_compat::vec::Vec;
use crate::cursor::BoundedCursor;
use crate::error::Error;

use super::{CONTENT_MASK, CONTINUATION_MASK, Encoded, capacity, scan_at, scan_from};

/// An unsigned LEB128-encoded integer whose value is below `2^N`.
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct VarUint<const N: u32> {
    encoded: Encoded,
}

/// A single-bit flag.
pub type VarUint1 = VarUint<1>;
/// A 7-bit unsigned value (always a single byte).
pub type VarUint7 = VarUint<7>;
/// A 32-bit unsigned value, e.g., an index or a length.
pub type VarUint32 = VarUint<32>;
/// A 64-bit unsigned value.
pub type VarUint64 = VarUint<64>;

impl<const N: u32> VarUint<N> {
    /// The maximum number of bytes an `N`-bit value encodes to.
    pub const CAPACITY: usize = capacity(N);

    /// Encodes `value`, failing if it does not fit in `N` bits.
    pub fn new(value: u128) -> Result<Self, Error> {
        if value >> N != 0 {
            return Err(Error::ValueOutOfRange { bits: N });
        }

        let mut encoded = Encoded::default();
        let mut value = value;
        loop {
            let mut byte = value as u8 & CONTENT_MASK;
            value >>= 7;
            if value != 0 {
                byte |= CONTINUATION_MASK;
            }
            encoded.push(byte);
            if value == 0 {
                break;
            }
        }
        debug_assert!(usize::from(encoded.len) <= Self::CAPACITY);
        Ok(Self { encoded })
    }

    /// Decodes the value starting at `buffer[index]`.
    ///
    /// Only the buffer is inspected; callers tracking their own position
    /// should advance it by [`Self::len`].
    pub fn decode(buffer: &[u8], index: usize) -> Result<Self, Error> {
        let encoded = scan_at(buffer, index, Self::CAPACITY)?;
        Ok(Self { encoded })
    }

    /// Decodes the value at the cursor's position, advancing the cursor past
    /// it. On failure the cursor is left where it was.
    pub fn read(cursor: &mut BoundedCursor<'_>) -> Result<Self, Error> {
        let encoded = scan_from(cursor, Self::CAPACITY, |_| Ok(()))?;
        Ok(Self { encoded })
    }

    /// Materializes the encoded value.
    ///
    /// The result is only bounded by 64 bits: a maximal-length encoding may
    /// carry bits above `N`, so callers needing an `N`-bit value should narrow
    /// it with `TryFrom`.
    pub fn get(&self) -> Result<u64, Error> {
        let mut result = 0u64;
        let mut shift = 0;
        for &byte in self.encoded.checked(Self::CAPACITY)? {
            // Unreachable within `MAX_LEN` bytes; kept alongside the
            // shift-then-unshift check below.
            if shift >= u64::BITS {
                return Err(Error::Overflow);
            }
            let content = u64::from(byte & CONTENT_MASK);
            if (content << shift) >> shift != content {
                return Err(Error::Overflow);
            }
            result |= content << shift;
            if byte & CONTINUATION_MASK == 0 {
                return Ok(result);
            }
            shift += 7;
        }
        Err(Error::MalformedVarint)
    }

    /// The number of encoded bytes.
    pub fn len(&self) -> usize {
        usize::from(self.encoded.len)
    }

    /// Whether the value holds no encoding at all, which is only the case for
    /// [`Default::default`].
    pub fn is_empty(&self) -> bool {
        self.encoded.len == 0
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.encoded.as_bytes()
    }

    /// Appends the encoded bytes to `out`.
    pub fn append_to<A: Allocator>(&self, out: &mut Vec<u8, A>) -> Result<(), Error> {
        self.encoded.append_to(out)
    }
}

impl<const N: u32> fmt::Debug for VarUint<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarUint<{N}>({:?})", self.encoded)
    }
}
