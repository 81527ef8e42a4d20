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

use super::{
    CONTENT_MASK, CONTINUATION_MASK, Encoded, MAX_LEN, SIGN_EXTEND_MASK, capacity, scan_at,
    scan_from,
};

/// A signed (two's complement) LEB128-encoded integer of width `N`.
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct VarInt<const N: u32> {
    encoded: Encoded,
}

/// A 7-bit signed value (always a single byte), e.g., a value type or block
/// type code.
pub type VarInt7 = VarInt<7>;
/// A 32-bit signed value.
pub type VarInt32 = VarInt<32>;
/// A 64-bit signed value.
pub type VarInt64 = VarInt<64>;

// In a maximal-length encoding, the final byte holds bit 63 in its lowest bit
// and the bits above it must replicate it.
fn check_canonical(encoded: &Encoded) -> Result<(), Error> {
    if usize::from(encoded.len) < MAX_LEN {
        return Ok(());
    }
    let last = encoded.bytes[MAX_LEN - 1];
    let expected = if last & 0x01 == 0 { 0 } else { 0x7e };
    if last & 0x7e != expected {
        return Err(Error::NonCanonicalEncoding(last));
    }
    Ok(())
}

impl<const N: u32> VarInt<N> {
    /// The maximum number of bytes an `N`-bit value encodes to.
    pub const CAPACITY: usize = capacity(N);

    /// Encodes `value`, failing if it is not representable in `N` bits of
    /// two's complement.
    pub fn new(value: i128) -> Result<Self, Error> {
        let limit = 1i128 << (N - 1);
        if !(-limit..limit).contains(&value) {
            return Err(Error::ValueOutOfRange { bits: N });
        }

        let mut encoded = Encoded::default();
        let mut value = value;
        loop {
            let byte = value.to_le_bytes()[0] & CONTENT_MASK;
            value >>= 7;

            // Done once the remaining bits are all copies of the sign bit that
            // decoding will extend from this byte.
            let done = (value == 0 && byte & SIGN_EXTEND_MASK == 0)
                || (value == -1 && byte & SIGN_EXTEND_MASK != 0);
            if done {
                encoded.push(byte);
                break;
            }
            encoded.push(byte | CONTINUATION_MASK);
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
        check_canonical(&encoded)?;
        Ok(Self { encoded })
    }

    /// Decodes the value at the cursor's position, advancing the cursor past
    /// it. On failure the cursor is left where it was.
    pub fn read(cursor: &mut BoundedCursor<'_>) -> Result<Self, Error> {
        let encoded = scan_from(cursor, Self::CAPACITY, check_canonical)?;
        Ok(Self { encoded })
    }

    /// Materializes the encoded value, sign-extending from the final byte.
    ///
    /// The result is only bounded by 64 bits: a maximal-length encoding may
    /// carry bits above `N`, so callers needing an `N`-bit value should narrow
    /// it with `TryFrom`.
    pub fn get(&self) -> Result<i64, Error> {
        let mut result = 0i64;
        let mut shift = 0;
        for &byte in self.encoded.checked(Self::CAPACITY)? {
            result |= i64::from(byte & CONTENT_MASK) << shift;
            shift += 7;
            if byte & CONTINUATION_MASK == 0 {
                if shift < i64::BITS && byte & SIGN_EXTEND_MASK != 0 {
                    result |= !0 << shift;
                }
                return Ok(result);
            }
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

impl<const N: u32> fmt::Debug for VarInt<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarInt<{N}>({:?})", self.encoded)
    }
}
