// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! LEB128 encoding and decoding of width-bounded integers.
//!
//! [`VarUint`] and [`VarInt`] hold a single encoded value in fixed storage
//! sized for their declared bit-width. Both decode either from a buffer at a
//! given index or by advancing a [`BoundedCursor`]; the two sources feed the
//! same scanning loop, which terminates on the first byte with a clear
//! continuation bit.

mod signed;
mod unsigned;

pub use signed::{VarInt, VarInt7, VarInt32, VarInt64};
pub use unsigned::{VarUint, VarUint1, VarUint7, VarUint32, VarUint64};

use core::fmt;

use crate::Allocator;
use crate::core_compat::vec::Vec;
use crate::cursor::BoundedCursor;
use crate::error::Error;

const CONTENT_MASK: u8 = 0x7f;
const CONTINUATION_MASK: u8 = 0x80;
const SIGN_EXTEND_MASK: u8 = 0x40;

// The longest encoding of any supported width (a 64-bit value).
const MAX_LEN: usize = 10;

// Returns the maximum encoded length of a `bits`-wide value.
const fn capacity(bits: u32) -> usize {
    assert!(bits != 0 && bits <= 64, "LEB128 widths range over 1..=64 bits");
    bits.div_ceil(7) as usize
}

// The encoded bytes of a single value. Only the first `len` bytes are
// meaningful; the rest are always zero.
#[derive(Clone, Copy, Default)]
struct Encoded {
    bytes: [u8; MAX_LEN],
    len: u8,
}

impl Encoded {
    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    fn push(&mut self, byte: u8) {
        self.bytes[usize::from(self.len)] = byte;
        self.len += 1;
    }

    // Returns the stored bytes for materialization, provided they could have
    // been produced by a successful encode or decode at the given capacity.
    fn checked(&self, capacity: usize) -> Result<&[u8], Error> {
        let len = usize::from(self.len);
        if len == 0 || len > capacity {
            return Err(Error::MalformedVarint);
        }
        Ok(self.as_bytes())
    }

    fn append_to<A: Allocator>(&self, out: &mut Vec<u8, A>) -> Result<(), Error> {
        out.try_reserve(self.as_bytes().len())?;
        out.extend_from_slice(self.as_bytes());
        Ok(())
    }
}

impl PartialEq for Encoded {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Encoded {}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x?}", self.as_bytes())
    }
}

// Scans one LEB128 sequence of at most `capacity` bytes using the provided
// byte source. Errors from the source propagate as-is.
fn scan<F>(capacity: usize, mut read_byte: F) -> Result<Encoded, Error>
where
    F: FnMut() -> Result<u8, Error>,
{
    let mut encoded = Encoded::default();
    loop {
        if usize::from(encoded.len) == capacity {
            return Err(Error::Overflow);
        }
        let byte = read_byte()?;
        encoded.push(byte);
        if byte & CONTINUATION_MASK == 0 {
            return Ok(encoded);
        }
    }
}

// Scans a sequence starting at `buffer[index]`, never indexing at or past the
// end of the buffer.
fn scan_at(buffer: &[u8], index: usize, capacity: usize) -> Result<Encoded, Error> {
    let mut pos = index;
    scan(capacity, || {
        let byte = *buffer.get(pos).ok_or(Error::TruncatedInput {
            index: pos,
            len: buffer.len(),
        })?;
        pos += 1;
        Ok(byte)
    })
}

// Scans a sequence from the cursor, committing the cursor's new position only
// once the sequence is complete and passes `validate`.
fn scan_from<V>(
    cursor: &mut BoundedCursor<'_>,
    capacity: usize,
    validate: V,
) -> Result<Encoded, Error>
where
    V: FnOnce(&Encoded) -> Result<(), Error>,
{
    let mut probe = *cursor;
    let encoded = scan(capacity, || probe.read_byte())?;
    validate(&encoded)?;
    *cursor = probe;
    Ok(encoded)
}
