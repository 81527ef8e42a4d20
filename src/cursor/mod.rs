// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Bounds-checked reading of borrowed bytecode.
//!
//! Provides [`BoundedCursor`], a read position into a byte buffer paired with
//! an exclusive upper bound that no read may cross.

use crate::error::Error;

/// A read position into a borrowed byte buffer, limited by an exclusive
/// bound.
///
/// `offset <= bound <= buffer.len()` holds at every observable point, and a
/// failed operation leaves the cursor untouched.
#[derive(Clone, Copy, Debug)]
pub struct BoundedCursor<'a> {
    buffer: &'a [u8],
    offset: usize,
    bound: usize,
}

impl<'a> BoundedCursor<'a> {
    /// Creates a cursor over the whole of `buffer`, starting at its beginning.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            offset: 0,
            bound: buffer.len(),
        }
    }

    /// Creates a cursor at `offset` that may not read at or beyond `bound`.
    pub fn with_bound(buffer: &'a [u8], offset: usize, bound: usize) -> Result<Self, Error> {
        if offset > bound || bound > buffer.len() {
            return Err(Error::OutOfBounds {
                offset,
                requested: bound.saturating_sub(offset),
                bound: buffer.len(),
            });
        }
        Ok(Self {
            buffer,
            offset,
            bound,
        })
    }

    /// Returns the current position within the underlying buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the exclusive upper bound of the cursor.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Returns the number of bytes left before the bound.
    pub fn remaining(&self) -> usize {
        debug_assert!(self.offset <= self.bound);
        self.bound - self.offset
    }

    /// Whether the cursor has reached its bound.
    pub fn is_at_end(&self) -> bool {
        self.offset == self.bound
    }

    // Fails unless `count` more bytes are available.
    fn ensure(&self, count: usize) -> Result<(), Error> {
        if count <= self.remaining() {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                offset: self.offset,
                requested: count,
                bound: self.bound,
            })
        }
    }

    /// Returns the byte at the current position without advancing.
    pub fn peek_byte(&self) -> Result<u8, Error> {
        self.ensure(1)?;
        Ok(self.buffer[self.offset])
    }

    /// Returns the byte at the current position and advances past it.
    pub fn read_byte(&mut self) -> Result<u8, Error> {
        let byte = self.peek_byte()?;
        self.offset += 1;
        Ok(byte)
    }

    /// Moves the cursor forward by `count` bytes.
    pub fn advance(&mut self, count: usize) -> Result<(), Error> {
        self.ensure(count)?;
        self.offset += count;
        Ok(())
    }

    /// Borrows the next `count` bytes and advances past them.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], Error> {
        self.ensure(count)?;
        let bytes = &self.buffer[self.offset..self.offset + count];
        self.offset += count;
        Ok(bytes)
    }

    /// Splits off a cursor over the next `count` bytes and advances past them.
    ///
    /// Useful for length-prefixed regions (e.g., a function body), whose
    /// contents must not be read beyond their declared length.
    pub fn window(&mut self, count: usize) -> Result<BoundedCursor<'a>, Error> {
        self.ensure(count)?;
        let window = BoundedCursor {
            buffer: self.buffer,
            offset: self.offset,
            bound: self.offset + count,
        };
        self.offset += count;
        Ok(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out_of_bounds(offset: usize, requested: usize, bound: usize) -> Error {
        Error::OutOfBounds {
            offset,
            requested,
            bound,
        }
    }

    #[test]
    fn test_read_until_bound() {
        let mut cursor = BoundedCursor::new(&[0x01, 0x02]);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.peek_byte(), Ok(0x01));
        assert_eq!(cursor.read_byte(), Ok(0x01));
        assert_eq!(cursor.read_byte(), Ok(0x02));
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek_byte(), Err(out_of_bounds(2, 1, 2)));
        assert_eq!(cursor.read_byte(), Err(out_of_bounds(2, 1, 2)));
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn test_bound_shorter_than_buffer() {
        let buffer = [0xaa, 0xbb, 0xcc, 0xdd];
        let mut cursor = BoundedCursor::with_bound(&buffer, 1, 3).unwrap();
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.read_byte(), Ok(0xbb));
        assert_eq!(cursor.read_byte(), Ok(0xcc));

        // 0xdd is in the buffer but past the bound.
        assert_eq!(cursor.read_byte(), Err(out_of_bounds(3, 1, 3)));
    }

    #[test]
    fn test_invalid_bounds() {
        let buffer = [0u8; 4];
        assert_eq!(
            BoundedCursor::with_bound(&buffer, 0, 5).unwrap_err(),
            out_of_bounds(0, 5, 4)
        );
        assert_eq!(
            BoundedCursor::with_bound(&buffer, 3, 2).unwrap_err(),
            out_of_bounds(3, 0, 4)
        );
        assert!(BoundedCursor::with_bound(&buffer, 4, 4).unwrap().is_at_end());
    }

    #[test]
    fn test_advance_is_all_or_nothing() {
        let mut cursor = BoundedCursor::new(&[0u8; 8]);
        assert_eq!(cursor.advance(3), Ok(()));
        assert_eq!(cursor.advance(6), Err(out_of_bounds(3, 6, 8)));
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.advance(usize::MAX), Err(out_of_bounds(3, usize::MAX, 8)));
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.advance(5), Ok(()));
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.advance(0), Ok(()));
    }

    #[test]
    fn test_read_bytes() {
        let mut cursor = BoundedCursor::new(&[1, 2, 3, 4, 5]);
        assert_eq!(cursor.read_bytes(2), Ok(&[1u8, 2][..]));
        assert_eq!(cursor.read_bytes(4), Err(out_of_bounds(2, 4, 5)));
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.read_bytes(3), Ok(&[3u8, 4, 5][..]));
    }

    #[test]
    fn test_window() {
        let buffer = [0x10, 0x20, 0x30, 0x40];
        let mut cursor = BoundedCursor::new(&buffer);
        cursor.advance(1).unwrap();

        let mut window = cursor.window(2).unwrap();
        assert_eq!(cursor.offset(), 3);
        assert_eq!((window.offset(), window.bound()), (1, 3));
        assert_eq!(window.read_byte(), Ok(0x20));
        assert_eq!(window.read_byte(), Ok(0x30));
        assert_eq!(window.read_byte(), Err(out_of_bounds(3, 1, 3)));

        assert_eq!(cursor.window(2).unwrap_err(), out_of_bounds(3, 2, 4));
        assert_eq!(cursor.offset(), 3);
    }
}
