// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Bounds-checked LEB128 integers for bytecode parsing.
//!
//! Bytecode is untrusted input, so every integer is decoded against an
//! explicit bound ([`BoundedCursor`]) or buffer length, into fixed storage
//! sized for its declared bit-width ([`VarUint`], [`VarInt`]). Nothing on the
//! decode path allocates.
//!
//! ```
//! use bytecode_leb128::{BoundedCursor, VarInt64, VarUint32};
//!
//! let bytecode = [0xac, 0x02, 0xff, 0x7e];
//! let mut cursor = BoundedCursor::new(&bytecode);
//! assert_eq!(VarUint32::read(&mut cursor)?.get()?, 300);
//! assert_eq!(VarInt64::read(&mut cursor)?.get()?, -129);
//! assert!(cursor.is_at_end());
//! # Ok::<(), bytecode_leb128::Error>(())
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(nightly, feature(allocator_api))]

#[cfg(nightly)]
extern crate alloc;

pub mod core_compat;
pub mod cursor;
pub mod error;
pub mod varint;

use core::fmt;

pub use cursor::BoundedCursor;
pub use error::{Error, ErrorKind};
pub use varint::{
    VarInt, VarInt7, VarInt32, VarInt64, VarUint, VarUint1, VarUint7, VarUint32, VarUint64,
};

/// A convenience trait that captures the required allocation-related trait
/// bounds for output buffers.
pub trait Allocator: core_compat::alloc::Allocator + fmt::Debug + Clone {}

impl<A> Allocator for A where A: core_compat::alloc::Allocator + fmt::Debug + Clone {}
