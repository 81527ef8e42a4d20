// Copyright (c) 2025 Joshua Seaton
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Allocator API shims for the encoding output path.
//!
//! Encoded values are appended to caller-owned, allocator-aware vectors. On
//! nightly these are `core`/`alloc` types; on stable they come from
//! `allocator-api2`, the conventional polyfill. The `nightly` cfg value is set
//! by the build script.

pub mod alloc {
    #[cfg(nightly)]
    pub use core::alloc::Allocator;

    #[cfg(nightly)]
    pub use ::alloc::alloc::Global;

    #[cfg(not(nightly))]
    pub use allocator_api2::alloc::{Allocator, Global};

    pub mod collections {
        #[cfg(nightly)]
        pub use ::alloc::collections::TryReserveError;

        #[cfg(not(nightly))]
        pub use allocator_api2::collections::TryReserveError;
    }
}

pub mod vec {
    #[cfg(nightly)]
    pub use ::alloc::vec::Vec;

    #[cfg(not(nightly))]
    pub use allocator_api2::vec::Vec;
}
