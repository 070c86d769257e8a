// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The seam to the firmware/asset service that fetches overlay blobs.

use alloc::vec::Vec;
use core::fmt;

/// A source of raw overlay blobs, looked up by name.
///
/// Implementations typically wrap a firmware-loading service or an asset
/// store. The manager treats any failure as "no blob with that name", so the
/// error type only needs to be displayable for diagnostics.
pub trait BlobLoader {
    /// The error returned when a blob cannot be loaded.
    type Error: fmt::Display;

    /// Loads the raw binary content of the overlay named `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if no blob with that name can be produced.
    fn load(&mut self, name: &str) -> Result<Vec<u8>, Self::Error>;
}
