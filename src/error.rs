// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types for the `expansion_manager` crate.

use alloc::string::String;
use core::fmt;

/// An error that can occur when applying an overlay.
///
/// Every failure of a submission is reported exactly once, as a single value
/// of this type; the active-overlay registry is left untouched whenever one
/// is returned.
#[derive(Debug)]
#[non_exhaustive]
pub struct ApplyError {
    name: String,
    /// The kind of the error that has occurred.
    pub kind: ApplyErrorKind,
}

impl ApplyError {
    pub(crate) fn new(kind: ApplyErrorKind, name: String) -> Self {
        Self { name, kind }
    }

    /// Returns the overlay name the failed submission referred to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The kind of an error that can occur when applying an overlay.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApplyErrorKind {
    /// No blob with the requested name could be loaded.
    NotFound,
    /// The loaded blob could not be unflattened into a tree fragment.
    MalformedBlob,
    /// Phandle references in the fragment could not be resolved against the
    /// live tree.
    UnresolvedReferences,
    /// The engine rejected merging the fragment into the live tree.
    ApplyRejected,
    /// An allocation failed while recording the overlay.
    OutOfMemory,
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for overlay `{}`", self.kind, self.name)
    }
}

impl fmt::Display for ApplyErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "blob not found"),
            Self::MalformedBlob => write!(f, "blob could not be unflattened"),
            Self::UnresolvedReferences => write!(f, "phandle references could not be resolved"),
            Self::ApplyRejected => write!(f, "overlay rejected by the tree engine"),
            Self::OutOfMemory => write!(f, "out of memory"),
        }
    }
}

impl core::error::Error for ApplyError {}
