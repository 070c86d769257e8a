// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The seam to the device-tree overlay engine.

use core::fmt;

/// The engine that turns a raw blob into a live part of the configuration
/// tree.
///
/// The manager drives the methods in a fixed order for each submission:
/// [`unflatten`](Self::unflatten), [`mark_detached`](Self::mark_detached),
/// [`resolve_phandles`](Self::resolve_phandles), then
/// [`apply`](Self::apply). A fragment must be marked detached before its
/// references are resolved.
///
/// Mutations performed by [`apply`](Self::apply) have no defined rollback; a
/// failure during resolution or merge leaves the live tree in whatever state
/// the engine defines.
pub trait OverlayEngine {
    /// A parsed tree fragment that is not yet part of the live tree.
    type Fragment;
    /// The error returned when a pipeline step fails.
    type Error: fmt::Display;

    /// Unflattens a raw blob into a detachable tree fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be parsed.
    fn unflatten(&mut self, blob: &[u8]) -> Result<Self::Fragment, Self::Error>;

    /// Marks the fragment as detached from the live composition.
    fn mark_detached(&mut self, fragment: &mut Self::Fragment);

    /// Resolves all phandle references in the fragment against the live tree.
    ///
    /// # Errors
    ///
    /// Returns an error if any reference cannot be resolved.
    fn resolve_phandles(&mut self, fragment: &mut Self::Fragment) -> Result<(), Self::Error>;

    /// Merges the fragment into the live tree, consuming it.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the merge.
    fn apply(&mut self, fragment: Self::Fragment) -> Result<(), Self::Error>;
}
