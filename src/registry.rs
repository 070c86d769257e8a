// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The registry of overlays applied since the manager was created.

use alloc::collections::TryReserveError;
use alloc::string::String;
use alloc::vec::Vec;

/// One successfully applied overlay.
///
/// Records are created only after the engine has merged the overlay into the
/// live tree and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRecord {
    name: String,
}

impl OverlayRecord {
    /// Returns the name the overlay blob was requested under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An append-only, ordered collection of [`OverlayRecord`]s.
///
/// Records are kept in application order and are never re-sorted,
/// de-duplicated, or removed; the collection lives exactly as long as the
/// manager that owns it.
#[derive(Debug, Default)]
pub struct ActiveOverlays {
    records: Vec<OverlayRecord>,
}

impl ActiveOverlays {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record for `name` at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns an error only if the allocation for the record fails.
    pub fn record(&mut self, name: String) -> Result<(), TryReserveError> {
        self.records.try_reserve(1)?;
        self.records.push(OverlayRecord { name });
        Ok(())
    }

    /// Returns a snapshot of the recorded names, in application order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.name.clone())
            .collect()
    }

    /// Returns an iterator over the records, in application order.
    pub fn iter(&self) -> core::slice::Iter<'_, OverlayRecord> {
        self.records.iter()
    }

    /// Returns the number of applied overlays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no overlay has been applied yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ActiveOverlays {
    type Item = &'a OverlayRecord;
    type IntoIter = core::slice::Iter<'a, OverlayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
