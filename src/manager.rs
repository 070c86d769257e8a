// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The overlay loading pipeline and the manager that owns it.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, error, info};
use spin::mutex::SpinMutex;

use crate::engine::OverlayEngine;
use crate::error::{ApplyError, ApplyErrorKind};
use crate::loader::BlobLoader;
use crate::name::split_name;
use crate::registry::ActiveOverlays;

/// The overlay manager for one expansion-capable hardware node.
///
/// One manager exists per bound node; it is created when the node is bound
/// and dropped when it is unbound, taking the registry with it. Nothing is
/// persisted: overlays applied before a restart are not rediscovered.
///
/// A single lock covers the whole of every submission, from blob loading
/// through tree merge to recording. This is an exclusivity contract, not just
/// a data-race guard: at most one submission is in flight system-wide, so two
/// overlays can never race to modify the live tree, and registry order is
/// exactly submission-completion order. Callers must tolerate `submit` and
/// `apply` blocking for the full duration of blob I/O and tree merge.
pub struct ExpansionManager<L, E> {
    inner: SpinMutex<Inner<L, E>>,
}

impl<L: BlobLoader, E: OverlayEngine> ExpansionManager<L, E> {
    /// Creates a manager with an empty registry.
    #[must_use]
    pub const fn new(loader: L, engine: E) -> Self {
        Self {
            inner: SpinMutex::new(Inner {
                loader,
                engine,
                overlays: ActiveOverlays::new(),
            }),
        }
    }

    /// Loads, resolves, and applies the overlay named `name`, recording it on
    /// success.
    ///
    /// A failed attempt is final for this call; nothing is retried and the
    /// registry is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first pipeline failure: [`ApplyErrorKind::NotFound`] if
    /// the blob cannot be loaded, [`ApplyErrorKind::MalformedBlob`] if it
    /// cannot be unflattened, [`ApplyErrorKind::UnresolvedReferences`] or
    /// [`ApplyErrorKind::ApplyRejected`] from the engine, or
    /// [`ApplyErrorKind::OutOfMemory`] if recording fails.
    pub fn apply(&self, name: &str) -> Result<(), ApplyError> {
        self.inner.lock().submit_name(name)
    }

    /// Handles one raw submission from the control surface.
    ///
    /// Extracts a single name (up to the first NUL or newline, terminator
    /// dropped) and applies it as [`apply`](Self::apply) does. Returns the
    /// number of submission bytes consumed.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`apply`](Self::apply). Name bytes that are
    /// not valid UTF-8 cannot name any blob and are reported as
    /// [`ApplyErrorKind::NotFound`].
    pub fn submit(&self, buf: &[u8]) -> Result<usize, ApplyError> {
        let (raw, consumed) = split_name(buf);
        let Ok(name) = core::str::from_utf8(raw) else {
            return Err(ApplyError::new(
                ApplyErrorKind::NotFound,
                String::from_utf8_lossy(raw).into_owned(),
            ));
        };
        self.inner.lock().submit_name(name)?;
        Ok(consumed)
    }

    /// Returns a snapshot of the applied overlay names, in application order.
    #[must_use]
    pub fn overlays(&self) -> Vec<String> {
        self.inner.lock().overlays.names()
    }

    /// Renders the registry for the control surface, one name per line, in
    /// application order. Empty if no overlay has been applied.
    #[must_use]
    pub fn render(&self) -> String {
        let inner = self.inner.lock();
        let mut out = String::new();
        for record in &inner.overlays {
            out.push_str(record.name());
            out.push('\n');
        }
        out
    }
}

impl<L, E> fmt::Debug for ExpansionManager<L, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpansionManager").finish_non_exhaustive()
    }
}

struct Inner<L, E> {
    loader: L,
    engine: E,
    overlays: ActiveOverlays,
}

impl<L: BlobLoader, E: OverlayEngine> Inner<L, E> {
    /// Runs the pipeline for `name` and records it on success. The caller
    /// holds the lock for the whole span.
    fn submit_name(&mut self, name: &str) -> Result<(), ApplyError> {
        self.load_overlay(name)?;
        self.overlays
            .record(String::from(name))
            .map_err(|_err| ApplyError::new(ApplyErrorKind::OutOfMemory, String::from(name)))
    }

    /// Loads the blob for `name` and drives it through the engine. The blob
    /// and any fragment are owned locally, so they are released on every exit
    /// path.
    fn load_overlay(&mut self, name: &str) -> Result<(), ApplyError> {
        let blob = self.loader.load(name).map_err(|err| {
            debug!("failed to load blob '{name}': {err}");
            ApplyError::new(ApplyErrorKind::NotFound, String::from(name))
        })?;

        let mut fragment = self.engine.unflatten(&blob).map_err(|err| {
            error!("failed to unflatten '{name}': {err}");
            ApplyError::new(ApplyErrorKind::MalformedBlob, String::from(name))
        })?;

        // Must precede phandle resolution.
        self.engine.mark_detached(&mut fragment);

        self.engine.resolve_phandles(&mut fragment).map_err(|err| {
            error!("failed to resolve '{name}': {err}");
            ApplyError::new(ApplyErrorKind::UnresolvedReferences, String::from(name))
        })?;

        self.engine.apply(fragment).map_err(|err| {
            error!("failed to create overlay '{name}': {err}");
            ApplyError::new(ApplyErrorKind::ApplyRejected, String::from(name))
        })?;

        info!("overlay '{name}' loaded");
        Ok(())
    }
}
