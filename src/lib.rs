// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A library for managing runtime application of device tree overlays.
//!
//! Expansion boards plugged in after boot need their hardware description
//! added to the running system's device tree without a recompile or reboot.
//! This library provides the management core for that: it takes an overlay
//! name, fetches the blob, drives it through an overlay engine (unflatten,
//! detach, resolve phandles, merge), and keeps an ordered registry of every
//! overlay applied since the managing node was bound.
//!
//! The library is written purely in Rust and is `#![no_std]` compatible
//! (`alloc` is required). It deliberately does not fetch blobs or manipulate
//! trees itself; those concerns sit behind the
//! [`BlobLoader`](loader::BlobLoader) and
//! [`OverlayEngine`](engine::OverlayEngine) traits, implemented by the host
//! platform.
//!
//! ## Submissions
//!
//! The [`ExpansionManager`](manager::ExpansionManager) is the entry point.
//! Each submission is serialized under a single lock spanning blob loading,
//! tree merge, and registry update, so concurrent submissions can never
//! interleave their effects on the live tree. Failed submissions leave the
//! registry untouched; successful ones append exactly one record. Records
//! are never removed or de-duplicated.
//!
//! # Examples
//!
//! ```
//! use expansion_manager::engine::OverlayEngine;
//! use expansion_manager::error::ApplyErrorKind;
//! use expansion_manager::loader::BlobLoader;
//! use expansion_manager::manager::ExpansionManager;
//!
//! // Serves a single built-in blob.
//! struct OneBlob;
//!
//! impl BlobLoader for OneBlob {
//!     type Error = &'static str;
//!
//!     fn load(&mut self, name: &str) -> Result<Vec<u8>, Self::Error> {
//!         if name == "board-a.dtbo" {
//!             Ok(vec![0xd0, 0x0d, 0xfe, 0xed])
//!         } else {
//!             Err("no such blob")
//!         }
//!     }
//! }
//!
//! // Accepts every overlay without touching a real tree.
//! struct AcceptAll;
//!
//! impl OverlayEngine for AcceptAll {
//!     type Fragment = Vec<u8>;
//!     type Error = &'static str;
//!
//!     fn unflatten(&mut self, blob: &[u8]) -> Result<Vec<u8>, Self::Error> {
//!         Ok(blob.to_vec())
//!     }
//!
//!     fn mark_detached(&mut self, _fragment: &mut Vec<u8>) {}
//!
//!     fn resolve_phandles(&mut self, _fragment: &mut Vec<u8>) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     fn apply(&mut self, _fragment: Vec<u8>) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! let manager = ExpansionManager::new(OneBlob, AcceptAll);
//!
//! // A write to the control surface, newline-terminated.
//! let consumed = manager.submit(b"board-a.dtbo\n").unwrap();
//! assert_eq!(consumed, 13);
//! assert_eq!(manager.render(), "board-a.dtbo\n");
//!
//! // A name the loader cannot resolve fails and records nothing.
//! let err = manager.apply("missing.dtbo").unwrap_err();
//! assert_eq!(err.kind, ApplyErrorKind::NotFound);
//! assert_eq!(manager.overlays(), ["board-a.dtbo"]);
//! ```

#![no_std]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

extern crate alloc;

pub mod engine;
pub mod error;
pub mod loader;
pub mod manager;
pub mod name;
pub mod registry;
