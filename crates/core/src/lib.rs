//! Apex GT Core - Shared types library.
//!
//! This crate provides common types used across the Apex GT showroom
//! components:
//! - `showroom` - The landing page's client-side logic
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! side effects. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Theme mode and the paint catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
