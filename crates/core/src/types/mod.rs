//! Core types for the Apex GT showroom.
//!
//! This module provides type-safe representations of page-level concepts.

pub mod paint;
pub mod theme;

pub use paint::{Paint, PaintInfo};
pub use theme::ThemeMode;
