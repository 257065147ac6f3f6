//! Apex GT Showroom library.
//!
//! Client-side logic of the Apex GT landing page, usable and testable
//! without a browser: the profile-backed account store, the
//! signup/login/verification flows, the theme preference, and the hidden
//! login easter egg.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod easter_egg;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod theme;
