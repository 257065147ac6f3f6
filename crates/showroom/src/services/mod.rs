//! Business logic services for the showroom page.
//!
//! # Services
//!
//! - `auth` - The signup/login/verification flows behind the account modal
//! - `verification` - One-time codes and the delivery seam

pub mod auth;
pub mod verification;
