//! Domain models for the showroom.

pub mod account;

pub use account::Account;
