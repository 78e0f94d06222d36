//! Core library components.
//!
//! Reusable logic for environment resolution, credential storage, and the
//! wallet lifecycle state machine. Nothing in here reads `std::env` or
//! prompts the terminal; those concerns live in the CLI layer.

pub mod balance;
pub mod constants;
pub mod env;
pub mod keys;
pub mod keystore;
pub mod store;
pub mod wallet;
