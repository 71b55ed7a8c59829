//! Shared types and logic for the order details screen.
//!
//! Everything here compiles both natively and to wasm32, so the frontend
//! and the test suite run the same mapping code.

pub mod domain;
pub mod shared;
