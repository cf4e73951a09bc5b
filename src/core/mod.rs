//! Core business logic - framework-agnostic fulfillment operations.
//!
//! The workflow here owns every decision about whether a request may fulfill
//! an order; the store layer in [`crate::db`] owns how the answer is read
//! from and written to the database.

pub mod fulfillment;
