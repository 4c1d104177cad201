//! Menu recommendations ranked against a user's daily macro goals.
//!
//! The [`recommendations`] module holds the scorer and ranking; [`catalog`]
//! supplies menu data. The remaining modules carry the service plumbing.

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommendations;
pub mod telemetry;
