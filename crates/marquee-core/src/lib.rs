//! Core types and trait definitions for the Marquee booking store.
//!
//! This crate carries the domain model, the store abstraction, and the pure
//! query/aggregation logic. It is deliberately free of HTTP and database
//! dependencies; every other crate in the workspace depends on it.

// `BookingStore` spells out `Send` bounds on its returned futures; the
// advisory lint on async trait methods is noise here.
#![allow(async_fn_in_trait)]

pub mod area;
pub mod artist;
pub mod datefmt;
pub mod error;
pub mod schedule;
pub mod show;
pub mod store;
pub mod venue;

mod validate;

pub use error::{Error, Result};
