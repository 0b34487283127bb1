//! Core types and trait definitions for the student roster.
//!
//! This crate is deliberately free of database and terminal dependencies.
//! The SQLite backend and the interactive shell both depend on it.

pub mod error;
pub mod grade;
pub mod report;
pub mod store;
pub mod student;

pub use error::{Error, Result, StoreError};
