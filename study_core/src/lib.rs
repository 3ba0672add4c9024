//! # Study Core (Marginalia)
//!
//! The engine of the literature study browser. This crate interfaces with
//! `anthology`, filters the reading list through free-text search, and walks a
//! reader through a work's study views, quiz and comprehension passages.
//!
//! ## Core Components
//!
//! - **search**: Case-insensitive substring filtering over title, author and themes
//! - **session**: The per-reader navigator state machine and its progress records
//!
//! ## Design Philosophy
//!
//! - **Content-Driven**: Which study views a work offers is derived from its
//!   apparatus lists, never from flags kept alongside them
//! - **No Failure Modes**: Out-of-range input clamps or is ignored; integrity
//!   problems are caught when the catalog is built, not here
//! - **Borrow-Per-Call**: Sessions hold IDs and indices only; the catalog is
//!   passed into each operation and never stored

pub mod search;
pub mod session;

pub use search::*;
pub use session::*;
