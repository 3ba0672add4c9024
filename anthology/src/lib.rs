//! # Anthology
//!
//! The "Syllabus Bible" crate - contains the literary works, their study
//! apparatus, and the validated catalog they live in. This crate is the single
//! source of truth for study content and does not contain any session logic.

pub mod catalog;
pub mod library;
pub mod works;

pub use catalog::*;
pub use works::*;
