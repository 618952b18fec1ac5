//! Test utilities for Census development.
//!
//! Provides literal-grid fixtures ([`grid_from_ascii`], [`place`]) and mock
//! frame sinks ([`RecordingSink`], [`FailingSink`]) for driving the engine
//! in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod sinks;

pub use fixtures::{grid_from_ascii, place, render};
pub use sinks::{FailingSink, RecordedFrame, RecordingSink};
