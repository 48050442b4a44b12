//! Test fixtures for limn development.
//!
//! Canonical model instances shared by the test suites: a handful of
//! atomic models, a generator-in-a-shell coupled model, a two-stage
//! pipeline exercising all three coupling kinds, and a nesting helper
//! for depth-limit tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{
    empty_shell, generator_shell, nested_shell, relay_pipeline, silent, tick_generator,
    tick_relay, tick_sink,
};
