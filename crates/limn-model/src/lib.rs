//! Runtime model metadata for the limn structural exporter.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! descriptors a simulation model registers at definition time — structural
//! names, directional port tables, submodel lists, and coupling relations —
//! plus the builders that collect and validate those declarations.
//!
//! A model is either *atomic* (ports, no internal structure) or *coupled*
//! (ports, submodels, and couplings wiring them together). Both are held in
//! the [`ModelNode`] tagged variant, which is the unit the exporter in
//! `limn-export` traverses.
//!
//! Construction goes through [`AtomicBuilder`] and [`CoupledBuilder`];
//! `build()` validates every port and coupling reference, so a finished
//! [`ModelNode`] is structurally sound by construction and traversal over
//! it can never fail.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod coupling;
pub mod error;
pub mod model;
pub mod name;
pub mod port;

pub use builder::{AtomicBuilder, CoupledBuilder};
pub use coupling::{ExternalInputCoupling, ExternalOutputCoupling, InternalCoupling, SubmodelId};
pub use error::BuildError;
pub use model::{AtomicModel, CoupledModel, ModelKind, ModelNode};
pub use name::ModelName;
pub use port::{PortKind, PortTable};
