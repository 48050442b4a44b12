//! Structure export and JSON rendering for limn models.
//!
//! Walks an already-built [`ModelNode`](limn_model::ModelNode) tree and
//! produces a JSON description of its static structure: model identity,
//! port lists, and — for coupled models — coupling edges and recursively
//! the submodel tree. The exporter exists to make a model inspectable for
//! debugging and documentation; it does not run or validate simulations.
//!
//! # Architecture
//!
//! - [`export_tree`] builds an [`ExportNode`] tree from a model, with an
//!   optional recursion depth limit
//! - [`render_to_string`] / [`render_to_writer`] serialize a tree as
//!   pretty-printed JSON
//! - [`export_to_writer`] composes the two for the common case
//!
//! Export itself is infallible: builder validation in `limn-model`
//! guarantees every reference the walk resolves. Only rendering can fail,
//! and those failures surface unmodified as [`ExportError`].
//!
//! # Output shape
//!
//! One JSON object per export, keys in this order, with empty sections
//! omitted rather than rendered as empty lists:
//!
//! ```text
//! {
//!   "id": "...",            // structural signature, always present
//!   "type": "atomic" | "coupled",
//!   "ic":  [...],           // coupled only, omitted if empty
//!   "eic": [...],           // coupled only, omitted if empty
//!   "eoc": [...],           // coupled only, omitted if empty
//!   "ports": { "in": [...], "out": [...] },  // omitted when portless
//!   "models": [...]         // coupled only, omitted if empty or depth-cut
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod export;
pub mod node;
pub mod render;

pub use error::ExportError;
pub use export::export_tree;
pub use node::{
    Direction, ExportNode, ExternalInputEdge, ExternalOutputEdge, InternalEdge, NodeKind,
    NodePorts, PortDescriptor,
};
pub use render::{export_to_writer, render_to_string, render_to_writer};
