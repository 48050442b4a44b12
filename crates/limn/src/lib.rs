//! limn: structural inspection and JSON export for discrete-event
//! simulation models.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the limn sub-crates. For most users, adding `limn` as a single
//! dependency is sufficient.
//!
//! A simulation model registers its static structure — name, ports,
//! submodels, couplings — through the builders in [`model`]; the
//! exporter in [`export`] walks the result and renders a JSON
//! description of it for debugging and documentation. Nothing here runs
//! a simulation.
//!
//! # Quick start
//!
//! ```rust
//! use limn::prelude::*;
//!
//! // An atomic generator emitting `pulse` messages.
//! let generator = AtomicBuilder::new(ModelName::parameterized("generator", ["f64"]))
//!     .output("pulse_out", "pulse")
//!     .build()
//!     .unwrap();
//!
//! // A coupled shell forwarding the generator's output.
//! let mut shell = CoupledBuilder::new(ModelName::parameterized("shell", ["f64"]))
//!     .output("out", "pulse");
//! let g = shell.add_submodel(generator);
//! let model: ModelNode = shell
//!     .external_output(g, "pulse_out", "out")
//!     .build()
//!     .unwrap()
//!     .into();
//!
//! // Walk the structure and render it.
//! let tree = export_tree(&model, None);
//! let json = render_to_string(&tree).unwrap();
//! assert!(json.contains("\"type\": \"coupled\""));
//!
//! // Depth 0 keeps the root's identity and couplings but no submodels.
//! assert!(export_tree(&model, Some(0)).models.is_empty());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`model`] | `limn-model` | Model metadata: names, port tables, couplings, builders |
//! | [`export`] | `limn-export` | Export tree, depth policy, JSON rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Model metadata: names, port tables, couplings, builders (`limn-model`).
///
/// Models are declared through [`model::AtomicBuilder`] and
/// [`model::CoupledBuilder`]; a finished [`model::ModelNode`] is
/// structurally validated and ready to export.
pub use limn_model as model;

/// Structure export and JSON rendering (`limn-export`).
///
/// [`export::export_tree`] builds the [`export::ExportNode`] tree;
/// [`export::render_to_string`] and [`export::render_to_writer`] turn it
/// into pretty-printed JSON.
pub use limn_export as export;

/// Common imports for typical limn usage.
///
/// ```rust
/// use limn::prelude::*;
/// ```
///
/// This imports the builders, the core metadata types, the export entry
/// points, and both error types.
pub mod prelude {
    // Model metadata
    pub use limn_model::{
        AtomicBuilder, AtomicModel, BuildError, CoupledBuilder, CoupledModel, ModelKind,
        ModelName, ModelNode, PortKind, PortTable, SubmodelId,
    };

    // Export
    pub use limn_export::{
        export_to_writer, export_tree, render_to_string, render_to_writer, ExportError,
        ExportNode, NodeKind,
    };
}
