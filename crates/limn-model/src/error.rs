//! Error types for model construction.

use std::error::Error;
use std::fmt;

use crate::coupling::SubmodelId;
use crate::port::PortKind;

/// Errors detected while validating builder declarations in `build()`.
///
/// A model that fails to build never exists as a [`ModelNode`](crate::ModelNode),
/// which is what lets the exporter treat every node it receives as
/// structurally sound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Two ports of the same direction share a name.
    DuplicatePort {
        /// Direction of the colliding ports.
        kind: PortKind,
        /// The name declared twice.
        name: String,
    },
    /// A coupling references a submodel index that was never declared.
    UnknownSubmodel {
        /// The out-of-range reference.
        id: SubmodelId,
        /// How many submodels the model declares.
        count: usize,
    },
    /// A coupling references a port the coupled model itself does not declare.
    MissingOwnPort {
        /// Direction the coupling requires.
        kind: PortKind,
        /// The referenced port name.
        name: String,
    },
    /// A coupling references a port its target submodel does not declare.
    MissingSubmodelPort {
        /// Rendered name of the submodel.
        model: String,
        /// Direction the coupling requires.
        kind: PortKind,
        /// The referenced port name.
        name: String,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePort { kind, name } => {
                write!(f, "duplicate {kind} port '{name}'")
            }
            Self::UnknownSubmodel { id, count } => {
                write!(f, "submodel index {id} out of range ({count} declared)")
            }
            Self::MissingOwnPort { kind, name } => {
                write!(f, "model declares no {kind} port '{name}'")
            }
            Self::MissingSubmodelPort { model, kind, name } => {
                write!(f, "submodel '{model}' declares no {kind} port '{name}'")
            }
        }
    }
}

impl Error for BuildError {}
