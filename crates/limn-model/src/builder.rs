//! Builders that collect model declarations and validate them in `build()`.
//!
//! Declarations accumulate in call order; nothing is checked until
//! `build()`, which verifies port-name uniqueness and every coupling
//! reference in one pass and returns the first violation found.

use crate::coupling::{ExternalInputCoupling, ExternalOutputCoupling, InternalCoupling, SubmodelId};
use crate::error::BuildError;
use crate::model::{AtomicModel, CoupledModel, ModelNode};
use crate::name::ModelName;
use crate::port::{PortKind, PortTable};

/// One declared port: an optional author-chosen name and a message type.
///
/// Unnamed ports receive a structural fallback name at build time,
/// derived from direction, position, and message type (`in0<tick>`), so
/// every port in a finished model has a stable resolved name.
type PortDecl = (Option<String>, String);

fn build_table(entries: Vec<PortDecl>, kind: PortKind) -> Result<PortTable, BuildError> {
    let mut table = PortTable::new();
    for (index, (name, message_type)) in entries.into_iter().enumerate() {
        let name = name.unwrap_or_else(|| format!("{kind}{index}<{message_type}>"));
        if !table.add(name.clone(), message_type) {
            return Err(BuildError::DuplicatePort { kind, name });
        }
    }
    Ok(table)
}

// ── AtomicBuilder ──────────────────────────────────────────────────

/// Collects the declarations of an atomic model.
///
/// # Examples
///
/// ```
/// use limn_model::{AtomicBuilder, ModelName};
///
/// let processor = AtomicBuilder::new(ModelName::parameterized("processor", ["f64"]))
///     .input("job_in", "job")
///     .output("done_out", "job")
///     .build()
///     .unwrap();
///
/// assert_eq!(processor.signature(), "processor<f64>");
/// assert_eq!(processor.inputs().get("job_in"), Some("job"));
/// ```
#[derive(Clone, Debug)]
pub struct AtomicBuilder {
    name: ModelName,
    inputs: Vec<PortDecl>,
    outputs: Vec<PortDecl>,
}

impl AtomicBuilder {
    /// Start declaring an atomic model with the given structural name.
    pub fn new(name: impl Into<ModelName>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Declare a named input port carrying the given message type.
    pub fn input(mut self, name: impl Into<String>, message_type: impl Into<String>) -> Self {
        self.inputs.push((Some(name.into()), message_type.into()));
        self
    }

    /// Declare an unnamed input port; a structural fallback name is
    /// assigned at build time.
    pub fn input_anon(mut self, message_type: impl Into<String>) -> Self {
        self.inputs.push((None, message_type.into()));
        self
    }

    /// Declare a named output port carrying the given message type.
    pub fn output(mut self, name: impl Into<String>, message_type: impl Into<String>) -> Self {
        self.outputs.push((Some(name.into()), message_type.into()));
        self
    }

    /// Declare an unnamed output port; a structural fallback name is
    /// assigned at build time.
    pub fn output_anon(mut self, message_type: impl Into<String>) -> Self {
        self.outputs.push((None, message_type.into()));
        self
    }

    /// Validate the declarations and produce the model.
    pub fn build(self) -> Result<AtomicModel, BuildError> {
        Ok(AtomicModel {
            name: self.name,
            inputs: build_table(self.inputs, PortKind::In)?,
            outputs: build_table(self.outputs, PortKind::Out)?,
        })
    }
}

// ── CoupledBuilder ─────────────────────────────────────────────────

/// Collects the declarations of a coupled model: ports, submodels, and
/// couplings.
///
/// Submodels are added first and referenced in coupling declarations by
/// the [`SubmodelId`] handle [`add_submodel`](Self::add_submodel) returns.
/// `build()` resolves and checks every reference; the first dangling one
/// is reported as a [`BuildError`].
///
/// # Examples
///
/// ```
/// use limn_model::{AtomicBuilder, CoupledBuilder, ModelName};
///
/// let generator = AtomicBuilder::new(ModelName::parameterized("generator", ["f64"]))
///     .output("pulse_out", "pulse")
///     .build()
///     .unwrap();
///
/// let mut shell = CoupledBuilder::new(ModelName::parameterized("shell", ["f64"]))
///     .output("out", "pulse");
/// let g = shell.add_submodel(generator);
/// let shell = shell.external_output(g, "pulse_out", "out").build().unwrap();
///
/// assert_eq!(shell.submodels().len(), 1);
/// assert_eq!(shell.eoc().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CoupledBuilder {
    name: ModelName,
    inputs: Vec<PortDecl>,
    outputs: Vec<PortDecl>,
    submodels: Vec<ModelNode>,
    eic: Vec<ExternalInputCoupling>,
    eoc: Vec<ExternalOutputCoupling>,
    ic: Vec<InternalCoupling>,
}

impl CoupledBuilder {
    /// Start declaring a coupled model with the given structural name.
    pub fn new(name: impl Into<ModelName>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            submodels: Vec::new(),
            eic: Vec::new(),
            eoc: Vec::new(),
            ic: Vec::new(),
        }
    }

    /// Declare a named input port carrying the given message type.
    pub fn input(mut self, name: impl Into<String>, message_type: impl Into<String>) -> Self {
        self.inputs.push((Some(name.into()), message_type.into()));
        self
    }

    /// Declare an unnamed input port; a structural fallback name is
    /// assigned at build time.
    pub fn input_anon(mut self, message_type: impl Into<String>) -> Self {
        self.inputs.push((None, message_type.into()));
        self
    }

    /// Declare a named output port carrying the given message type.
    pub fn output(mut self, name: impl Into<String>, message_type: impl Into<String>) -> Self {
        self.outputs.push((Some(name.into()), message_type.into()));
        self
    }

    /// Declare an unnamed output port; a structural fallback name is
    /// assigned at build time.
    pub fn output_anon(mut self, message_type: impl Into<String>) -> Self {
        self.outputs.push((None, message_type.into()));
        self
    }

    /// Add a submodel (atomic or coupled) and return the handle used to
    /// reference it in coupling declarations.
    ///
    /// Submodel declaration order is preserved through export.
    pub fn add_submodel(&mut self, model: impl Into<ModelNode>) -> SubmodelId {
        let id = SubmodelId(self.submodels.len() as u32);
        self.submodels.push(model.into());
        id
    }

    /// Couple this model's own input port to a submodel's input port.
    pub fn external_input(
        mut self,
        own_port: impl Into<String>,
        target: SubmodelId,
        target_port: impl Into<String>,
    ) -> Self {
        self.eic.push(ExternalInputCoupling {
            source_port: own_port.into(),
            target,
            target_port: target_port.into(),
        });
        self
    }

    /// Couple a submodel's output port to this model's own output port.
    pub fn external_output(
        mut self,
        source: SubmodelId,
        source_port: impl Into<String>,
        own_port: impl Into<String>,
    ) -> Self {
        self.eoc.push(ExternalOutputCoupling {
            source,
            source_port: source_port.into(),
            target_port: own_port.into(),
        });
        self
    }

    /// Couple one submodel's output port to another submodel's input port.
    pub fn internal(
        mut self,
        source: SubmodelId,
        source_port: impl Into<String>,
        target: SubmodelId,
        target_port: impl Into<String>,
    ) -> Self {
        self.ic.push(InternalCoupling {
            source,
            source_port: source_port.into(),
            target,
            target_port: target_port.into(),
        });
        self
    }

    /// Validate all declarations and produce the model.
    ///
    /// Checks, in order: port-name uniqueness per direction, then every
    /// coupling in declaration order per relation (external-input,
    /// external-output, internal). Each coupling's submodel index must be
    /// in range and each referenced port must exist with the direction
    /// the relation requires.
    pub fn build(self) -> Result<CoupledModel, BuildError> {
        let inputs = build_table(self.inputs, PortKind::In)?;
        let outputs = build_table(self.outputs, PortKind::Out)?;

        for c in &self.eic {
            if !inputs.contains(&c.source_port) {
                return Err(BuildError::MissingOwnPort {
                    kind: PortKind::In,
                    name: c.source_port.clone(),
                });
            }
            let target = resolve(&self.submodels, c.target)?;
            if !target.inputs().contains(&c.target_port) {
                return Err(BuildError::MissingSubmodelPort {
                    model: target.name().to_string(),
                    kind: PortKind::In,
                    name: c.target_port.clone(),
                });
            }
        }

        for c in &self.eoc {
            let source = resolve(&self.submodels, c.source)?;
            if !source.outputs().contains(&c.source_port) {
                return Err(BuildError::MissingSubmodelPort {
                    model: source.name().to_string(),
                    kind: PortKind::Out,
                    name: c.source_port.clone(),
                });
            }
            if !outputs.contains(&c.target_port) {
                return Err(BuildError::MissingOwnPort {
                    kind: PortKind::Out,
                    name: c.target_port.clone(),
                });
            }
        }

        for c in &self.ic {
            let source = resolve(&self.submodels, c.source)?;
            if !source.outputs().contains(&c.source_port) {
                return Err(BuildError::MissingSubmodelPort {
                    model: source.name().to_string(),
                    kind: PortKind::Out,
                    name: c.source_port.clone(),
                });
            }
            let target = resolve(&self.submodels, c.target)?;
            if !target.inputs().contains(&c.target_port) {
                return Err(BuildError::MissingSubmodelPort {
                    model: target.name().to_string(),
                    kind: PortKind::In,
                    name: c.target_port.clone(),
                });
            }
        }

        Ok(CoupledModel {
            name: self.name,
            inputs,
            outputs,
            submodels: self.submodels,
            eic: self.eic,
            eoc: self.eoc,
            ic: self.ic,
        })
    }
}

fn resolve(submodels: &[ModelNode], id: SubmodelId) -> Result<&ModelNode, BuildError> {
    submodels.get(id.0 as usize).ok_or(BuildError::UnknownSubmodel {
        id,
        count: submodels.len(),
    })
}
