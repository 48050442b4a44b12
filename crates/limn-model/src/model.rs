//! Atomic and coupled model descriptors and the [`ModelNode`] variant.

use std::fmt;
use std::fmt::Write as _;

use crate::coupling::{ExternalInputCoupling, ExternalOutputCoupling, InternalCoupling, SubmodelId};
use crate::name::ModelName;
use crate::port::PortTable;

/// Classification of a model: leaf or composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// A leaf model with ports but no internal structure.
    Atomic,
    /// A composite of submodels wired together by couplings.
    Coupled,
}

impl ModelKind {
    /// The lowercase tag used in rendered output (`"atomic"` / `"coupled"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Atomic => "atomic",
            Self::Coupled => "coupled",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AtomicModel ────────────────────────────────────────────────────

/// A leaf simulation component: a structural name and two port tables.
///
/// Constructed through [`AtomicBuilder`](crate::AtomicBuilder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtomicModel {
    pub(crate) name: ModelName,
    pub(crate) inputs: PortTable,
    pub(crate) outputs: PortTable,
}

impl AtomicModel {
    /// The model's structural name.
    pub fn name(&self) -> &ModelName {
        &self.name
    }

    /// Input ports in declaration order.
    pub fn inputs(&self) -> &PortTable {
        &self.inputs
    }

    /// Output ports in declaration order.
    pub fn outputs(&self) -> &PortTable {
        &self.outputs
    }

    /// The structural signature: for an atomic model, the rendered name.
    ///
    /// Pure and total — two calls on the same model always return the
    /// same string.
    pub fn signature(&self) -> String {
        self.name.to_string()
    }
}

// ── CoupledModel ───────────────────────────────────────────────────

/// A composite simulation component: ports, submodels, and the three
/// coupling relations wiring them together.
///
/// Constructed through [`CoupledBuilder`](crate::CoupledBuilder), which
/// validates every coupling reference, so an existing `CoupledModel` is
/// structurally sound: all submodel indices are in range and all
/// referenced ports exist with the right direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoupledModel {
    pub(crate) name: ModelName,
    pub(crate) inputs: PortTable,
    pub(crate) outputs: PortTable,
    pub(crate) submodels: Vec<ModelNode>,
    pub(crate) eic: Vec<ExternalInputCoupling>,
    pub(crate) eoc: Vec<ExternalOutputCoupling>,
    pub(crate) ic: Vec<InternalCoupling>,
}

impl CoupledModel {
    /// The model's structural name.
    pub fn name(&self) -> &ModelName {
        &self.name
    }

    /// Input ports in declaration order.
    pub fn inputs(&self) -> &PortTable {
        &self.inputs
    }

    /// Output ports in declaration order.
    pub fn outputs(&self) -> &PortTable {
        &self.outputs
    }

    /// Submodels in declaration order.
    pub fn submodels(&self) -> &[ModelNode] {
        &self.submodels
    }

    /// Look up a submodel by its declaration index.
    pub fn submodel(&self, id: SubmodelId) -> Option<&ModelNode> {
        self.submodels.get(id.0 as usize)
    }

    /// External-input couplings in declaration order.
    pub fn eic(&self) -> &[ExternalInputCoupling] {
        &self.eic
    }

    /// External-output couplings in declaration order.
    pub fn eoc(&self) -> &[ExternalOutputCoupling] {
        &self.eoc
    }

    /// Internal couplings in declaration order.
    pub fn ic(&self) -> &[InternalCoupling] {
        &self.ic
    }

    /// The structural signature: the rendered name followed by the
    /// canonical expansion of the model's full shape.
    ///
    /// The expansion lists ports, submodel signatures (recursively), and
    /// all three coupling relations, with submodels referenced by
    /// declaration index inside the coupling sections:
    ///
    /// ```text
    /// name{in[a:T,...];out[...];models[sig0;sig1];eic[a->0.b];eoc[0.c->d];ic[0.c->1.a]}
    /// ```
    ///
    /// Empty sections render as empty brackets, so structurally different
    /// models cannot collide by section elision. Like
    /// [`AtomicModel::signature`], this is a pure function of the
    /// metadata.
    pub fn signature(&self) -> String {
        let mut sig = self.name.to_string();
        sig.push_str("{in[");
        render_ports(&mut sig, &self.inputs);
        sig.push_str("];out[");
        render_ports(&mut sig, &self.outputs);
        sig.push_str("];models[");
        for (i, submodel) in self.submodels.iter().enumerate() {
            if i > 0 {
                sig.push(';');
            }
            sig.push_str(&submodel.signature());
        }
        sig.push_str("];eic[");
        for (i, c) in self.eic.iter().enumerate() {
            if i > 0 {
                sig.push(',');
            }
            let _ = write!(sig, "{}->{}.{}", c.source_port, c.target, c.target_port);
        }
        sig.push_str("];eoc[");
        for (i, c) in self.eoc.iter().enumerate() {
            if i > 0 {
                sig.push(',');
            }
            let _ = write!(sig, "{}.{}->{}", c.source, c.source_port, c.target_port);
        }
        sig.push_str("];ic[");
        for (i, c) in self.ic.iter().enumerate() {
            if i > 0 {
                sig.push(',');
            }
            let _ = write!(
                sig,
                "{}.{}->{}.{}",
                c.source, c.source_port, c.target, c.target_port
            );
        }
        sig.push_str("]}");
        sig
    }
}

fn render_ports(out: &mut String, table: &PortTable) {
    for (i, (name, msg)) in table.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{name}:{msg}");
    }
}

// ── ModelNode ──────────────────────────────────────────────────────

/// A model of either kind, as held in a submodel tree.
///
/// Submodels are owned values, so a model graph is a finite tree by
/// construction — cycles cannot be expressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelNode {
    /// A leaf model.
    Atomic(AtomicModel),
    /// A composite model.
    Coupled(CoupledModel),
}

impl ModelNode {
    /// Which kind of model this node holds.
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::Atomic(_) => ModelKind::Atomic,
            Self::Coupled(_) => ModelKind::Coupled,
        }
    }

    /// The model's structural name.
    pub fn name(&self) -> &ModelName {
        match self {
            Self::Atomic(m) => m.name(),
            Self::Coupled(m) => m.name(),
        }
    }

    /// Input ports in declaration order.
    pub fn inputs(&self) -> &PortTable {
        match self {
            Self::Atomic(m) => m.inputs(),
            Self::Coupled(m) => m.inputs(),
        }
    }

    /// Output ports in declaration order.
    pub fn outputs(&self) -> &PortTable {
        match self {
            Self::Atomic(m) => m.outputs(),
            Self::Coupled(m) => m.outputs(),
        }
    }

    /// The structural signature of the held model.
    pub fn signature(&self) -> String {
        match self {
            Self::Atomic(m) => m.signature(),
            Self::Coupled(m) => m.signature(),
        }
    }

    /// The held atomic model, if this node is atomic.
    pub fn as_atomic(&self) -> Option<&AtomicModel> {
        match self {
            Self::Atomic(m) => Some(m),
            Self::Coupled(_) => None,
        }
    }

    /// The held coupled model, if this node is coupled.
    pub fn as_coupled(&self) -> Option<&CoupledModel> {
        match self {
            Self::Atomic(_) => None,
            Self::Coupled(m) => Some(m),
        }
    }
}

impl From<AtomicModel> for ModelNode {
    fn from(m: AtomicModel) -> Self {
        Self::Atomic(m)
    }
}

impl From<CoupledModel> for ModelNode {
    fn from(m: CoupledModel) -> Self {
        Self::Coupled(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{AtomicBuilder, CoupledBuilder};

    fn generator() -> AtomicModel {
        AtomicBuilder::new(ModelName::parameterized("gen", ["f32"]))
            .output("tick_out", "tick")
            .build()
            .unwrap()
    }

    fn shell() -> CoupledModel {
        let mut b = CoupledBuilder::new(ModelName::parameterized("shell", ["f32"]))
            .output("out", "tick");
        let g = b.add_submodel(generator());
        b.external_output(g, "tick_out", "out").build().unwrap()
    }

    #[test]
    fn atomic_signature_is_rendered_name() {
        assert_eq!(generator().signature(), "gen<f32>");
    }

    #[test]
    fn coupled_signature_expands_full_shape() {
        assert_eq!(
            shell().signature(),
            "shell<f32>{in[];out[out:tick];models[gen<f32>];eic[];eoc[0.tick_out->out];ic[]}"
        );
    }

    #[test]
    fn signature_is_referentially_transparent() {
        let model = shell();
        assert_eq!(model.signature(), model.signature());
        assert_eq!(model.clone().signature(), model.signature());
    }

    #[test]
    fn structurally_different_models_have_different_signatures() {
        let base = shell().signature();

        // Different own port name.
        let mut b = CoupledBuilder::new(ModelName::parameterized("shell", ["f32"]))
            .output("port", "tick");
        let g = b.add_submodel(generator());
        let renamed = b.external_output(g, "tick_out", "port").build().unwrap();
        assert_ne!(renamed.signature(), base);

        // Same shape, different submodel.
        let other_gen = AtomicBuilder::new(ModelName::parameterized("gen", ["f64"]))
            .output("tick_out", "tick")
            .build()
            .unwrap();
        let mut b = CoupledBuilder::new(ModelName::parameterized("shell", ["f32"]))
            .output("out", "tick");
        let g = b.add_submodel(other_gen);
        let retimed = b.external_output(g, "tick_out", "out").build().unwrap();
        assert_ne!(retimed.signature(), base);

        // No couplings at all.
        let mut b = CoupledBuilder::new(ModelName::parameterized("shell", ["f32"]))
            .output("out", "tick");
        b.add_submodel(generator());
        let unwired = b.build().unwrap();
        assert_ne!(unwired.signature(), base);
    }

    #[test]
    fn node_dispatches_by_kind() {
        let atomic = ModelNode::from(generator());
        let coupled = ModelNode::from(shell());

        assert_eq!(atomic.kind(), ModelKind::Atomic);
        assert_eq!(coupled.kind(), ModelKind::Coupled);
        assert!(atomic.as_atomic().is_some());
        assert!(atomic.as_coupled().is_none());
        assert!(coupled.as_coupled().is_some());
        assert_eq!(atomic.signature(), "gen<f32>");
        assert_eq!(coupled.name().base(), "shell");
    }

    #[test]
    fn submodel_lookup_by_id() {
        let model = shell();
        let sub = model.submodel(crate::SubmodelId(0)).unwrap();
        assert_eq!(sub.signature(), "gen<f32>");
        assert!(model.submodel(crate::SubmodelId(1)).is_none());
    }
}
