//! Coupling records and the [`SubmodelId`] handle.
//!
//! A coupled model wires ports with three relations: external-input (its
//! own input to a submodel input), external-output (a submodel output to
//! its own output), and internal (submodel output to submodel input).
//! Couplings reference submodels by declaration index and ports by their
//! resolved names; [`CoupledBuilder`](crate::CoupledBuilder) validates
//! every reference before a coupling can reach the exporter.

use std::fmt;

/// Declaration-order index of a submodel within its parent coupled model.
///
/// Returned by [`CoupledBuilder::add_submodel`](crate::CoupledBuilder::add_submodel)
/// and used to reference that submodel in coupling declarations.
/// `SubmodelId(n)` is the n-th submodel added to the builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmodelId(pub u32);

impl fmt::Display for SubmodelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SubmodelId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// External-input coupling: the coupled model's own input port feeds a
/// submodel's input port.
///
/// `source_port` names the parent's input port. It participates in
/// validation but is not part of the rendered edge, which reports only
/// the target side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalInputCoupling {
    /// The coupled model's own input port.
    pub source_port: String,
    /// The receiving submodel.
    pub target: SubmodelId,
    /// The receiving submodel's input port.
    pub target_port: String,
}

/// External-output coupling: a submodel's output port feeds the coupled
/// model's own output port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalOutputCoupling {
    /// The emitting submodel.
    pub source: SubmodelId,
    /// The emitting submodel's output port.
    pub source_port: String,
    /// The coupled model's own output port.
    pub target_port: String,
}

/// Internal coupling: one submodel's output port feeds another submodel's
/// input port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InternalCoupling {
    /// The emitting submodel.
    pub source: SubmodelId,
    /// The emitting submodel's output port.
    pub source_port: String,
    /// The receiving submodel.
    pub target: SubmodelId,
    /// The receiving submodel's input port.
    pub target_port: String,
}
