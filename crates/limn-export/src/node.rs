//! The export-node tree: serde view types for the rendered structure.
//!
//! These types define the JSON shape directly: key order follows field
//! declaration order, and the omit-when-empty output contract is carried
//! by `skip_serializing_if` attributes, so a serialized tree can never
//! contain an empty `ports`/`ic`/`eic`/`eoc`/`models` section.

use limn_model::{ModelKind, PortKind};
use serde::{Deserialize, Serialize};

/// Model kind tag rendered in the `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A leaf model.
    Atomic,
    /// A composite model.
    Coupled,
}

impl From<ModelKind> for NodeKind {
    fn from(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Atomic => Self::Atomic,
            ModelKind::Coupled => Self::Coupled,
        }
    }
}

/// Port direction tag rendered in the `port_kind` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The port receives messages.
    In,
    /// The port emits messages.
    Out,
}

impl From<PortKind> for Direction {
    fn from(kind: PortKind) -> Self {
        match kind {
            PortKind::In => Self::In,
            PortKind::Out => Self::Out,
        }
    }
}

/// One port of a model: resolved name, carried message type, direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortDescriptor {
    /// Resolved port name.
    pub name: String,
    /// Structural name of the message type carried on the port.
    pub message_type: String,
    /// Direction of the port.
    #[serde(rename = "port_kind")]
    pub direction: Direction,
}

/// The `ports` section of a node, split by direction.
///
/// A direction with no ports is omitted; a node with no ports at all
/// has no `ports` section (the [`ExportNode::ports`] field is `None`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePorts {
    /// Input ports in declaration order.
    #[serde(rename = "in", default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<PortDescriptor>,
    /// Output ports in declaration order.
    #[serde(rename = "out", default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<PortDescriptor>,
}

/// Internal coupling edge: submodel output to submodel input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalEdge {
    /// Signature of the emitting submodel.
    pub from_model: String,
    /// The emitting submodel's output port.
    pub from_port: String,
    /// Signature of the receiving submodel.
    pub to_model: String,
    /// The receiving submodel's input port.
    pub to_port: String,
}

/// External-input coupling edge, scoped from the coupled model's own
/// input port; only the receiving side is rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalInputEdge {
    /// Signature of the receiving submodel.
    pub to_model: String,
    /// The receiving submodel's input port.
    pub to_port: String,
}

/// External-output coupling edge: submodel output to the coupled model's
/// own output port.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalOutputEdge {
    /// The coupled model's own output port.
    pub to_port: String,
    /// Signature of the emitting submodel.
    pub from_model: String,
    /// The emitting submodel's output port.
    pub from_port: String,
}

/// One node of the exported structure tree.
///
/// Field order is the rendered key order. The coupling and `models`
/// sections only ever appear on coupled nodes; `models` is also absent
/// when the recursion depth is exhausted.
///
/// # Examples
///
/// ```
/// use limn_export::{export_tree, NodeKind};
/// use limn_model::{AtomicBuilder, ModelName, ModelNode};
///
/// let model: ModelNode = AtomicBuilder::new(ModelName::new("sink"))
///     .input("in", "job")
///     .build()
///     .unwrap()
///     .into();
///
/// let node = export_tree(&model, None);
/// assert_eq!(node.id, "sink");
/// assert_eq!(node.kind, NodeKind::Atomic);
/// assert_eq!(node.ports.unwrap().inputs[0].name, "in");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportNode {
    /// Structural signature of the model.
    pub id: String,
    /// Model kind tag.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Internal coupling edges, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ic: Vec<InternalEdge>,
    /// External-input coupling edges, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eic: Vec<ExternalInputEdge>,
    /// External-output coupling edges, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eoc: Vec<ExternalOutputEdge>,
    /// Port descriptors, absent when the model declares no ports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<NodePorts>,
    /// Submodel nodes in declaration order; absent when there are none
    /// or the depth limit cut recursion off.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<ExportNode>,
}
