//! The structural walk: model metadata in, [`ExportNode`] tree out.

use limn_model::{AtomicModel, CoupledModel, ModelNode, PortTable};

use crate::node::{
    Direction, ExportNode, ExternalInputEdge, ExternalOutputEdge, InternalEdge, NodeKind,
    NodePorts, PortDescriptor,
};

/// Build the export tree for a model, atomic or coupled.
///
/// `depth` bounds recursion into submodels: `None` is unbounded,
/// `Some(0)` stops before the first submodel level (the node still
/// reports its own identity, ports, and couplings), `Some(n)` descends
/// `n` levels. Depth has no effect on atomic models.
///
/// The walk is a pure function of the model's structure — exporting the
/// same model twice yields equal trees — and it cannot fail: every
/// reference it resolves was validated when the model was built.
///
/// # Examples
///
/// ```
/// use limn_export::export_tree;
/// use limn_model::{AtomicBuilder, CoupledBuilder, ModelName, ModelNode};
///
/// let clock = AtomicBuilder::new(ModelName::parameterized("clock", ["f64"]))
///     .output("tick_out", "tick")
///     .build()
///     .unwrap();
/// let mut shell = CoupledBuilder::new(ModelName::parameterized("shell", ["f64"]))
///     .output("out", "tick");
/// let c = shell.add_submodel(clock);
/// let model: ModelNode = shell
///     .external_output(c, "tick_out", "out")
///     .build()
///     .unwrap()
///     .into();
///
/// let full = export_tree(&model, None);
/// assert_eq!(full.models.len(), 1);
///
/// let shallow = export_tree(&model, Some(0));
/// assert!(shallow.models.is_empty());
/// assert_eq!(shallow.eoc.len(), 1);
/// ```
pub fn export_tree(model: &ModelNode, depth: Option<u32>) -> ExportNode {
    match model {
        ModelNode::Atomic(m) => atomic_node(m),
        ModelNode::Coupled(m) => coupled_node(m, depth),
    }
}

/// Export a leaf model: identity and ports, no children.
fn atomic_node(model: &AtomicModel) -> ExportNode {
    ExportNode {
        id: model.signature(),
        kind: NodeKind::Atomic,
        ic: Vec::new(),
        eic: Vec::new(),
        eoc: Vec::new(),
        ports: ports_section(model.inputs(), model.outputs()),
        models: Vec::new(),
    }
}

/// Export a composite model: identity, couplings, ports, then submodels
/// (unless the depth limit is exhausted).
fn coupled_node(model: &CoupledModel, depth: Option<u32>) -> ExportNode {
    // Submodel signatures are shared by all edges referencing them.
    let signatures: Vec<String> = model
        .submodels()
        .iter()
        .map(ModelNode::signature)
        .collect();

    let ic = model
        .ic()
        .iter()
        .map(|c| InternalEdge {
            from_model: signatures[c.source.0 as usize].clone(),
            from_port: c.source_port.clone(),
            to_model: signatures[c.target.0 as usize].clone(),
            to_port: c.target_port.clone(),
        })
        .collect();

    let eic = model
        .eic()
        .iter()
        .map(|c| ExternalInputEdge {
            to_model: signatures[c.target.0 as usize].clone(),
            to_port: c.target_port.clone(),
        })
        .collect();

    let eoc = model
        .eoc()
        .iter()
        .map(|c| ExternalOutputEdge {
            to_port: c.target_port.clone(),
            from_model: signatures[c.source.0 as usize].clone(),
            from_port: c.source_port.clone(),
        })
        .collect();

    let models = match depth {
        Some(0) => Vec::new(),
        _ => model
            .submodels()
            .iter()
            .map(|sub| export_tree(sub, depth.map(|d| d - 1)))
            .collect(),
    };

    ExportNode {
        id: model.signature(),
        kind: NodeKind::Coupled,
        ic,
        eic,
        eoc,
        ports: ports_section(model.inputs(), model.outputs()),
        models,
    }
}

/// Project both port tables into a `ports` section, or `None` when the
/// model declares no ports at all.
fn ports_section(inputs: &PortTable, outputs: &PortTable) -> Option<NodePorts> {
    if inputs.is_empty() && outputs.is_empty() {
        return None;
    }
    Some(NodePorts {
        inputs: list_ports(inputs, Direction::In),
        outputs: list_ports(outputs, Direction::Out),
    })
}

/// One descriptor per port, in declaration order.
fn list_ports(table: &PortTable, direction: Direction) -> Vec<PortDescriptor> {
    table
        .iter()
        .map(|(name, message_type)| PortDescriptor {
            name: name.to_string(),
            message_type: message_type.to_string(),
            direction,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use limn_model::{AtomicBuilder, CoupledBuilder, ModelName};
    use limn_test_utils::{
        empty_shell, generator_shell, nested_shell, relay_pipeline, silent, tick_generator,
    };

    #[test]
    fn atomic_without_ports_has_no_ports_section() {
        let node = export_tree(&silent().into(), None);
        assert_eq!(node.kind, NodeKind::Atomic);
        assert!(node.ports.is_none());
    }

    #[test]
    fn atomic_with_only_outputs_has_empty_input_list() {
        let node = export_tree(&tick_generator().into(), None);
        let ports = node.ports.expect("generator has ports");
        assert!(ports.inputs.is_empty());
        assert_eq!(ports.outputs.len(), 1);
        assert_eq!(ports.outputs[0].name, "tick_out");
        assert_eq!(ports.outputs[0].message_type, "tick");
        assert_eq!(ports.outputs[0].direction, Direction::Out);
    }

    #[test]
    fn atomic_node_ignores_depth() {
        let model = tick_generator().into();
        assert_eq!(export_tree(&model, Some(0)), export_tree(&model, None));
    }

    #[test]
    fn coupled_without_couplings_has_empty_edge_lists() {
        let node = export_tree(&empty_shell().into(), None);
        assert_eq!(node.kind, NodeKind::Coupled);
        assert!(node.ic.is_empty());
        assert!(node.eic.is_empty());
        assert!(node.eoc.is_empty());
        assert!(node.ports.is_none());
        assert!(node.models.is_empty());
    }

    #[test]
    fn coupling_edges_resolve_submodel_signatures() {
        let node = export_tree(&relay_pipeline().into(), None);

        assert_eq!(node.eic.len(), 1);
        assert_eq!(node.eic[0].to_model, "tick_relay<f32>");
        assert_eq!(node.eic[0].to_port, "in");

        assert_eq!(node.ic.len(), 1);
        assert_eq!(node.ic[0].from_model, "tick_relay<f32>");
        assert_eq!(node.ic[0].from_port, "out");
        assert_eq!(node.ic[0].to_model, "tick_relay<f32>");
        assert_eq!(node.ic[0].to_port, "in");

        assert_eq!(node.eoc.len(), 1);
        assert_eq!(node.eoc[0].to_port, "out");
        assert_eq!(node.eoc[0].from_model, "tick_relay<f32>");
        assert_eq!(node.eoc[0].from_port, "out");
    }

    #[test]
    fn submodel_order_is_preserved() {
        let first = AtomicBuilder::new("alpha").build().unwrap();
        let second = AtomicBuilder::new("beta").build().unwrap();
        let third = AtomicBuilder::new("gamma").build().unwrap();
        let mut b = CoupledBuilder::new("bag");
        b.add_submodel(first);
        b.add_submodel(second);
        b.add_submodel(third);
        let node = export_tree(&b.build().unwrap().into(), None);

        let ids: Vec<_> = node.models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn port_order_is_preserved() {
        let model = AtomicBuilder::new("probe")
            .input("z_in", "tick")
            .input("a_in", "tick")
            .input("m_in", "tick")
            .build()
            .unwrap();
        let node = export_tree(&model.into(), None);
        let names: Vec<_> = node
            .ports
            .unwrap()
            .inputs
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, ["z_in", "a_in", "m_in"]);
    }

    #[test]
    fn depth_zero_omits_models_but_keeps_couplings() {
        let node = export_tree(&generator_shell().into(), Some(0));
        assert!(node.models.is_empty());
        assert_eq!(node.eoc.len(), 1);
        assert!(node.ports.is_some());
    }

    #[test]
    fn depth_one_stops_after_one_level() {
        // nested_shell(1) is nest{ generator_shell{ tick_generator } }.
        let node = export_tree(&nested_shell(1).into(), Some(1));
        assert_eq!(node.models.len(), 1);
        let inner = &node.models[0];
        assert_eq!(inner.kind, NodeKind::Coupled);
        assert!(
            inner.models.is_empty(),
            "depth 1 must not descend into the inner shell's submodels"
        );
    }

    #[test]
    fn unbounded_depth_reaches_the_leaves() {
        let node = export_tree(&nested_shell(3).into(), None);
        assert_eq!(tree_height(&node), 5);
    }

    fn tree_height(node: &ExportNode) -> u32 {
        1 + node.models.iter().map(tree_height).max().unwrap_or(0)
    }

    #[test]
    fn export_is_referentially_transparent() {
        let model = relay_pipeline().into();
        assert_eq!(export_tree(&model, None), export_tree(&model, None));
        assert_eq!(export_tree(&model, Some(1)), export_tree(&model, Some(1)));
    }

    #[test]
    fn anon_ports_export_with_fallback_names() {
        let model = AtomicBuilder::new(ModelName::parameterized("mute", ["f32"]))
            .output_anon("tick")
            .build()
            .unwrap();
        let node = export_tree(&model.into(), None);
        assert_eq!(node.ports.unwrap().outputs[0].name, "out0<tick>");
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn exported_port_order_matches_declaration(
            names in prop::collection::hash_set("[a-z]{1,6}", 1..8),
        ) {
            let mut builder = AtomicBuilder::new("probe");
            let declared: Vec<String> = names.into_iter().collect();
            for name in &declared {
                builder = builder.input(name.clone(), "tick");
            }
            let node = export_tree(&builder.build().unwrap().into(), None);
            let exported: Vec<String> = node
                .ports
                .unwrap()
                .inputs
                .into_iter()
                .map(|p| p.name)
                .collect();
            prop_assert_eq!(exported, declared);
        }

        #[test]
        fn depth_bounds_tree_height(levels in 0u32..5, depth in 0u32..7) {
            let model = nested_shell(levels).into();
            let node = export_tree(&model, Some(depth));
            // The full tree has levels + 2 nodes on its deepest path.
            prop_assert_eq!(tree_height(&node), (levels + 2).min(depth + 1));
        }
    }
}
