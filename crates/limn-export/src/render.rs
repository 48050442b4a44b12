//! JSON rendering of export trees.
//!
//! Rendering is generic over `W: io::Write` so tests can target
//! `Vec<u8>` and production code a file or stream. Output is
//! pretty-printed with 2-space indentation; key order and the
//! omit-when-empty rules are fixed by the [`ExportNode`] field layout,
//! not by the renderer.

use std::io;

use limn_model::ModelNode;

use crate::error::ExportError;
use crate::export::export_tree;
use crate::node::ExportNode;

/// Render an export tree as a pretty-printed JSON string.
pub fn render_to_string(node: &ExportNode) -> Result<String, ExportError> {
    serde_json::to_string_pretty(node).map_err(ExportError::Render)
}

/// Render an export tree as pretty-printed JSON into a byte sink.
///
/// Sink failures come back as [`ExportError::Render`] wrapping the
/// underlying I/O error.
pub fn render_to_writer<W: io::Write>(node: &ExportNode, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, node).map_err(ExportError::Render)
}

/// Export a model and render it in one step.
///
/// Equivalent to [`export_tree`] followed by [`render_to_writer`];
/// `depth` has the same meaning as for `export_tree`.
///
/// # Examples
///
/// ```
/// use limn_export::export_to_writer;
/// use limn_model::{AtomicBuilder, ModelName, ModelNode};
///
/// let model: ModelNode = AtomicBuilder::new(ModelName::new("sink"))
///     .input("in", "job")
///     .build()
///     .unwrap()
///     .into();
///
/// let mut out = Vec::new();
/// export_to_writer(&model, &mut out, None).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with('{'));
/// assert!(text.contains("\"id\": \"sink\""));
/// ```
pub fn export_to_writer<W: io::Write>(
    model: &ModelNode,
    writer: W,
    depth: Option<u32>,
) -> Result<(), ExportError> {
    render_to_writer(&export_tree(model, depth), writer)
}
