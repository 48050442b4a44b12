//! Error types for the export pipeline.

use std::error::Error;
use std::fmt;

/// Errors surfaced while rendering an export tree.
///
/// Building the tree itself cannot fail; the only failure surface is the
/// render step — serializer errors and unwritable sinks — which is
/// propagated here unmodified, with [`source`](Error::source) exposing
/// the underlying `serde_json` error (itself wrapping any I/O error from
/// the sink).
#[derive(Debug)]
pub enum ExportError {
    /// JSON rendering failed.
    Render(serde_json::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(e) => write!(f, "render failed: {e}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Render(e)
    }
}
