//! Port direction tags and the insertion-ordered [`PortTable`] registry.

use indexmap::IndexMap;
use std::fmt;

/// Direction of a port: input or output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PortKind {
    /// The port receives messages.
    In,
    /// The port emits messages.
    Out,
}

impl PortKind {
    /// The lowercase tag used in rendered output (`"in"` / `"out"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered registry of the ports a model declares in one direction.
///
/// Maps port name to the structural name of the message type carried on
/// that port. Iteration yields ports in registration order, which is the
/// order the exporter reports them in — the table uses `IndexMap` rather
/// than `HashMap` so that order is deterministic and declaration-faithful.
///
/// Port names are unique within a table; [`add`](PortTable::add) refuses
/// duplicates rather than overwriting. A port may carry the same message
/// type as any other port.
///
/// # Examples
///
/// ```
/// use limn_model::PortTable;
///
/// let mut outputs = PortTable::new();
/// assert!(outputs.add("pulse_out", "pulse"));
/// assert!(outputs.add("status_out", "status"));
/// assert!(!outputs.add("pulse_out", "other"), "duplicate name refused");
///
/// assert_eq!(outputs.get("pulse_out"), Some("pulse"));
/// let names: Vec<_> = outputs.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["pulse_out", "status_out"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PortTable {
    entries: IndexMap<String, String>,
}

// Registration order is structurally significant, so equality compares
// ordered entry sequences rather than `IndexMap`'s set semantics.
impl PartialEq for PortTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.iter().eq(other.iter())
    }
}

impl Eq for PortTable {}

impl PortTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Register a port. Returns `false` (leaving the table unchanged) if a
    /// port with this name is already registered.
    pub fn add(&mut self, name: impl Into<String>, message_type: impl Into<String>) -> bool {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, message_type.into());
        true
    }

    /// The message type carried on the named port, if it exists.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether a port with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate `(name, message_type)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, msg)| (name.as_str(), msg.as_str()))
    }

    /// Number of registered ports.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no ports are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_then_get() {
        let mut table = PortTable::new();
        assert!(table.add("in0", "tick"));
        assert_eq!(table.get("in0"), Some("tick"));
        assert!(table.contains("in0"));
        assert_eq!(table.get("absent"), None);
    }

    #[test]
    fn duplicate_add_keeps_original_message_type() {
        let mut table = PortTable::new();
        assert!(table.add("p", "first"));
        assert!(!table.add("p", "second"));
        assert_eq!(table.get("p"), Some("first"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let mut forward = PortTable::new();
        forward.add("x", "tick");
        forward.add("y", "tick");
        let mut reversed = PortTable::new();
        reversed.add("y", "tick");
        reversed.add("x", "tick");
        assert_ne!(forward, reversed);
    }

    #[test]
    fn kind_tags_are_lowercase() {
        assert_eq!(PortKind::In.as_str(), "in");
        assert_eq!(PortKind::Out.as_str(), "out");
    }

    proptest! {
        #[test]
        fn iteration_preserves_insertion_order(
            names in prop::collection::vec("[a-z]{1,8}", 0..16),
        ) {
            let mut table = PortTable::new();
            let mut inserted = Vec::new();
            for name in names {
                if table.add(name.clone(), "msg") {
                    inserted.push(name);
                }
            }
            let order: Vec<_> = table.iter().map(|(n, _)| n.to_string()).collect();
            prop_assert_eq!(order, inserted);
        }

        #[test]
        fn len_matches_iter_count(
            names in prop::collection::hash_set("[a-z]{1,8}", 0..16),
        ) {
            let mut table = PortTable::new();
            for name in &names {
                table.add(name.clone(), "msg");
            }
            prop_assert_eq!(table.len(), names.len());
            prop_assert_eq!(table.iter().count(), names.len());
        }
    }
}
