use std::fmt;

use uuid::Uuid;

/// Identity of a node in a [`crate::graph::Graph`].
///
/// Freshly minted ids are globally unique; equality and hashing of nodes
/// go through this id alone, never through metadata.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity of an edge in a [`crate::graph::Graph`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct EdgeId(Uuid);

impl EdgeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EdgeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Name of a candidate segment on the frontier.
///
/// Segment ids are human-readable and hierarchical: a child proposed from
/// segment `root` at branch index 1 is `root_1`. [`SegmentId::branch`]
/// derives sibling-distinguishing ids for the global-goal policy.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SegmentId(String);

impl SegmentId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derives the id of the `index`-th branch proposed from this segment.
    pub fn branch(&self, index: usize) -> Self {
        Self(format!("{}_{index}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_are_unique() {
        assert_ne!(NodeId::new(), NodeId::new());
    }

    #[test]
    fn branch_ids_distinguish_siblings() {
        let root = SegmentId::new("root");
        assert_eq!(root.branch(0).as_str(), "root_0");
        assert_eq!(root.branch(1).as_str(), "root_1");
        assert_ne!(root.branch(0), root.branch(1));
        assert_eq!(root.branch(2).branch(0).as_str(), "root_2_0");
    }
}
