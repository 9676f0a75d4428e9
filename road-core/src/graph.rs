//! Generic attributed graph model.
//!
//! Nodes and edges are identity-keyed: equality and hashing go through an
//! opaque id, while metadata stays mutable independently of identity. The
//! container is append-only; one [`Graph`] instance represents one
//! generation run and is replaced wholesale to reset state.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

/// A node with an identity and a domain-specific metadata payload.
pub trait GraphNode {
    type Id: Copy + Eq + Hash + Debug;
    type Metadata;

    fn id(&self) -> Self::Id;
    fn metadata(&self) -> &Self::Metadata;
    fn metadata_mut(&mut self) -> &mut Self::Metadata;
}

/// A directed edge holding value copies of its endpoints.
///
/// The endpoint nodes are snapshots taken at construction time, not live
/// references into a graph; later metadata changes on the graph's copy of
/// a node are not reflected here.
pub trait GraphEdge {
    type Id: Copy + Eq + Hash + Debug;
    type Node: GraphNode;
    type Metadata;

    fn id(&self) -> Self::Id;
    fn source(&self) -> &Self::Node;
    fn destination(&self) -> &Self::Node;
    fn metadata(&self) -> &Self::Metadata;
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// An edge referenced an endpoint id that is not present in the node
    /// set. Edges must be added after both of their endpoints.
    #[error("edge references a node that is not present in the graph")]
    DanglingReference,
}

/// Identity-keyed container of nodes and edges.
///
/// Insertion is idempotent on duplicate identity, and there is no removal:
/// within one run the graph only grows.
#[derive(Debug)]
pub struct Graph<N: GraphNode, E: GraphEdge<Node = N>> {
    nodes: HashMap<N::Id, N>,
    edges: HashMap<E::Id, E>,
}

impl<N: GraphNode, E: GraphEdge<Node = N>> Graph<N, E> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    /// Inserts a node. A second insert under an already-present identity is
    /// a no-op: the existing node and its metadata are kept untouched.
    pub fn add_node(&mut self, node: N) {
        self.nodes.entry(node.id()).or_insert(node);
    }

    /// Inserts an edge. Idempotent on duplicate identity; fails fast with
    /// [`GraphError::DanglingReference`] when either endpoint has not been
    /// added as a node first.
    pub fn add_edge(&mut self, edge: E) -> Result<(), GraphError> {
        if !self.nodes.contains_key(&edge.source().id())
            || !self.nodes.contains_key(&edge.destination().id())
        {
            return Err(GraphError::DanglingReference);
        }
        self.edges.entry(edge.id()).or_insert(edge);
        Ok(())
    }

    /// Destination nodes of all edges whose source has the given id.
    ///
    /// Returns the edges' own endpoint snapshots. Iteration order is
    /// unspecified; callers that need an order must sort. Unknown ids
    /// yield an empty vector.
    pub fn neighbors(&self, id: N::Id) -> Vec<&N> {
        self.edges
            .values()
            .filter(|e| e.source().id() == id)
            .map(|e| e.destination())
            .collect()
    }

    pub fn node(&self, id: N::Id) -> Option<&N> {
        self.nodes.get(&id)
    }

    /// Mutable access to a node's metadata; identity stays fixed.
    pub fn node_mut(&mut self, id: N::Id) -> Option<&mut N> {
        self.nodes.get_mut(&id)
    }

    pub fn contains_node(&self, id: N::Id) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &E> {
        self.edges.values()
    }
}

impl<N: GraphNode, E: GraphEdge<Node = N>> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}
