//! Terrain instantiation of the graph model.
//!
//! Terrain is consumed as already-given metadata: this crate never
//! synthesizes heights or surfaces, it only carries them so that
//! local-constraint policies can read them.

use glam::Vec3;

use crate::graph::{Graph, GraphEdge, GraphNode};
use crate::types::{EdgeId, NodeId};

/// Surface classification of a terrain sample point.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Surface {
    SolidGround,
    Water,
    Sand,
    Swamp,
    Forest,
}

/// Metadata of a terrain node: a 3D sample position and its surface.
#[derive(Clone, Copy, Debug)]
pub struct TerrainSample {
    pub pos: Vec3,
    pub surface: Surface,
}

#[derive(Clone, Debug)]
pub struct TerrainNode {
    id: NodeId,
    pub sample: TerrainSample,
}

impl TerrainNode {
    pub fn new(pos: Vec3, surface: Surface) -> Self {
        Self {
            id: NodeId::new(),
            sample: TerrainSample { pos, surface },
        }
    }
}

impl GraphNode for TerrainNode {
    type Id = NodeId;
    type Metadata = TerrainSample;

    fn id(&self) -> NodeId {
        self.id
    }

    fn metadata(&self) -> &TerrainSample {
        &self.sample
    }

    fn metadata_mut(&mut self) -> &mut TerrainSample {
        &mut self.sample
    }
}

/// Terrain edge whose weight is the absolute height difference between its
/// endpoints.
///
/// The slope is computed once at construction from the endpoint snapshots
/// and never recomputed, even if the graph's copies of the nodes change
/// height later.
#[derive(Clone, Debug)]
pub struct TerrainEdge {
    id: EdgeId,
    source: TerrainNode,
    destination: TerrainNode,
    slope: f32,
}

impl TerrainEdge {
    pub fn new(source: TerrainNode, destination: TerrainNode) -> Self {
        let slope = (source.sample.pos.z - destination.sample.pos.z).abs();
        Self {
            id: EdgeId::new(),
            source,
            destination,
            slope,
        }
    }

    pub fn slope(&self) -> f32 {
        self.slope
    }
}

impl GraphEdge for TerrainEdge {
    type Id = EdgeId;
    type Node = TerrainNode;
    type Metadata = f32;

    fn id(&self) -> EdgeId {
        self.id
    }

    fn source(&self) -> &TerrainNode {
        &self.source
    }

    fn destination(&self) -> &TerrainNode {
        &self.destination
    }

    fn metadata(&self) -> &f32 {
        &self.slope
    }
}

pub type TerrainGraph = Graph<TerrainNode, TerrainEdge>;

#[cfg(test)]
mod tests {
    use super::*;

    fn at_height(z: f32) -> TerrainNode {
        TerrainNode::new(Vec3::new(0.0, 0.0, z), Surface::SolidGround)
    }

    #[test]
    fn slope_is_absolute_height_difference() {
        let e = TerrainEdge::new(at_height(5.0), at_height(2.0));
        assert_eq!(e.slope(), 3.0);
    }

    #[test]
    fn slope_is_symmetric_in_direction() {
        // Reversing source and destination must give the same slope.
        let down = TerrainEdge::new(at_height(5.0), at_height(2.0));
        let up = TerrainEdge::new(at_height(2.0), at_height(5.0));
        assert_eq!(down.slope(), up.slope());
    }

    #[test]
    fn slope_handles_equal_and_negative_heights() {
        assert_eq!(TerrainEdge::new(at_height(4.0), at_height(4.0)).slope(), 0.0);
        assert_eq!(
            TerrainEdge::new(at_height(-3.0), at_height(1.5)).slope(),
            4.5
        );
    }

    #[test]
    fn slope_is_a_snapshot_of_construction_time_heights() {
        let mut g = TerrainGraph::new();
        let a = at_height(1.0);
        let b = at_height(0.0);
        let a_id = a.id();
        g.add_node(a.clone());
        g.add_node(b.clone());
        g.add_edge(TerrainEdge::new(a, b)).unwrap();

        // Raising the node afterwards leaves the edge weight untouched.
        g.node_mut(a_id).unwrap().sample.pos.z = 100.0;
        let slope = g.edges().next().unwrap().slope();
        assert_eq!(slope, 1.0);
    }
}
