//! Simulation-layer instantiation of the graph model.
//!
//! A simulation node wraps a terrain sample with zoning and density
//! information; its edges carry no metadata and exist purely for
//! connectivity.

use crate::graph::{Graph, GraphEdge, GraphNode};
use crate::terrain::TerrainNode;
use crate::types::{EdgeId, NodeId};

/// Zoning classification of a simulated cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Zone {
    Residential,
    Commercial,
    Industrial,
    Park,
}

/// Metadata of a simulation node.
///
/// `density` and `slope_factor` are normalized to `0.0..=1.0` at
/// construction.
#[derive(Clone, Debug)]
pub struct SimulationProfile {
    pub terrain: TerrainNode,
    pub zone: Zone,
    pub density: f32,
    pub slope_factor: f32,
}

#[derive(Clone, Debug)]
pub struct SimulationNode {
    id: NodeId,
    pub profile: SimulationProfile,
}

impl SimulationNode {
    pub fn new(terrain: TerrainNode, zone: Zone, density: f32, slope_factor: f32) -> Self {
        Self {
            id: NodeId::new(),
            profile: SimulationProfile {
                terrain,
                zone,
                density: density.clamp(0.0, 1.0),
                slope_factor: slope_factor.clamp(0.0, 1.0),
            },
        }
    }
}

impl GraphNode for SimulationNode {
    type Id = NodeId;
    type Metadata = SimulationProfile;

    fn id(&self) -> NodeId {
        self.id
    }

    fn metadata(&self) -> &SimulationProfile {
        &self.profile
    }

    fn metadata_mut(&mut self) -> &mut SimulationProfile {
        &mut self.profile
    }
}

/// Connectivity-only edge between simulation nodes.
#[derive(Clone, Debug)]
pub struct SimulationEdge {
    id: EdgeId,
    source: SimulationNode,
    destination: SimulationNode,
}

impl SimulationEdge {
    pub fn new(source: SimulationNode, destination: SimulationNode) -> Self {
        Self {
            id: EdgeId::new(),
            source,
            destination,
        }
    }
}

impl GraphEdge for SimulationEdge {
    type Id = EdgeId;
    type Node = SimulationNode;
    type Metadata = ();

    fn id(&self) -> EdgeId {
        self.id
    }

    fn source(&self) -> &SimulationNode {
        &self.source
    }

    fn destination(&self) -> &SimulationNode {
        &self.destination
    }

    fn metadata(&self) -> &() {
        &()
    }
}

pub type SimulationGraph = Graph<SimulationNode, SimulationEdge>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::Surface;
    use glam::Vec3;

    fn terrain() -> TerrainNode {
        TerrainNode::new(Vec3::ZERO, Surface::SolidGround)
    }

    #[test]
    fn density_and_slope_factor_are_clamped_to_unit_range() {
        let n = SimulationNode::new(terrain(), Zone::Residential, 1.7, -0.2);
        assert_eq!(n.profile.density, 1.0);
        assert_eq!(n.profile.slope_factor, 0.0);

        let n = SimulationNode::new(terrain(), Zone::Park, 0.25, 0.5);
        assert_eq!(n.profile.density, 0.25);
        assert_eq!(n.profile.slope_factor, 0.5);
    }

    #[test]
    fn simulation_graph_connects_nodes() {
        let mut g = SimulationGraph::new();
        let a = SimulationNode::new(terrain(), Zone::Commercial, 0.5, 0.1);
        let b = SimulationNode::new(terrain(), Zone::Industrial, 0.9, 0.3);
        g.add_node(a.clone());
        g.add_node(b.clone());
        g.add_edge(SimulationEdge::new(a.clone(), b.clone())).unwrap();

        let neighbors = g.neighbors(a.id());
        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].id(), b.id());
    }
}
