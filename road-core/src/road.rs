//! Road-network instantiation of the graph model.
//!
//! This is the graph the growth engine materializes into: nodes are
//! intersections placed in the plan (with a generation depth for
//! branch-factor bookkeeping), edges are road segments with a lane count.

use glam::Vec2;

use crate::graph::{Graph, GraphEdge, GraphNode};
use crate::types::{EdgeId, NodeId};

/// Kind of traffic control at an intersection.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IntersectionKind {
    TrafficLight,
    Roundabout,
    Stop,
    Yield,
}

/// Metadata of a road node: plan position, branch depth from the root,
/// and the intersection kind.
#[derive(Clone, Copy, Debug)]
pub struct Junction {
    pub pos: Vec2,
    pub generation: u32,
    pub kind: IntersectionKind,
}

#[derive(Clone, Debug)]
pub struct RoadNode {
    id: NodeId,
    pub junction: Junction,
}

impl RoadNode {
    pub fn new(pos: Vec2, generation: u32, kind: IntersectionKind) -> Self {
        Self {
            id: NodeId::new(),
            junction: Junction {
                pos,
                generation,
                kind,
            },
        }
    }
}

impl GraphNode for RoadNode {
    type Id = NodeId;
    type Metadata = Junction;

    fn id(&self) -> NodeId {
        self.id
    }

    fn metadata(&self) -> &Junction {
        &self.junction
    }

    fn metadata_mut(&mut self) -> &mut Junction {
        &mut self.junction
    }
}

/// A road segment between two intersections.
#[derive(Clone, Debug)]
pub struct RoadEdge {
    id: EdgeId,
    source: RoadNode,
    destination: RoadNode,
    pub lanes: u32,
}

impl RoadEdge {
    pub fn new(source: RoadNode, destination: RoadNode, lanes: u32) -> Self {
        Self {
            id: EdgeId::new(),
            source,
            destination,
            lanes,
        }
    }
}

impl GraphEdge for RoadEdge {
    type Id = EdgeId;
    type Node = RoadNode;
    type Metadata = u32;

    fn id(&self) -> EdgeId {
        self.id
    }

    fn source(&self) -> &RoadNode {
        &self.source
    }

    fn destination(&self) -> &RoadNode {
        &self.destination
    }

    fn metadata(&self) -> &u32 {
        &self.lanes
    }
}

pub type RoadGraph = Graph<RoadNode, RoadEdge>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn road_edges_carry_lane_counts() {
        let mut g = RoadGraph::new();
        let a = RoadNode::new(Vec2::ZERO, 0, IntersectionKind::Roundabout);
        let b = RoadNode::new(Vec2::new(40.0, 0.0), 1, IntersectionKind::Stop);
        g.add_node(a.clone());
        g.add_node(b.clone());
        g.add_edge(RoadEdge::new(a.clone(), b.clone(), 2)).unwrap();

        let edge = g.edges().next().unwrap();
        assert_eq!(edge.lanes, 2);
        assert_eq!(edge.source().id(), a.id());
        assert_eq!(edge.destination().junction.generation, 1);
    }
}
