//! Pluggable policy contracts for the growth engine.
//!
//! Two seams steer a run:
//! - [`LocalConstraint`] decides whether one candidate segment, in
//!   isolation, is acceptable.
//! - [`GlobalGoal`] decides which new candidates an accepted segment
//!   spawns, steering the overall network shape.
//!
//! All randomness belongs inside policy implementations; the engine and
//! the frontier queue are deterministic. Shipped stand-ins live in
//! [`crate::policies`].

use glam::Vec2;
use thiserror::Error;

use crate::road::{IntersectionKind, RoadGraph, RoadNode};
use crate::types::{NodeId, SegmentId};

/// Outcome of a local-constraint evaluation.
///
/// `Pending` is reserved for multi-pass refinement; the engine currently
/// treats it as a terminal rejection, the same as `Failed`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProcessingState {
    Succeed,
    Failed,
    Pending,
}

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("local constraint error: {0}")]
    LocalConstraint(String),
    #[error("global goal error: {0}")]
    GlobalGoal(String),
}

/// Parameter payload of one candidate segment.
///
/// The geometric fields are fixed at proposal time by the global-goal
/// policy; on acceptance the engine materializes exactly one new
/// [`RoadNode`] at `position` and one [`crate::road::RoadEdge`] from
/// `parent` to it. `state` is opaque policy state threaded through the
/// local constraint untouched by the engine.
#[derive(Clone, Debug)]
pub struct CandidateSegment<Q> {
    pub parent: NodeId,
    pub position: Vec2,
    pub generation: u32,
    pub kind: IntersectionKind,
    pub lanes: u32,
    pub state: Q,
}

/// Decides acceptance or rejection of a single candidate segment.
///
/// Implementations must be pure in their inputs plus whatever world state
/// (a terrain graph, density fields) they own, and must not block. The
/// returned candidate is the updated payload (`qa'`) that children derive
/// from.
pub trait LocalConstraint {
    type State;

    fn evaluate(
        &mut self,
        candidate: CandidateSegment<Self::State>,
        roads: &RoadGraph,
    ) -> Result<(CandidateSegment<Self::State>, ProcessingState), PolicyError>;
}

/// View of a just-materialized segment handed to the global goal.
pub struct Accepted<'a, Q> {
    /// Id of the accepted candidate segment.
    pub segment: &'a SegmentId,
    /// The newly created intersection node.
    pub node: &'a RoadNode,
    /// Post-constraint parameters of the accepted candidate.
    pub params: &'a CandidateSegment<Q>,
    /// Generation time for any proposed children.
    pub t_next: u64,
}

/// One follow-on candidate proposed by a global goal.
pub struct Proposal<Q> {
    pub segment: SegmentId,
    pub candidate: CandidateSegment<Q>,
}

/// Proposes zero to three follow-on candidates from an accepted segment.
///
/// The engine truncates anything beyond three proposals — the branch
/// factor of an intersection: straight continuation, left, right.
pub trait GlobalGoal {
    type State;

    fn propose(
        &mut self,
        accepted: Accepted<'_, Self::State>,
        roads: &RoadGraph,
    ) -> Result<Vec<Proposal<Self::State>>, PolicyError>;
}
