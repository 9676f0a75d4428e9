//! Randomized stand-in policies.
//!
//! These reproduce the toy build's behavior: acceptance by coin flip and
//! branching by uniform angle and distance inside a bounded region. They
//! are placeholders for real geometric rules, useful for demos and for
//! exercising the engine; tests substitute deterministic policies or seed
//! the RNG.

use std::f32::consts::TAU;
use std::ops::Range;

use glam::Vec2;
use rand::Rng;

use crate::engine::MAX_BRANCHES;
use crate::graph::GraphNode;
use crate::policy::{
    Accepted, CandidateSegment, GlobalGoal, LocalConstraint, PolicyError, ProcessingState,
    Proposal,
};
use crate::road::{IntersectionKind, RoadGraph};

/// Axis-aligned region that proposed intersections are clamped into.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}

impl Default for Bounds {
    /// A 400x400 plan with a 20-unit margin on every side.
    fn default() -> Self {
        Self {
            min: Vec2::splat(20.0),
            max: Vec2::splat(380.0),
        }
    }
}

/// Accepts candidates with a fixed probability, ignoring geometry.
pub struct ChanceConstraint<R> {
    accept_probability: f64,
    rng: R,
}

impl<R: Rng> ChanceConstraint<R> {
    pub fn new(accept_probability: f64, rng: R) -> Self {
        Self {
            accept_probability: accept_probability.clamp(0.0, 1.0),
            rng,
        }
    }
}

impl<R: Rng> LocalConstraint for ChanceConstraint<R> {
    type State = ();

    fn evaluate(
        &mut self,
        candidate: CandidateSegment<()>,
        _roads: &RoadGraph,
    ) -> Result<(CandidateSegment<()>, ProcessingState), PolicyError> {
        let state = if self.rng.random_bool(self.accept_probability) {
            ProcessingState::Succeed
        } else {
            ProcessingState::Failed
        };
        Ok((candidate, state))
    }
}

/// Proposes `0..=max_branches` children at uniform angles and bounded
/// distances from the accepted intersection, clamped into `bounds` and
/// tagged with `parent generation + 1`.
pub struct UniformBranching<R> {
    pub bounds: Bounds,
    pub distance: Range<f32>,
    pub max_branches: usize,
    pub kind: IntersectionKind,
    pub lanes: u32,
    rng: R,
}

impl<R: Rng> UniformBranching<R> {
    pub fn new(rng: R) -> Self {
        Self {
            bounds: Bounds::default(),
            distance: 30.0..80.0,
            max_branches: MAX_BRANCHES,
            kind: IntersectionKind::Stop,
            lanes: 2,
            rng,
        }
    }
}

impl<R: Rng> GlobalGoal for UniformBranching<R> {
    type State = ();

    fn propose(
        &mut self,
        accepted: Accepted<'_, ()>,
        _roads: &RoadGraph,
    ) -> Result<Vec<Proposal<()>>, PolicyError> {
        let branches = self.rng.random_range(0..=self.max_branches.min(MAX_BRANCHES));
        let origin = accepted.node.junction.pos;
        let generation = accepted.node.junction.generation + 1;

        let mut proposals = Vec::with_capacity(branches);
        for i in 0..branches {
            let angle = self.rng.random_range(0.0..TAU);
            let distance = self.rng.random_range(self.distance.clone());
            let position = self.bounds.clamp(origin + Vec2::from_angle(angle) * distance);
            proposals.push(Proposal {
                segment: accepted.segment.branch(i),
                candidate: CandidateSegment {
                    parent: accepted.node.id(),
                    position,
                    generation,
                    kind: self.kind,
                    lanes: self.lanes,
                    state: (),
                },
            });
        }
        Ok(proposals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineConfig, EngineStatus, GrowthEngine};
    use crate::road::RoadNode;
    use crate::types::SegmentId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn candidate(parent: crate::types::NodeId) -> CandidateSegment<()> {
        CandidateSegment {
            parent,
            position: Vec2::new(230.0, 200.0),
            generation: 1,
            kind: IntersectionKind::Stop,
            lanes: 2,
            state: (),
        }
    }

    #[test]
    fn chance_constraint_at_the_extremes() {
        let mut g = RoadGraph::new();
        let root = RoadNode::new(Vec2::splat(200.0), 0, IntersectionKind::Stop);
        g.add_node(root.clone());

        let mut always = ChanceConstraint::new(1.0, StdRng::seed_from_u64(1));
        let mut never = ChanceConstraint::new(0.0, StdRng::seed_from_u64(1));
        for _ in 0..20 {
            let (_, state) = always.evaluate(candidate(root.id()), &g).unwrap();
            assert_eq!(state, ProcessingState::Succeed);
            let (_, state) = never.evaluate(candidate(root.id()), &g).unwrap();
            assert_eq!(state, ProcessingState::Failed);
        }
    }

    #[test]
    fn branching_respects_bounds_count_and_generation() {
        let mut g = RoadGraph::new();
        let root = RoadNode::new(Vec2::splat(200.0), 3, IntersectionKind::Stop);
        g.add_node(root.clone());
        let params = candidate(root.id());
        let segment = SegmentId::new("root");

        let mut goal = UniformBranching::new(StdRng::seed_from_u64(7));
        for _ in 0..50 {
            let proposals = goal
                .propose(
                    Accepted {
                        segment: &segment,
                        node: &root,
                        params: &params,
                        t_next: 1,
                    },
                    &g,
                )
                .unwrap();

            assert!(proposals.len() <= MAX_BRANCHES);
            for (i, p) in proposals.iter().enumerate() {
                assert_eq!(p.segment, segment.branch(i));
                assert_eq!(p.candidate.parent, root.id());
                assert_eq!(p.candidate.generation, 4);

                let pos = p.candidate.position;
                let b = goal.bounds;
                assert!(pos.x >= b.min.x && pos.x <= b.max.x);
                assert!(pos.y >= b.min.y && pos.y <= b.max.y);
            }
        }
    }

    #[test]
    fn stand_in_run_terminates_under_a_cap_and_stays_in_bounds() {
        let local = ChanceConstraint::new(0.8, StdRng::seed_from_u64(11));
        let global = UniformBranching::new(StdRng::seed_from_u64(12));
        let bounds = global.bounds;

        let mut engine = GrowthEngine::new(
            local,
            global,
            EngineConfig {
                max_segments: Some(50),
            },
        );
        let root = RoadNode::new(Vec2::splat(200.0), 0, IntersectionKind::Roundabout);
        let root_id = root.id();
        engine.initialize(root, SegmentId::new("root"), candidate(root_id));
        engine.run_to_completion().unwrap();

        assert_eq!(engine.status(), EngineStatus::Done);
        assert!(engine.accepted().len() <= 50);
        // Every materialized intersection except the root sits inside the
        // clamp region.
        for node in engine.roads().nodes().filter(|n| n.id() != root_id) {
            let pos = node.junction.pos;
            assert!(pos.x >= bounds.min.x && pos.x <= bounds.max.x);
            assert!(pos.y >= bounds.min.y && pos.y <= bounds.max.y);
        }
    }
}
