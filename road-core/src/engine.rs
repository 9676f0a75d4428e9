//! Growth engine: the frontier-expansion control loop.
//!
//! One engine instance owns one run: a [`FrontierQueue`] of pending
//! candidates, the [`RoadGraph`] being grown, and the accepted segment
//! list. The loop pops the lowest-`t` entry, asks the local constraint,
//! and on success materializes one intersection plus one road edge before
//! asking the global goal for follow-on candidates.
//!
//! The engine itself is deterministic; any randomness lives inside the
//! injected policies.

use thiserror::Error;
use tracing::{debug, trace};

use crate::frontier::{FrontierQueue, QueueEntry};
use crate::graph::{GraphError, GraphNode};
use crate::policy::{
    Accepted, CandidateSegment, GlobalGoal, LocalConstraint, PolicyError, ProcessingState,
};
use crate::road::{RoadEdge, RoadGraph, RoadNode};
use crate::types::SegmentId;

/// Branch factor cap at an intersection: straight continuation, left,
/// right. Global-goal proposals beyond this are dropped.
pub const MAX_BRANCHES: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EngineStatus {
    Idle,
    Running,
    Done,
}

#[derive(Error, Debug)]
pub enum EngineError {
    /// `step`/`run_to_completion` called before `initialize` or after the
    /// run finished.
    #[error("engine is {0:?}; operation requires a running engine")]
    InvalidState(EngineStatus),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result of a single pop-evaluate-branch cycle.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// The candidate was materialized into the road graph.
    Accepted(SegmentId),
    /// The candidate was dropped; nothing was materialized.
    Rejected(SegmentId),
    /// The frontier was already empty; the run is over.
    Drained,
}

/// External bounds on a run.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineConfig {
    /// Stop after this many accepted segments. `None` runs until the
    /// frontier drains, which requires the global goal itself to be
    /// bounded.
    pub max_segments: Option<usize>,
}

/// State machine `Idle → Running → Done` driving one growth run.
pub struct GrowthEngine<L, G>
where
    L: LocalConstraint,
    G: GlobalGoal<State = L::State>,
{
    local: L,
    global: G,
    config: EngineConfig,

    queue: FrontierQueue<CandidateSegment<L::State>>,
    roads: RoadGraph,
    accepted: Vec<SegmentId>,
    status: EngineStatus,
    iterations: u64,
}

/// Read-only view of a run, consistent at segment-acceptance boundaries.
pub struct Snapshot<'a> {
    pub status: EngineStatus,
    pub iterations: u64,
    pub accepted: &'a [SegmentId],
    pub roads: &'a RoadGraph,
}

impl<L, G> GrowthEngine<L, G>
where
    L: LocalConstraint,
    G: GlobalGoal<State = L::State>,
{
    pub fn new(local: L, global: G, config: EngineConfig) -> Self {
        Self {
            local,
            global,
            config,
            queue: FrontierQueue::new(),
            roads: RoadGraph::new(),
            accepted: Vec::new(),
            status: EngineStatus::Idle,
            iterations: 0,
        }
    }

    /// Clears all prior run state, inserts `root` into a fresh road graph
    /// and seeds the frontier with a single entry at `t = 0`.
    ///
    /// The seed candidate's parent is forced to the root's id, so the
    /// first accepted segment always grows out of `root`. Callable from
    /// any state; the engine is `Running` afterwards.
    pub fn initialize(
        &mut self,
        root: RoadNode,
        segment: SegmentId,
        mut candidate: CandidateSegment<L::State>,
    ) {
        self.queue = FrontierQueue::new();
        self.roads = RoadGraph::new();
        self.accepted.clear();
        self.iterations = 0;

        candidate.parent = root.id();
        debug!(root = %root.id(), segment = %segment, "seeding frontier");
        self.roads.add_node(root);
        self.queue.insert(QueueEntry {
            t: 0,
            segment,
            params: candidate,
        });
        self.status = EngineStatus::Running;
    }

    /// Runs one pop-evaluate-branch cycle.
    ///
    /// Node and edge for an accepted candidate are inserted within this
    /// single call, so `&self` observers never see a half-materialized
    /// segment. Policy and graph errors abort the run (status becomes
    /// `Done`).
    pub fn step(&mut self) -> Result<StepOutcome, EngineError> {
        if self.status != EngineStatus::Running {
            return Err(EngineError::InvalidState(self.status));
        }
        let Some(entry) = self.queue.remove_min() else {
            // An empty frontier ends the run; it is never an error.
            self.status = EngineStatus::Done;
            return Ok(StepOutcome::Drained);
        };
        self.iterations += 1;
        let QueueEntry { t, segment, params } = entry;

        let (params, state) = self
            .local
            .evaluate(params, &self.roads)
            .map_err(|e| self.abort(e))?;

        if state != ProcessingState::Succeed {
            // Failed and Pending are both terminal for the entry: it is
            // dropped without materialization or branching.
            trace!(segment = %segment, t, ?state, "rejected candidate");
            if self.queue.is_empty() {
                self.status = EngineStatus::Done;
            }
            return Ok(StepOutcome::Rejected(segment));
        }

        let parent = self
            .roads
            .node(params.parent)
            .cloned()
            .ok_or(GraphError::DanglingReference)
            .map_err(|e| self.abort(e))?;
        let node = RoadNode::new(params.position, params.generation, params.kind);
        let edge = RoadEdge::new(parent, node.clone(), params.lanes);
        self.roads.add_node(node.clone());
        self.roads.add_edge(edge).map_err(|e| self.abort(e))?;
        self.accepted.push(segment.clone());
        debug!(segment = %segment, t, generation = params.generation, "accepted segment");

        if self
            .config
            .max_segments
            .is_some_and(|cap| self.accepted.len() >= cap)
        {
            self.status = EngineStatus::Done;
            return Ok(StepOutcome::Accepted(segment));
        }

        let proposals = self
            .global
            .propose(
                Accepted {
                    segment: &segment,
                    node: &node,
                    params: &params,
                    t_next: t + 1,
                },
                &self.roads,
            )
            .map_err(|e| self.abort(e))?;
        for proposal in proposals.into_iter().take(MAX_BRANCHES) {
            trace!(segment = %proposal.segment, t = t + 1, "enqueueing candidate");
            self.queue.insert(QueueEntry {
                t: t + 1,
                segment: proposal.segment,
                params: proposal.candidate,
            });
        }

        if self.queue.is_empty() {
            self.status = EngineStatus::Done;
        }
        Ok(StepOutcome::Accepted(segment))
    }

    /// Drains the frontier, stepping until the run is `Done`.
    pub fn run_to_completion(&mut self) -> Result<(), EngineError> {
        if self.status != EngineStatus::Running {
            return Err(EngineError::InvalidState(self.status));
        }
        while self.status == EngineStatus::Running {
            self.step()?;
        }
        debug!(
            iterations = self.iterations,
            accepted = self.accepted.len(),
            "run complete"
        );
        Ok(())
    }

    /// Clears all run state and returns the engine to `Idle`.
    pub fn reset(&mut self) {
        self.queue = FrontierQueue::new();
        self.roads = RoadGraph::new();
        self.accepted.clear();
        self.iterations = 0;
        self.status = EngineStatus::Idle;
    }

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// Number of pop-evaluate cycles executed so far in this run.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn accepted(&self) -> &[SegmentId] {
        &self.accepted
    }

    pub fn roads(&self) -> &RoadGraph {
        &self.roads
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            status: self.status,
            iterations: self.iterations,
            accepted: &self.accepted,
            roads: &self.roads,
        }
    }

    fn abort(&mut self, err: impl Into<EngineError>) -> EngineError {
        self.status = EngineStatus::Done;
        err.into()
    }
}
