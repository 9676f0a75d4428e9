//! Core road-network growth library.
//!
//! Main components:
//! - [`graph`] — generic identity-keyed graph model.
//! - [`terrain`], [`simulation`], [`road`] — domain instantiations of the
//!   graph model.
//! - [`frontier`] — min-priority worklist of candidate segments.
//! - [`engine`] — the frontier-expansion growth loop.
//! - [`policy`] — pluggable local-constraint and global-goal contracts.
//! - [`policies`] — randomized stand-in policies for demos and tests.
//! - [`types`] — shared identifier newtypes.

pub mod engine;
pub mod frontier;
pub mod graph;
pub mod policies;
pub mod policy;
pub mod road;
pub mod simulation;
pub mod terrain;
pub mod types;
