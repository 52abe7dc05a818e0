//! Shared conversion algorithms
//!
//! Everything here is dialect agnostic: line classification, hierarchy
//! assignment, inline/field/date rewriting, transcript chunking and the
//! tunable constants they share. Renderers in ../formats compose these
//! pieces; none of them re-implements this logic.

pub mod chunk;
pub mod dates;
pub mod fields;
pub mod hierarchy;
pub mod inline;
pub mod line;
pub mod protect;
pub mod tuning;
