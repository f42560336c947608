//! Application evaluation engine.
//!
//! `evaluate` is a total, deterministic, side-effect-free function: every
//! input combination produces a result, identical inputs produce identical
//! results, and nothing outlives the call. Inputs are presumed to have passed
//! intake validation; nothing here can fail.

mod config;
mod phrases;
mod policy;
mod rules;

pub use config::EffectiveRule;
pub use policy::Disposition;

use serde::{Deserialize, Serialize};

use super::domain::{Pet, Step1Snapshot, Step2Snapshot, Step3Snapshot};
use crate::workflows::adoption::domain::AdoptionRule;

/// The engine's sole output, persisted verbatim by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Bounded suitability score in `[0, 100]`.
    pub score: u8,
    /// Human-readable hard-disqualifier messages; empty means no knockout.
    pub knockouts: Vec<String>,
    pub status: Disposition,
}

/// Evaluate an accumulated three-step application snapshot against a pet's
/// adoption rules. A missing rule record applies the documented permissive
/// defaults.
pub fn evaluate(
    pet: &Pet,
    rule: Option<&AdoptionRule>,
    step1: &Step1Snapshot,
    step2: &Step2Snapshot,
    step3: &Step3Snapshot,
) -> EvaluationResult {
    let rule = EffectiveRule::resolve(rule);

    let knockouts = rules::knockouts(pet, &rule, step1, step2);
    let score = policy::bounded_score(rules::raw_score(pet, &rule, step2, step3));
    let status = policy::classify(score, &knockouts);

    EvaluationResult {
        score,
        knockouts,
        status,
    }
}
