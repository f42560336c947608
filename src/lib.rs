//! Pet adoption application intake and evaluation.
//!
//! The core of the crate is the evaluation engine under
//! [`workflows::adoption::evaluation`]: a pure, deterministic scoring pass
//! that turns a pet's adoption rules and a three-step application snapshot
//! into a score, a knockout list, and a final disposition. Everything else
//! (intake validation, persistence traits, HTTP routing) is the workflow
//! plumbing around that single decision point.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
