//! Adoption application intake, evaluation, and workflow plumbing.
//!
//! The evaluation engine is the one component with real decision logic; the
//! rest of this module is the service, repository, and routing scaffolding
//! that collects the three step snapshots and feeds them to the engine once,
//! at the end of step 3.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AdoptionRule, AgeBracket, ApplicationId, ApplicationStatus, BudgetBracket, Commitment,
    HousingType, OtherPets, Pet, PetEnvironment, Species, Step1Snapshot, Step2Snapshot,
    Step3Snapshot,
};
pub use evaluation::{evaluate, Disposition, EffectiveRule, EvaluationResult};
pub use intake::{IntakeGuard, IntakeViolation};
pub use repository::{
    ApplicationRecord, ApplicationRepository, ApplicationStatusView, DirectoryError,
    MemoryApplicationRepository, MemoryPetDirectory, PetDirectory, RepositoryError,
};
pub use router::adoption_router;
pub use service::{AdoptionApplicationService, ApplicationServiceError};
