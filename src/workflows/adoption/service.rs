use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{
    AdoptionRule, ApplicationId, ApplicationStatus, Pet, Step1Snapshot, Step2Snapshot,
    Step3Snapshot,
};
use super::evaluation::{evaluate, Disposition, EvaluationResult};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{
    ApplicationRecord, ApplicationRepository, DirectoryError, PetDirectory, RepositoryError,
};

/// Service composing the intake guard, pet directory, repository, and
/// evaluation engine into the three-step application flow.
pub struct AdoptionApplicationService<R, P> {
    guard: IntakeGuard,
    repository: Arc<R>,
    pets: Arc<P>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<R, P> AdoptionApplicationService<R, P>
where
    R: ApplicationRepository + 'static,
    P: PetDirectory + 'static,
{
    pub fn new(repository: Arc<R>, pets: Arc<P>) -> Self {
        Self {
            guard: IntakeGuard,
            repository,
            pets,
        }
    }

    /// Step 1: validate applicant identity against the pet's rule and open a
    /// draft application record.
    pub fn begin(
        &self,
        pet_slug: &str,
        step1: Step1Snapshot,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let (pet, rule) = self.lookup(pet_slug)?;
        self.guard.check_step1(rule.as_ref(), &step1)?;

        let record = ApplicationRecord {
            application_id: next_application_id(),
            pet_slug: pet.slug.clone(),
            status: ApplicationStatus::Draft,
            step1,
            step2: None,
            step3: None,
            evaluation: None,
            submitted_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(application_id = %stored.application_id.0, pet = %pet.slug, "application opened");
        Ok(stored)
    }

    /// Step 2: validate and attach the living-situation snapshot.
    pub fn record_living_situation(
        &self,
        application_id: &ApplicationId,
        step2: Step2Snapshot,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let mut record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        self.guard.check_step2(&step2)?;
        record.step2 = Some(step2);
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Step 3: validate the commitments, run the engine over the accumulated
    /// snapshot exactly once, and persist its output verbatim.
    pub fn finalize(
        &self,
        application_id: &ApplicationId,
        step3: Step3Snapshot,
    ) -> Result<EvaluationResult, ApplicationServiceError> {
        let mut record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;

        let (pet, rule) = self.lookup(&record.pet_slug)?;
        self.guard.check_step3(rule.as_ref(), &step3)?;

        let step2 = record
            .step2
            .clone()
            .ok_or(ApplicationServiceError::IncompleteApplication)?;

        let result = evaluate(&pet, rule.as_ref(), &record.step1, &step2, &step3);

        record.step3 = Some(step3);
        record.status = match result.status {
            Disposition::Rejected => ApplicationStatus::Rejected,
            Disposition::Review => ApplicationStatus::Review,
            Disposition::Interview => ApplicationStatus::Interview,
        };
        record.evaluation = Some(result.clone());
        self.repository.update(record)?;

        info!(
            application_id = %application_id.0,
            score = result.score,
            status = result.status.label(),
            "application evaluated"
        );
        Ok(result)
    }

    /// Fetch an application record for API responses.
    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    fn lookup(&self, slug: &str) -> Result<(Pet, Option<AdoptionRule>), ApplicationServiceError> {
        self.pets
            .pet_and_rule(slug)?
            .ok_or_else(|| ApplicationServiceError::UnknownPet(slug.to_string()))
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("no pet registered under slug '{0}'")]
    UnknownPet(String),
    #[error("living situation step has not been submitted yet")]
    IncompleteApplication,
}
