use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    AdoptionRule, ApplicationId, ApplicationStatus, Pet, Species, Step1Snapshot, Step2Snapshot,
    Step3Snapshot,
};
use super::evaluation::EvaluationResult;

/// Repository record accumulating the three step snapshots and, once step 3
/// lands, the evaluation outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub pet_slug: String,
    pub status: ApplicationStatus,
    pub step1: Step1Snapshot,
    pub step2: Option<Step2Snapshot>,
    pub step3: Option<Step3Snapshot>,
    pub evaluation: Option<EvaluationResult>,
    pub submitted_at: DateTime<Utc>,
}

impl ApplicationRecord {
    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.application_id.clone(),
            pet_slug: self.pet_slug.clone(),
            status: self.status.label(),
            score: self.evaluation.as_ref().map(|result| result.score),
            knockouts: self
                .evaluation
                .as_ref()
                .map(|result| result.knockouts.clone())
                .unwrap_or_default(),
        }
    }
}

/// Sanitized representation of an application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub pet_slug: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub knockouts: Vec<String>,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Lookup abstraction for pets and their adoption rules by public slug.
pub trait PetDirectory: Send + Sync {
    #[allow(clippy::type_complexity)]
    fn pet_and_rule(
        &self,
        slug: &str,
    ) -> Result<Option<(Pet, Option<AdoptionRule>)>, DirectoryError>;
}

/// Directory lookup error.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("pet directory unavailable: {0}")]
    Unavailable(String),
}

/// In-memory repository backing the demo server and tests.
#[derive(Default)]
pub struct MemoryApplicationRepository {
    records: Mutex<HashMap<ApplicationId, ApplicationRecord>>,
}

impl ApplicationRepository for MemoryApplicationRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.application_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.application_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// In-memory pet directory with a seeding constructor for demos and tests.
#[derive(Default)]
pub struct MemoryPetDirectory {
    pets: HashMap<String, (Pet, Option<AdoptionRule>)>,
}

impl MemoryPetDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pet: Pet, rule: Option<AdoptionRule>) {
        self.pets.insert(pet.slug.clone(), (pet, rule));
    }

    /// Directory pre-populated with demo pets: a cat with no rule record and
    /// a dog with a strict one.
    pub fn seeded() -> Self {
        let mut directory = Self::new();
        directory.insert(
            Pet {
                id: "pet-001".to_string(),
                slug: "luna".to_string(),
                name: "Luna".to_string(),
                species: Species::Cat,
            },
            None,
        );
        directory.insert(
            Pet {
                id: "pet-002".to_string(),
                slug: "rocky".to_string(),
                name: "Rocky".to_string(),
                species: Species::Dog,
            },
            Some(AdoptionRule {
                min_age_years: Some(21),
                max_hours_away_per_week: Some(50),
                max_hours_alone: Some(8),
                accepts_other_cats: Some(false),
                require_family_consent: Some(true),
                ..AdoptionRule::default()
            }),
        );
        directory
    }
}

impl PetDirectory for MemoryPetDirectory {
    fn pet_and_rule(
        &self,
        slug: &str,
    ) -> Result<Option<(Pet, Option<AdoptionRule>)>, DirectoryError> {
        Ok(self.pets.get(slug).cloned())
    }
}
