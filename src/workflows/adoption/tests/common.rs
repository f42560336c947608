use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::workflows::adoption::domain::{
    AdoptionRule, AgeBracket, HousingType, OtherPets, Pet, PetEnvironment, Species, Step1Snapshot,
    Step2Snapshot, Step3Snapshot,
};
use crate::workflows::adoption::evaluation::{evaluate, EvaluationResult};
use crate::workflows::adoption::repository::{MemoryApplicationRepository, MemoryPetDirectory};
use crate::workflows::adoption::service::AdoptionApplicationService;

pub(super) fn cat() -> Pet {
    Pet {
        id: "pet-001".to_string(),
        slug: "luna".to_string(),
        name: "Luna".to_string(),
        species: Species::Cat,
    }
}

pub(super) fn dog() -> Pet {
    Pet {
        id: "pet-002".to_string(),
        slug: "rocky".to_string(),
        name: "Rocky".to_string(),
        species: Species::Dog,
    }
}

pub(super) fn motivation(length: usize) -> String {
    "a".repeat(length)
}

pub(super) fn step1() -> Step1Snapshot {
    Step1Snapshot {
        name: "María Fernanda".to_string(),
        email: "maria@example.com".to_string(),
        phone: "5512345678".to_string(),
        city: "Guadalajara".to_string(),
        age_bracket: AgeBracket::From30,
        occupation: Some("Diseñadora".to_string()),
        address: None,
        household_count: Some(3),
        household_ages: Some("34, 31, 6".to_string()),
        phone_verified: true,
        docs_confirmed: BTreeMap::new(),
    }
}

/// Strong snapshot: owned home, always around, indoor, 150-char motivation.
/// With all three commitments it scores 99 for a cat under default rules.
pub(super) fn strong_step2() -> Step2Snapshot {
    Step2Snapshot {
        housing_type: HousingType::Own,
        landlord_allows_pets: false,
        hours_away_per_week: 0,
        pet_environment: PetEnvironment::Indoor,
        other_pets: OtherPets::None,
        motivation: motivation(150),
        condo_allows_pets: None,
        prior_pets_experience: None,
        prior_pets_outcome: None,
        sleep_location: None,
        travel_caretaker: None,
        hours_alone_per_day: None,
        home_visit_ok: None,
        yard_secure: None,
        will_leash: None,
        will_not_tether: None,
        id_tag_will_use: None,
        training_plan: None,
        social_plan: None,
        monthly_budget: None,
        has_vet: None,
        vet_contact: None,
        children_youngest_age: None,
    }
}

/// Mid-range snapshot scoring 84 for a cat under default rules, leaving
/// headroom in both directions for single-component delta assertions.
pub(super) fn mid_step2() -> Step2Snapshot {
    Step2Snapshot {
        hours_away_per_week: 30,
        pet_environment: PetEnvironment::IndoorWithEnclosed,
        ..strong_step2()
    }
}

pub(super) fn step3_all() -> Step3Snapshot {
    Step3Snapshot {
        commit_sterilization: true,
        commit_vaccines: true,
        accept_contract: true,
        family_agrees: None,
    }
}

/// Evaluate a step-2 variant with the default step-1 and step-3 snapshots.
pub(super) fn run(
    pet: &Pet,
    rule: Option<&AdoptionRule>,
    step2: &Step2Snapshot,
) -> EvaluationResult {
    evaluate(pet, rule, &step1(), step2, &step3_all())
}

pub(super) fn directory() -> MemoryPetDirectory {
    let mut directory = MemoryPetDirectory::new();
    directory.insert(cat(), None);
    directory.insert(
        dog(),
        Some(AdoptionRule {
            require_family_consent: Some(true),
            required_documents: vec!["ine".to_string()],
            ..AdoptionRule::default()
        }),
    );
    directory
}

pub(super) fn build_service() -> (
    AdoptionApplicationService<MemoryApplicationRepository, MemoryPetDirectory>,
    Arc<MemoryApplicationRepository>,
) {
    let repository = Arc::new(MemoryApplicationRepository::default());
    let pets = Arc::new(directory());
    let service = AdoptionApplicationService::new(repository.clone(), pets);
    (service, repository)
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
