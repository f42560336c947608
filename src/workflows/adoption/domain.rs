use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted adoption applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Species of the pet being adopted. Gates the dog-specific checks and
/// bonuses during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub const fn label(self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

/// Pet identity as resolved from its public slug. Immutable for the duration
/// of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub species: Species,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingType {
    Own,
    Rent,
    WithFamily,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetEnvironment {
    Indoor,
    IndoorWithEnclosed,
    FreeRoam,
}

/// Pets already living in the applicant's household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtherPets {
    None,
    Cat,
    Dog,
    Both,
}

impl OtherPets {
    pub const fn includes_cat(self) -> bool {
        matches!(self, OtherPets::Cat | OtherPets::Both)
    }

    pub const fn includes_dog(self) -> bool {
        matches!(self, OtherPets::Dog | OtherPets::Both)
    }
}

/// Coarse applicant age category. Each bracket maps to the minimum real age
/// it represents, which is the only figure evaluation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "18")]
    From18,
    #[serde(rename = "21")]
    From21,
    #[serde(rename = "25")]
    From25,
    #[serde(rename = "30")]
    From30,
    #[serde(rename = "35")]
    From35,
    #[serde(rename = "40")]
    From40,
    #[serde(rename = "45")]
    From45,
    #[serde(rename = "50")]
    From50,
}

impl AgeBracket {
    pub const fn min_age(self) -> u8 {
        match self {
            AgeBracket::From18 => 18,
            AgeBracket::From21 => 21,
            AgeBracket::From25 => 25,
            AgeBracket::From30 => 30,
            AgeBracket::From35 => 35,
            AgeBracket::From40 => 40,
            AgeBracket::From45 => 45,
            AgeBracket::From50 => 50,
        }
    }
}

/// Monthly care budget declared by the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetBracket {
    #[serde(rename = "100-200")]
    From100To200,
    #[serde(rename = "200-300")]
    From200To300,
    #[serde(rename = "300-400")]
    From300To400,
    #[serde(rename = "400-500")]
    From400To500,
    #[serde(rename = "500+")]
    Above500,
}

/// Commitments an applicant takes on at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Commitment {
    Sterilization,
    Vaccines,
    AcceptContract,
}

impl Commitment {
    pub const fn label(self) -> &'static str {
        match self {
            Commitment::Sterilization => "sterilization",
            Commitment::Vaccines => "vaccines",
            Commitment::AcceptContract => "accept_contract",
        }
    }
}

/// Per-pet adoption policy knobs. Every field is optional; absent fields
/// resolve to the documented defaults during evaluation, so a missing rule
/// record behaves like `AdoptionRule::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdoptionRule {
    pub allowed_housing: Vec<HousingType>,
    pub require_commits: Vec<Commitment>,
    pub min_age_years: Option<u8>,
    pub require_landlord_permission: Option<bool>,
    pub disallow_free_roam: Option<bool>,
    pub max_hours_away_per_week: Option<u16>,
    pub max_hours_alone: Option<u8>,
    pub require_home_visit: Option<bool>,
    pub require_fenced_or_secure: Option<bool>,
    pub forbid_tethering: Option<bool>,
    pub required_documents: Vec<String>,
    pub min_motivation_chars: Option<usize>,
    pub accepts_other_cats: Option<bool>,
    pub accepts_other_dogs: Option<bool>,
    pub require_family_consent: Option<bool>,
}

/// Applicant identity collected in step 1. Only `age_bracket` feeds the
/// evaluation; the rest is contact and household context kept on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step1Snapshot {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub age_bracket: AgeBracket,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub household_count: Option<u8>,
    #[serde(default)]
    pub household_ages: Option<String>,
    #[serde(default)]
    pub phone_verified: bool,
    #[serde(default)]
    pub docs_confirmed: BTreeMap<String, bool>,
}

/// Living situation collected in step 2, the largest snapshot. Dog-specific
/// fields stay `None` for cat applications. `home_visit_ok` records the
/// outcome of a home visit when one has happened; absent means the visit has
/// not taken place yet and the corresponding knockout cannot fire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step2Snapshot {
    pub housing_type: HousingType,
    #[serde(default)]
    pub landlord_allows_pets: bool,
    pub hours_away_per_week: u16,
    pub pet_environment: PetEnvironment,
    pub other_pets: OtherPets,
    #[serde(default)]
    pub motivation: String,
    #[serde(default)]
    pub condo_allows_pets: Option<bool>,
    #[serde(default)]
    pub prior_pets_experience: Option<String>,
    #[serde(default)]
    pub prior_pets_outcome: Option<String>,
    #[serde(default)]
    pub sleep_location: Option<String>,
    #[serde(default)]
    pub travel_caretaker: Option<String>,
    #[serde(default)]
    pub hours_alone_per_day: Option<u8>,
    #[serde(default)]
    pub home_visit_ok: Option<bool>,
    #[serde(default)]
    pub yard_secure: Option<bool>,
    #[serde(default)]
    pub will_leash: Option<bool>,
    #[serde(default)]
    pub will_not_tether: Option<bool>,
    #[serde(default)]
    pub id_tag_will_use: Option<bool>,
    #[serde(default)]
    pub training_plan: Option<String>,
    #[serde(default)]
    pub social_plan: Option<String>,
    #[serde(default)]
    pub monthly_budget: Option<BudgetBracket>,
    #[serde(default)]
    pub has_vet: Option<bool>,
    #[serde(default)]
    pub vet_contact: Option<String>,
    #[serde(default)]
    pub children_youngest_age: Option<u8>,
}

/// Commitments recorded in step 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step3Snapshot {
    pub commit_sterilization: bool,
    pub commit_vaccines: bool,
    pub accept_contract: bool,
    #[serde(default)]
    pub family_agrees: Option<bool>,
}

/// Workflow-level status of an application record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Draft,
    Rejected,
    Review,
    Interview,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "draft",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Review => "review",
            ApplicationStatus::Interview => "interview",
        }
    }
}
