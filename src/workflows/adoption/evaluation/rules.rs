use crate::workflows::adoption::domain::{
    BudgetBracket, Commitment, HousingType, Pet, PetEnvironment, Species, Step1Snapshot,
    Step2Snapshot, Step3Snapshot,
};

use super::config::EffectiveRule;
use super::phrases;

/// Collect every knockout that fires for this snapshot. Checks are
/// non-exclusive; the returned messages keep the order the checks run in.
pub(crate) fn knockouts(
    pet: &Pet,
    rule: &EffectiveRule,
    step1: &Step1Snapshot,
    step2: &Step2Snapshot,
) -> Vec<String> {
    let mut knockouts = Vec::new();

    if step1.age_bracket.min_age() < rule.min_age_years {
        knockouts.push(format!(
            "Edad mínima requerida: {} años",
            rule.min_age_years
        ));
    }

    if !rule.allowed_housing.is_empty() && !rule.allowed_housing.contains(&step2.housing_type) {
        knockouts.push("Tipo de vivienda no permitido para esta adopción".to_string());
    }

    if rule.require_landlord_permission
        && step2.housing_type == HousingType::Rent
        && !step2.landlord_allows_pets
    {
        knockouts.push("Contrato de renta no permite mascotas".to_string());
    }

    if rule.disallow_free_roam && step2.pet_environment == PetEnvironment::FreeRoam {
        knockouts.push("Ambiente 100% exterior no permitido".to_string());
    }

    if step2.other_pets.includes_cat() && rule.accepts_other_cats == Some(false) {
        knockouts.push("No convive con otros gatos".to_string());
    }
    if step2.other_pets.includes_dog() && rule.accepts_other_dogs == Some(false) {
        knockouts.push("No convive con perros".to_string());
    }

    if pet.species == Species::Dog {
        if rule.require_home_visit && step2.home_visit_ok == Some(false) {
            knockouts.push("Se requiere visita domiciliaria.".to_string());
        }
        if rule.require_fenced_or_secure && step2.yard_secure == Some(false) {
            knockouts.push("El entorno no es seguro (posibles salidas a la calle).".to_string());
        }
        if rule.forbid_tethering && step2.will_not_tether == Some(false) {
            knockouts.push("No se permite amarrar o encadenar al adoptado.".to_string());
        }
    }

    // Condo bylaws are a hard gate regardless of the rule record. The same
    // fact also costs 25 points in the scoring pass.
    if step2.condo_allows_pets == Some(false) {
        knockouts.push("Reglamento del condominio no permite mascotas".to_string());
    }

    knockouts
}

/// Accumulate the raw, unclamped suitability score.
pub(crate) fn raw_score(
    pet: &Pet,
    rule: &EffectiveRule,
    step2: &Step2Snapshot,
    step3: &Step3Snapshot,
) -> f64 {
    let mut score = 0.0;

    score += match step2.housing_type {
        HousingType::Own => 20.0,
        HousingType::WithFamily => 12.0,
        HousingType::Rent => 10.0,
        HousingType::Other => 0.0,
    };
    if step2.housing_type != HousingType::Rent || step2.landlord_allows_pets {
        score += 10.0;
    }

    // Fewer hours away scores higher; hours clamp at 60 before dividing so
    // the contribution bottoms out at zero.
    score += (20.0 - f64::from(step2.hours_away_per_week.min(60)) / 3.0).max(0.0);

    score += match step2.pet_environment {
        PetEnvironment::Indoor => 25.0,
        PetEnvironment::IndoorWithEnclosed => 20.0,
        PetEnvironment::FreeRoam => 0.0,
    };

    score += motivation_points(&step2.motivation, rule.min_motivation_chars);

    score += commitment_points(rule, Commitment::Sterilization, step3.commit_sterilization);
    score += commitment_points(rule, Commitment::Vaccines, step3.commit_vaccines);
    score += commitment_points(rule, Commitment::AcceptContract, step3.accept_contract);

    if let Some(budget) = step2.monthly_budget {
        score += match budget {
            BudgetBracket::From100To200 => -10.0,
            BudgetBracket::From200To300 => -5.0,
            BudgetBracket::From300To400 => 0.0,
            BudgetBracket::From400To500 => 5.0,
            BudgetBracket::Above500 => 8.0,
        };
    }

    if step2.has_vet == Some(true) {
        score += 8.0;
    }
    if filled(step2.vet_contact.as_deref()) {
        score += 4.0;
    }

    if rule.require_family_consent {
        if step3.family_agrees != Some(true) {
            score -= 30.0;
        }
    } else if step3.family_agrees == Some(true) {
        score += 5.0;
    }

    match step2.condo_allows_pets {
        Some(false) => score -= 25.0,
        Some(true) => score += 5.0,
        None => {}
    }

    if let Some(sleep) = step2.sleep_location.as_deref() {
        if phrases::contains_any(sleep, phrases::INDOOR_SLEEP) {
            score += 5.0;
        }
        if phrases::contains_any(sleep, phrases::OUTDOOR_SLEEP) {
            score -= 5.0;
        }
    }

    if filled(step2.travel_caretaker.as_deref()) {
        score += 5.0;
    }

    if let Some(outcome) = step2.prior_pets_outcome.as_deref() {
        if phrases::contains_any(outcome, phrases::NEGATIVE_HISTORY) {
            score -= 15.0;
        }
    }

    if let Some(max_away) = rule.max_hours_away_per_week {
        if step2.hours_away_per_week > max_away {
            let excess = f64::from(step2.hours_away_per_week - max_away);
            score -= (excess / 4.0).ceil().min(25.0);
        }
    }
    if let (Some(max_alone), Some(alone)) = (rule.max_hours_alone, step2.hours_alone_per_day) {
        if alone > max_alone {
            let excess = f64::from(alone - max_alone);
            score -= (excess * 4.0).min(30.0);
        }
    }

    if pet.species == Species::Dog {
        if step2.will_leash == Some(true) {
            score += 8.0;
        }
        if step2.id_tag_will_use == Some(true) {
            score += 6.0;
        }
        if filled(step2.training_plan.as_deref()) {
            score += 6.0;
        }
        if filled(step2.social_plan.as_deref()) {
            score += 6.0;
        }
        if step2.yard_secure == Some(true) {
            score += 10.0;
        }
    }

    score
}

fn motivation_points(motivation: &str, threshold: usize) -> f64 {
    let length = motivation.trim().chars().count();
    if length >= threshold {
        let denominator = (threshold * 2).max(1) as f64;
        ((length as f64 / denominator) * 15.0).floor().min(15.0)
    } else {
        -(((threshold - length) as f64 / 40.0).ceil().min(10.0))
    }
}

fn commitment_points(rule: &EffectiveRule, commitment: Commitment, granted: bool) -> f64 {
    if granted {
        5.0
    } else if rule.requires(commitment) {
        -10.0
    } else {
        0.0
    }
}

fn filled(text: Option<&str>) -> bool {
    text.is_some_and(|value| !value.trim().is_empty())
}
