use crate::workflows::adoption::domain::{
    AdoptionRule, Commitment, Step1Snapshot, Step2Snapshot, Step3Snapshot,
};

/// Validation errors raised by the intake guard. Messages are user-facing and
/// match the language of the adoption forms.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IntakeViolation {
    #[error("Debes verificar tu teléfono para continuar.")]
    PhoneUnverified,
    #[error("Falta adjuntar/confirmar: {document}.")]
    MissingDocument { document: String },
    #[error("El nombre debe tener al menos {min} caracteres.")]
    NameTooShort { min: usize },
    #[error("Correo electrónico inválido.")]
    InvalidEmail,
    #[error("El teléfono debe tener entre {min} y {max} caracteres.")]
    InvalidPhone { min: usize, max: usize },
    #[error("Horas fuera de casa por semana fuera de rango (0-{max}).")]
    HoursAwayOutOfRange { max: u16 },
    #[error("Horas solo por día fuera de rango (0-{max}).")]
    HoursAloneOutOfRange { max: u8 },
    #[error("La motivación excede el máximo de {max} caracteres.")]
    MotivationTooLong { max: usize },
    #[error("Se requiere el compromiso: {commitment}.")]
    MissingCommitment { commitment: &'static str },
    #[error("Se requiere el consentimiento de la familia.")]
    MissingFamilyConsent,
}

const MIN_NAME_CHARS: usize = 3;
const MIN_PHONE_CHARS: usize = 8;
const MAX_PHONE_CHARS: usize = 20;
const MAX_HOURS_AWAY_PER_WEEK: u16 = 168;
const MAX_HOURS_ALONE_PER_DAY: u8 = 24;
const MAX_MOTIVATION_CHARS: usize = 5000;

/// Schema-level validation applied to each step before it is persisted.
/// Structurally invalid submissions never reach the evaluation engine; the
/// guard carries no state and applies the same checks to every applicant.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Step 1: identity, a verified phone, and every document the rule
    /// requires confirmed by the applicant.
    pub fn check_step1(
        &self,
        rule: Option<&AdoptionRule>,
        step1: &Step1Snapshot,
    ) -> Result<(), IntakeViolation> {
        if step1.name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(IntakeViolation::NameTooShort {
                min: MIN_NAME_CHARS,
            });
        }

        let email = step1.email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(IntakeViolation::InvalidEmail);
        }

        let phone_len = step1.phone.trim().chars().count();
        if !(MIN_PHONE_CHARS..=MAX_PHONE_CHARS).contains(&phone_len) {
            return Err(IntakeViolation::InvalidPhone {
                min: MIN_PHONE_CHARS,
                max: MAX_PHONE_CHARS,
            });
        }

        if !step1.phone_verified {
            return Err(IntakeViolation::PhoneUnverified);
        }

        if let Some(rule) = rule {
            for document in &rule.required_documents {
                if !step1.docs_confirmed.get(document).copied().unwrap_or(false) {
                    return Err(IntakeViolation::MissingDocument {
                        document: document.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Step 2: range checks over the living-situation answers.
    pub fn check_step2(&self, step2: &Step2Snapshot) -> Result<(), IntakeViolation> {
        if step2.hours_away_per_week > MAX_HOURS_AWAY_PER_WEEK {
            return Err(IntakeViolation::HoursAwayOutOfRange {
                max: MAX_HOURS_AWAY_PER_WEEK,
            });
        }

        if let Some(alone) = step2.hours_alone_per_day {
            if alone > MAX_HOURS_ALONE_PER_DAY {
                return Err(IntakeViolation::HoursAloneOutOfRange {
                    max: MAX_HOURS_ALONE_PER_DAY,
                });
            }
        }

        if step2.motivation.chars().count() > MAX_MOTIVATION_CHARS {
            return Err(IntakeViolation::MotivationTooLong {
                max: MAX_MOTIVATION_CHARS,
            });
        }

        Ok(())
    }

    /// Step 3: commitments the rule marks as mandatory must be granted to
    /// submit at all, and required family consent must be explicit.
    pub fn check_step3(
        &self,
        rule: Option<&AdoptionRule>,
        step3: &Step3Snapshot,
    ) -> Result<(), IntakeViolation> {
        let Some(rule) = rule else {
            return Ok(());
        };

        for commitment in &rule.require_commits {
            let granted = match commitment {
                Commitment::Sterilization => step3.commit_sterilization,
                Commitment::Vaccines => step3.commit_vaccines,
                Commitment::AcceptContract => step3.accept_contract,
            };
            if !granted {
                return Err(IntakeViolation::MissingCommitment {
                    commitment: commitment.label(),
                });
            }
        }

        if rule.require_family_consent == Some(true) && step3.family_agrees != Some(true) {
            return Err(IntakeViolation::MissingFamilyConsent);
        }

        Ok(())
    }
}
