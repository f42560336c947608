use crate::workflows::adoption::domain::{AdoptionRule, Commitment, HousingType};

/// A pet's adoption rule with every absent field resolved to its documented
/// default. Resolution happens exactly once at the top of an evaluation; the
/// knockout and scoring passes read only resolved fields and never fall back
/// to literals inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveRule {
    /// Empty means every housing type is allowed.
    pub allowed_housing: Vec<HousingType>,
    pub require_commits: Vec<Commitment>,
    pub min_age_years: u8,
    pub require_landlord_permission: bool,
    pub disallow_free_roam: bool,
    pub max_hours_away_per_week: Option<u16>,
    pub max_hours_alone: Option<u8>,
    pub require_home_visit: bool,
    pub require_fenced_or_secure: bool,
    pub forbid_tethering: bool,
    pub min_motivation_chars: usize,
    /// `Some(false)` means cohabitation with that species is a conflict;
    /// `None` imposes no constraint.
    pub accepts_other_cats: Option<bool>,
    pub accepts_other_dogs: Option<bool>,
    pub require_family_consent: bool,
}

pub(crate) const DEFAULT_MIN_AGE_YEARS: u8 = 18;
pub(crate) const DEFAULT_MIN_MOTIVATION_CHARS: usize = 120;

impl EffectiveRule {
    /// Resolve an optional rule record. A missing record yields the fully
    /// permissive-default policy.
    pub fn resolve(rule: Option<&AdoptionRule>) -> Self {
        let Some(rule) = rule else {
            return Self::resolve(Some(&AdoptionRule::default()));
        };

        Self {
            allowed_housing: rule.allowed_housing.clone(),
            require_commits: rule.require_commits.clone(),
            min_age_years: rule.min_age_years.unwrap_or(DEFAULT_MIN_AGE_YEARS),
            require_landlord_permission: rule.require_landlord_permission.unwrap_or(true),
            disallow_free_roam: rule.disallow_free_roam.unwrap_or(true),
            max_hours_away_per_week: rule.max_hours_away_per_week,
            max_hours_alone: rule.max_hours_alone,
            require_home_visit: rule.require_home_visit.unwrap_or(true),
            require_fenced_or_secure: rule.require_fenced_or_secure.unwrap_or(true),
            forbid_tethering: rule.forbid_tethering.unwrap_or(true),
            min_motivation_chars: rule
                .min_motivation_chars
                .unwrap_or(DEFAULT_MIN_MOTIVATION_CHARS),
            accepts_other_cats: rule.accepts_other_cats,
            accepts_other_dogs: rule.accepts_other_dogs,
            require_family_consent: rule.require_family_consent.unwrap_or(false),
        }
    }

    pub fn requires(&self, commitment: Commitment) -> bool {
        self.require_commits.contains(&commitment)
    }
}
