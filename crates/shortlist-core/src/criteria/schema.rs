use serde::{Deserialize, Serialize};

use crate::error::ShortlistError;
use crate::model::Grade;

/// A named criteria configuration as stored in a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriteriaFile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    pub criteria: EligibilityCriteria,
}

/// Unvalidated criteria values, as written in configuration or on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaValues {
    pub min_ol_english_grade: Grade,
    pub min_al_english_grade: Grade,
    #[serde(default)]
    pub require_customer_service_experience: bool,
    pub min_age: u32,
    pub max_age: u32,
}

/// Shortlisting thresholds. Only constructible through validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CriteriaValues", into = "CriteriaValues")]
pub struct EligibilityCriteria {
    min_ol_english_grade: Grade,
    min_al_english_grade: Grade,
    require_customer_service_experience: bool,
    min_age: u32,
    max_age: u32,
}

impl EligibilityCriteria {
    pub const AGE_FLOOR: u32 = 18;
    pub const AGE_CEILING: u32 = 60;
    /// Grades a minimum may be set to. `E` would accept every stated grade.
    pub const SELECTABLE_GRADES: [Grade; 4] = [Grade::A, Grade::B, Grade::C, Grade::D];

    pub fn new(
        min_ol_english_grade: Grade,
        min_al_english_grade: Grade,
        require_customer_service_experience: bool,
        min_age: u32,
        max_age: u32,
    ) -> Result<Self, ShortlistError> {
        EligibilityCriteria::try_from(CriteriaValues {
            min_ol_english_grade,
            min_al_english_grade,
            require_customer_service_experience,
            min_age,
            max_age,
        })
    }

    pub fn min_ol_english_grade(&self) -> Grade {
        self.min_ol_english_grade
    }

    pub fn min_al_english_grade(&self) -> Grade {
        self.min_al_english_grade
    }

    pub fn require_customer_service_experience(&self) -> bool {
        self.require_customer_service_experience
    }

    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    pub fn values(&self) -> CriteriaValues {
        CriteriaValues::from(*self)
    }
}

impl Default for EligibilityCriteria {
    fn default() -> Self {
        EligibilityCriteria {
            min_ol_english_grade: Grade::C,
            min_al_english_grade: Grade::C,
            require_customer_service_experience: false,
            min_age: 18,
            max_age: 40,
        }
    }
}

impl TryFrom<CriteriaValues> for EligibilityCriteria {
    type Error = ShortlistError;

    fn try_from(v: CriteriaValues) -> Result<Self, Self::Error> {
        for (label, grade) in [
            ("min_ol_english_grade", v.min_ol_english_grade),
            ("min_al_english_grade", v.min_al_english_grade),
        ] {
            if !Self::SELECTABLE_GRADES.contains(&grade) {
                return Err(ShortlistError::Configuration(format!(
                    "{label} must be one of A, B, C, D (got {grade})"
                )));
            }
        }

        for (label, age) in [("min_age", v.min_age), ("max_age", v.max_age)] {
            if !(Self::AGE_FLOOR..=Self::AGE_CEILING).contains(&age) {
                return Err(ShortlistError::Configuration(format!(
                    "{label} must be between {} and {} (got {age})",
                    Self::AGE_FLOOR,
                    Self::AGE_CEILING
                )));
            }
        }

        if v.min_age > v.max_age {
            return Err(ShortlistError::Configuration(format!(
                "min_age ({}) is greater than max_age ({}); no candidate could pass",
                v.min_age, v.max_age
            )));
        }

        Ok(EligibilityCriteria {
            min_ol_english_grade: v.min_ol_english_grade,
            min_al_english_grade: v.min_al_english_grade,
            require_customer_service_experience: v.require_customer_service_experience,
            min_age: v.min_age,
            max_age: v.max_age,
        })
    }
}

impl From<EligibilityCriteria> for CriteriaValues {
    fn from(c: EligibilityCriteria) -> Self {
        CriteriaValues {
            min_ol_english_grade: c.min_ol_english_grade,
            min_al_english_grade: c.min_al_english_grade,
            require_customer_service_experience: c.require_customer_service_experience,
            min_age: c.min_age,
            max_age: c.max_age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_criteria() {
        let c = EligibilityCriteria::new(Grade::B, Grade::D, true, 20, 20).unwrap();
        assert_eq!(c.min_ol_english_grade(), Grade::B);
        assert_eq!(c.min_al_english_grade(), Grade::D);
        assert!(c.require_customer_service_experience());
        assert_eq!((c.min_age(), c.max_age()), (20, 20));
    }

    #[test]
    fn test_min_age_above_max_age_rejected() {
        let err = EligibilityCriteria::new(Grade::C, Grade::C, false, 45, 30).unwrap_err();
        assert!(matches!(err, ShortlistError::Configuration(_)));
        assert!(err.to_string().contains("min_age"));
    }

    #[test]
    fn test_age_outside_range_rejected() {
        assert!(EligibilityCriteria::new(Grade::C, Grade::C, false, 16, 30).is_err());
        assert!(EligibilityCriteria::new(Grade::C, Grade::C, false, 18, 65).is_err());
    }

    #[test]
    fn test_grade_e_not_selectable() {
        assert!(EligibilityCriteria::new(Grade::E, Grade::C, false, 18, 40).is_err());
        assert!(EligibilityCriteria::new(Grade::C, Grade::E, false, 18, 40).is_err());
    }

    #[test]
    fn test_default_is_valid() {
        let d = EligibilityCriteria::default();
        assert_eq!(EligibilityCriteria::try_from(d.values()).unwrap(), d);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{
            "min_ol_english_grade": "C",
            "min_al_english_grade": "C",
            "min_age": 50,
            "max_age": 30
        }"#;
        assert!(serde_json::from_str::<EligibilityCriteria>(json).is_err());
    }

    #[test]
    fn test_experience_defaults_to_not_required() {
        let json = r#"{
            "min_ol_english_grade": "B",
            "min_al_english_grade": "C",
            "min_age": 18,
            "max_age": 40
        }"#;
        let c: EligibilityCriteria = serde_json::from_str(json).unwrap();
        assert!(!c.require_customer_service_experience());
    }
}
