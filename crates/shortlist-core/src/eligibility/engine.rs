use crate::criteria::EligibilityCriteria;
use crate::eligibility::outcome::{Criterion, CriterionCheck, EligibilityOutcome};
use crate::model::{CandidateRecord, Grade};

/// Shortlisting decision: all four checks must pass.
pub fn evaluate(record: &CandidateRecord, criteria: &EligibilityCriteria) -> bool {
    assess(record, criteria).shortlisted
}

/// Evaluate every criterion and keep the reasoning.
///
/// A missing record field fails its check; it is never skipped.
pub fn assess(record: &CandidateRecord, criteria: &EligibilityCriteria) -> EligibilityOutcome {
    let checks = vec![
        check_grade(
            Criterion::OlEnglishGrade,
            record.ol_english_grade,
            criteria.min_ol_english_grade(),
        ),
        check_grade(
            Criterion::AlEnglishGrade,
            record.al_english_grade,
            criteria.min_al_english_grade(),
        ),
        check_experience(record, criteria),
        check_age(record.age, criteria),
    ];
    let shortlisted = checks.iter().all(|c| c.passed);

    EligibilityOutcome {
        shortlisted,
        checks,
    }
}

fn check_grade(criterion: Criterion, grade: Option<Grade>, minimum: Grade) -> CriterionCheck {
    let (passed, reason) = match grade {
        Some(g) if g.meets(minimum) => (true, format!("{criterion} grade {g} meets minimum {minimum}")),
        Some(g) => (false, format!("{criterion} grade {g} is below minimum {minimum}")),
        None => (false, format!("{criterion} grade not found (minimum {minimum})")),
    };
    CriterionCheck {
        criterion,
        passed,
        reason,
    }
}

fn check_experience(record: &CandidateRecord, criteria: &EligibilityCriteria) -> CriterionCheck {
    let claimed = record.customer_service_experience_claimed;
    let (passed, reason) = match (criteria.require_customer_service_experience(), claimed) {
        (false, _) => (true, "customer service experience not required".to_string()),
        (true, true) => (true, "customer service experience claimed".to_string()),
        (true, false) => (
            false,
            "customer service experience required but not mentioned".to_string(),
        ),
    };
    CriterionCheck {
        criterion: Criterion::CustomerServiceExperience,
        passed,
        reason,
    }
}

fn check_age(age: Option<u32>, criteria: &EligibilityCriteria) -> CriterionCheck {
    let (min, max) = (criteria.min_age(), criteria.max_age());
    let (passed, reason) = match age {
        Some(a) if (min..=max).contains(&a) => (true, format!("age {a} within {min}-{max}")),
        Some(a) => (false, format!("age {a} outside {min}-{max}")),
        None => (false, format!("age unknown (required {min}-{max})")),
    };
    CriterionCheck {
        criterion: Criterion::AgeRange,
        passed,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(min_ol: Grade, require_exp: bool, min_age: u32, max_age: u32) -> EligibilityCriteria {
        EligibilityCriteria::new(min_ol, Grade::C, require_exp, min_age, max_age).unwrap()
    }

    fn passing_record() -> CandidateRecord {
        CandidateRecord {
            name: "candidate".into(),
            age: Some(29),
            ol_english_grade: Some(Grade::B),
            al_english_grade: Some(Grade::C),
            customer_service_experience_claimed: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_all_checks_pass() {
        let outcome = assess(&passing_record(), &criteria(Grade::C, true, 18, 40));
        assert!(outcome.shortlisted);
        assert_eq!(outcome.checks.len(), 4);
        assert_eq!(outcome.summary(), "shortlisted");
    }

    #[test]
    fn test_min_grade_c_accepts_a_b_c_only() {
        let c = criteria(Grade::C, false, 18, 40);
        for (grade, expected) in [
            (Some(Grade::A), true),
            (Some(Grade::B), true),
            (Some(Grade::C), true),
            (Some(Grade::D), false),
            (Some(Grade::E), false),
            (None, false),
        ] {
            let record = CandidateRecord {
                ol_english_grade: grade,
                ..passing_record()
            };
            assert_eq!(evaluate(&record, &c), expected, "grade {grade:?}");
        }
    }

    #[test]
    fn test_missing_al_grade_fails() {
        let record = CandidateRecord {
            al_english_grade: None,
            ..passing_record()
        };
        let outcome = assess(&record, &criteria(Grade::C, false, 18, 40));
        assert!(!outcome.shortlisted);
        let failed: Vec<Criterion> = outcome.failed_checks().map(|c| c.criterion).collect();
        assert_eq!(failed, vec![Criterion::AlEnglishGrade]);
        assert!(outcome.checks[1].reason.contains("not found"));
    }

    #[test]
    fn test_experience_only_checked_when_required() {
        let record = CandidateRecord {
            customer_service_experience_claimed: false,
            ..passing_record()
        };
        assert!(evaluate(&record, &criteria(Grade::C, false, 18, 40)));
        assert!(!evaluate(&record, &criteria(Grade::C, true, 18, 40)));
    }

    #[test]
    fn test_age_bounds_inclusive() {
        let c = criteria(Grade::C, false, 29, 29);
        assert!(evaluate(&passing_record(), &c));

        let older = CandidateRecord {
            age: Some(30),
            ..passing_record()
        };
        assert!(!evaluate(&older, &c));
    }

    #[test]
    fn test_unknown_age_fails() {
        let record = CandidateRecord {
            age: None,
            ..passing_record()
        };
        let outcome = assess(&record, &criteria(Grade::C, false, 18, 60));
        assert!(!outcome.shortlisted);
        assert_eq!(outcome.summary(), "not shortlisted: Age");
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let record = passing_record();
        let c = criteria(Grade::B, true, 25, 35);
        assert_eq!(assess(&record, &c), assess(&record, &c));
        assert_eq!(evaluate(&record, &c), evaluate(&record, &c));
    }
}
