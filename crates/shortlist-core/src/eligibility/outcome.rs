use serde::{Deserialize, Serialize};
use std::fmt;

/// The four independent shortlisting predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    OlEnglishGrade,
    AlEnglishGrade,
    CustomerServiceExperience,
    AgeRange,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::OlEnglishGrade => write!(f, "O/L English"),
            Criterion::AlEnglishGrade => write!(f, "A/L General English"),
            Criterion::CustomerServiceExperience => write!(f, "Customer service experience"),
            Criterion::AgeRange => write!(f, "Age"),
        }
    }
}

/// Result of one predicate for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionCheck {
    pub criterion: Criterion,
    pub passed: bool,
    /// Human-readable explanation of the result.
    pub reason: String,
}

/// Shortlisting decision plus the checks that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub shortlisted: bool,
    /// One entry per criterion, always in declaration order.
    pub checks: Vec<CriterionCheck>,
}

impl EligibilityOutcome {
    pub fn failed_checks(&self) -> impl Iterator<Item = &CriterionCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }

    pub fn summary(&self) -> String {
        if self.shortlisted {
            return "shortlisted".to_string();
        }
        let failed: Vec<String> = self.failed_checks().map(|c| c.criterion.to_string()).collect();
        format!("not shortlisted: {}", failed.join(", "))
    }
}
