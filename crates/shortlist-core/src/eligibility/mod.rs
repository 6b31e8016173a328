pub mod engine;
pub mod outcome;

pub use engine::{assess, evaluate};
pub use outcome::{Criterion, CriterionCheck, EligibilityOutcome};
