pub mod criteria;
pub mod eligibility;
pub mod error;
pub mod extraction;
pub mod interview;
pub mod model;
pub mod parsing;
pub mod report;

use chrono::NaiveDate;
use tracing::{debug, warn};

use criteria::EligibilityCriteria;
use eligibility::assess;
use extraction::TextNormalizer;
use model::{CandidateRecord, SourceDocument};
use report::{ScreenedCandidate, ScreeningReport, ScreeningWarning};

/// Normalize and extract one document.
///
/// Never fails: an unreadable document yields an all-absent record and a
/// warning explaining why.
pub fn extract_document(
    doc: &SourceDocument,
    normalizer: &TextNormalizer,
    today: NaiveDate,
) -> (CandidateRecord, Option<ScreeningWarning>) {
    let (text, warning) = match normalizer.try_normalize_document(doc) {
        Ok(text) => (text, None),
        Err(e) => {
            warn!(document = %doc.file_name, error = %e, "could not read document, treating it as empty");
            let warning = ScreeningWarning {
                document: doc.file_name.clone(),
                message: e.to_string(),
            };
            (String::new(), Some(warning))
        }
    };

    let record = parsing::extract_as_of(&text, &doc.name, today);
    debug!(
        document = %doc.file_name,
        kind = %doc.kind,
        chars = text.len(),
        fields = parsing::recovered_field_count(&record),
        "document extracted"
    );
    (record, warning)
}

/// Run one document through the full pipeline.
pub fn screen_document(
    doc: &SourceDocument,
    normalizer: &TextNormalizer,
    criteria: &EligibilityCriteria,
    today: NaiveDate,
) -> (ScreenedCandidate, Option<ScreeningWarning>) {
    let (record, warning) = extract_document(doc, normalizer, today);
    let outcome = assess(&record, criteria);
    debug!(document = %doc.file_name, shortlisted = outcome.shortlisted, "document screened");
    let candidate = ScreenedCandidate {
        file_name: doc.file_name.clone(),
        kind: doc.kind,
        record,
        outcome,
    };
    (candidate, warning)
}

/// Screen a batch sequentially. Documents are independent; one failing
/// document never aborts the others.
pub fn screen_documents(
    docs: &[SourceDocument],
    normalizer: &TextNormalizer,
    criteria: &EligibilityCriteria,
    today: NaiveDate,
) -> ScreeningReport {
    let mut report = ScreeningReport::new(*criteria);
    for doc in docs {
        let (candidate, warning) = screen_document(doc, normalizer, criteria, today);
        report.candidates.push(candidate);
        report.warnings.extend(warning);
    }
    report
}
