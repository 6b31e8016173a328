use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::criteria::EligibilityCriteria;
use crate::eligibility::{assess, EligibilityOutcome};
use crate::error::ShortlistError;
use crate::model::{CandidateRecord, DocumentKind, Grade};

/// Placeholder for absent optional fields in rendered output.
pub const NOT_AVAILABLE: &str = "N/A";

pub const REPORT_HEADERS: [&str; 12] = [
    "Name",
    "Age",
    "Gender",
    "O/L English",
    "A/L General English",
    "English Literature",
    "English Competency",
    "Qualifications",
    "University",
    "Town",
    "Customer Service Exp",
    "Shortlisted",
];

/// One processed document: what was extracted and what was decided.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenedCandidate {
    pub file_name: String,
    pub kind: DocumentKind,
    pub record: CandidateRecord,
    pub outcome: EligibilityOutcome,
}

/// A document that produced no text, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningWarning {
    pub document: String,
    pub message: String,
}

/// Result of screening a batch of documents, in input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub criteria: EligibilityCriteria,
    pub candidates: Vec<ScreenedCandidate>,
    pub warnings: Vec<ScreeningWarning>,
}

impl ScreeningReport {
    pub fn new(criteria: EligibilityCriteria) -> Self {
        ScreeningReport {
            criteria,
            candidates: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Recompute every decision against new criteria from the stored records.
    pub fn reevaluate(&mut self, criteria: EligibilityCriteria) {
        for candidate in &mut self.candidates {
            candidate.outcome = assess(&candidate.record, &criteria);
        }
        self.criteria = criteria;
    }

    pub fn shortlisted(&self) -> impl Iterator<Item = &ScreenedCandidate> {
        self.candidates.iter().filter(|c| c.outcome.shortlisted)
    }

    pub fn shortlisted_count(&self) -> usize {
        self.shortlisted().count()
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        self.candidates.iter().map(ReportRow::from_candidate).collect()
    }

    /// Write the report table as CSV, header row first.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ShortlistError> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(REPORT_HEADERS)?;
        for row in self.rows() {
            csv.write_record(row.cells())?;
        }
        csv.flush()?;
        Ok(())
    }
}

/// A report line with every value already rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub ol_english: String,
    pub al_general_english: String,
    pub english_literature: String,
    pub english_competency: String,
    pub qualifications: String,
    pub university: String,
    pub town: String,
    pub customer_service_exp: String,
    pub shortlisted: String,
}

impl ReportRow {
    pub fn from_candidate(candidate: &ScreenedCandidate) -> Self {
        let r = &candidate.record;
        ReportRow {
            name: r.name.clone(),
            age: r.age.map_or_else(|| NOT_AVAILABLE.to_string(), |a| a.to_string()),
            gender: r.gender.to_string(),
            ol_english: grade_cell(r.ol_english_grade),
            al_general_english: grade_cell(r.al_english_grade),
            english_literature: grade_cell(r.english_literature_grade),
            english_competency: yes_no(r.english_competency_claimed),
            qualifications: if r.qualifications.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                r.qualifications.join(", ")
            },
            university: text_cell(r.university.as_deref()),
            town: text_cell(r.town.as_deref()),
            customer_service_exp: yes_no(r.customer_service_experience_claimed),
            shortlisted: yes_no(candidate.outcome.shortlisted),
        }
    }

    /// Cells in [`REPORT_HEADERS`] order.
    pub fn cells(&self) -> [&str; 12] {
        [
            &self.name,
            &self.age,
            &self.gender,
            &self.ol_english,
            &self.al_general_english,
            &self.english_literature,
            &self.english_competency,
            &self.qualifications,
            &self.university,
            &self.town,
            &self.customer_service_exp,
            &self.shortlisted,
        ]
    }
}

fn grade_cell(grade: Option<Grade>) -> String {
    grade.map_or_else(|| NOT_AVAILABLE.to_string(), |g| g.to_string())
}

fn text_cell(text: Option<&str>) -> String {
    text.unwrap_or(NOT_AVAILABLE).to_string()
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "Yes" } else { "No" };
    text.to_string()
}
