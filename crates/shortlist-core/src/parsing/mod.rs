pub mod dates;
pub mod keywords;
pub mod rules;

use chrono::NaiveDate;
use tracing::debug;

use crate::model::{CandidateRecord, Grade};
use dates::age_on;
use keywords::{infer_gender, scan_qualifications, CUSTOMER_SERVICE_EXPERIENCE, ENGLISH_COMPETENCY};
use rules::{labeled_rules, FieldValue, LabeledField};

/// Extract a candidate record, computing age against the local date.
pub fn extract(text: &str, document_name: &str) -> CandidateRecord {
    extract_as_of(text, document_name, chrono::Local::now().date_naive())
}

/// Extract a candidate record from normalized résumé text.
///
/// Never fails: every rule that finds nothing, or finds something malformed,
/// leaves its field absent. `name` comes from `document_name`, not the text.
pub fn extract_as_of(text: &str, document_name: &str, today: NaiveDate) -> CandidateRecord {
    let mut record = CandidateRecord::empty(document_name);

    for rule in labeled_rules() {
        let Some(value) = rule.apply(text) else {
            continue;
        };
        debug!(document = document_name, field = %rule.field(), ?value, "rule matched");
        match (rule.field(), value) {
            (LabeledField::OlEnglishGrade, FieldValue::Grade(g)) => record.ol_english_grade = Some(g),
            (LabeledField::AlEnglishGrade, FieldValue::Grade(g)) => record.al_english_grade = Some(g),
            (LabeledField::EnglishLiteratureGrade, FieldValue::Grade(g)) => {
                record.english_literature_grade = Some(g)
            }
            (LabeledField::DateOfBirth, FieldValue::Date(d)) => record.date_of_birth = Some(d),
            (LabeledField::University, FieldValue::Text(s)) => record.university = Some(s),
            (LabeledField::Town, FieldValue::Text(s)) => record.town = Some(s),
            (field, value) => {
                debug!(%field, ?value, "rule produced a value of the wrong shape, ignoring");
            }
        }
    }

    record.age = record.date_of_birth.and_then(|dob| age_on(dob, today));
    record.gender = infer_gender(text);
    record.english_competency_claimed = ENGLISH_COMPETENCY.matches(text);
    record.customer_service_experience_claimed = CUSTOMER_SERVICE_EXPERIENCE.matches(text);
    record.qualifications = scan_qualifications(text);

    record
}

/// Number of optional fields that were recovered, for diagnostics.
pub fn recovered_field_count(record: &CandidateRecord) -> usize {
    let grades: [Option<Grade>; 3] = [
        record.ol_english_grade,
        record.al_english_grade,
        record.english_literature_grade,
    ];
    grades.iter().filter(|g| g.is_some()).count()
        + usize::from(record.date_of_birth.is_some())
        + usize::from(record.university.is_some())
        + usize::from(record.town.is_some())
        + usize::from(!record.qualifications.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;

    const SAMPLE_CV: &str = "\
Curriculum Vitae
Ms. Dilini Perera
Address: 45 Lake Road, Kurunegala
Date of Birth: 1995-06-15

Educational Qualifications
G.C.E. O/L English: B
G.C.E. A/L General English C
English Literature - A
Diploma in Hospitality Management
University of Peradeniya - BA (reading)

Experience
Receptionist, Hotel Lanka (2018-2021)
I am fluent in English.
";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_full_record() {
        let r = extract_as_of(SAMPLE_CV, "dilini_perera", today());
        assert_eq!(r.name, "dilini_perera");
        assert_eq!(r.date_of_birth, NaiveDate::from_ymd_opt(1995, 6, 15));
        assert_eq!(r.age, Some(29));
        assert_eq!(r.gender, Gender::Female);
        assert_eq!(r.ol_english_grade, Some(Grade::B));
        assert_eq!(r.al_english_grade, Some(Grade::C));
        assert_eq!(r.english_literature_grade, Some(Grade::A));
        assert!(r.english_competency_claimed);
        assert_eq!(r.qualifications, vec!["Diploma"]);
        assert_eq!(r.university.as_deref(), Some("University of Peradeniya - BA (reading)"));
        assert_eq!(r.town.as_deref(), Some("45 Lake Road, Kurunegala"));
        assert!(r.customer_service_experience_claimed);
        assert_eq!(recovered_field_count(&r), 7);
    }

    #[test]
    fn test_empty_text_gives_empty_record() {
        let r = extract_as_of("", "blank", today());
        assert_eq!(r, CandidateRecord::empty("blank"));
        assert_eq!(recovered_field_count(&r), 0);
    }

    #[test]
    fn test_no_birth_label_means_no_age() {
        let r = extract_as_of("Born on 1995-06-15\nO/L English: A", "x", today());
        assert_eq!(r.date_of_birth, None);
        assert_eq!(r.age, None);
        assert_eq!(r.ol_english_grade, Some(Grade::A));
    }

    #[test]
    fn test_malformed_birth_date_leaves_siblings_intact() {
        let r = extract_as_of("Date of Birth: 1995-19-40\nGeneral English B", "x", today());
        assert_eq!(r.date_of_birth, None);
        assert_eq!(r.age, None);
        assert_eq!(r.al_english_grade, Some(Grade::B));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let a = extract_as_of(SAMPLE_CV, "same", today());
        let b = extract_as_of(SAMPLE_CV, "same", today());
        assert_eq!(a, b);
    }

    #[test]
    fn test_birthday_boundary() {
        let on_birthday = extract_as_of("Date of Birth: 1994-06-15", "x", today());
        assert_eq!(on_birthday.age, Some(30));
        let day_before = extract_as_of("Date of Birth: 1994-06-16", "x", today());
        assert_eq!(day_before.age, Some(29));
    }
}
