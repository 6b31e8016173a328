use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::model::Grade;
use crate::parsing::dates::parse_iso_date;

/// Record fields filled by labeled-pattern rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabeledField {
    OlEnglishGrade,
    AlEnglishGrade,
    EnglishLiteratureGrade,
    DateOfBirth,
    University,
    Town,
}

impl fmt::Display for LabeledField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LabeledField::OlEnglishGrade => "O/L English",
            LabeledField::AlEnglishGrade => "A/L General English",
            LabeledField::EnglishLiteratureGrade => "English Literature",
            LabeledField::DateOfBirth => "Date of Birth",
            LabeledField::University => "University",
            LabeledField::Town => "Town",
        };
        write!(f, "{name}")
    }
}

/// Shape of the token captured after a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureShape {
    /// A standalone upper-case letter A-E later on the label's line.
    Grade,
    /// A `YYYY-MM-DD` date later on the label's line.
    IsoDate,
    /// The label itself plus the rest of its line.
    LabelToEndOfLine,
    /// Whatever follows the first `:`, `,` or line break after the label, up to
    /// the end of that line.
    AfterSeparator,
}

impl CaptureShape {
    /// Regex source for `label` followed by this shape. The label is matched
    /// case-insensitively; the gap between label and capture never crosses a
    /// line break (except the separator itself for `AfterSeparator`).
    fn pattern(self, label: &str) -> String {
        match self {
            CaptureShape::Grade => format!(r"(?i:{label})[^\n]*?\b([A-E])\b"),
            CaptureShape::IsoDate => format!(r"(?i:{label})[^\n]*?(\d{{4}}-\d{{2}}-\d{{2}})"),
            CaptureShape::LabelToEndOfLine => format!(r"((?i:{label})[^\n]*)"),
            CaptureShape::AfterSeparator => format!(r"(?i:{label})[^\n]*?[:,\n]([^\n]*)"),
        }
    }

    fn postprocess(self, raw: &str) -> Option<FieldValue> {
        match self {
            CaptureShape::Grade => raw.chars().next().and_then(Grade::from_char).map(FieldValue::Grade),
            CaptureShape::IsoDate => parse_iso_date(raw).map(FieldValue::Date),
            CaptureShape::LabelToEndOfLine | CaptureShape::AfterSeparator => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(FieldValue::Text(trimmed.to_string()))
                }
            }
        }
    }
}

/// One row of the extraction table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LabeledRuleDef {
    pub field: LabeledField,
    /// Regex fragment for the label.
    pub label: &'static str,
    pub capture: CaptureShape,
}

pub const LABELED_RULES: &[LabeledRuleDef] = &[
    LabeledRuleDef {
        field: LabeledField::OlEnglishGrade,
        label: r"O/L.*?English",
        capture: CaptureShape::Grade,
    },
    LabeledRuleDef {
        field: LabeledField::AlEnglishGrade,
        label: r"General English",
        capture: CaptureShape::Grade,
    },
    LabeledRuleDef {
        field: LabeledField::EnglishLiteratureGrade,
        label: r"English Literature",
        capture: CaptureShape::Grade,
    },
    LabeledRuleDef {
        field: LabeledField::DateOfBirth,
        label: r"Date of Birth",
        capture: CaptureShape::IsoDate,
    },
    LabeledRuleDef {
        field: LabeledField::University,
        label: r"University",
        capture: CaptureShape::LabelToEndOfLine,
    },
    LabeledRuleDef {
        field: LabeledField::Town,
        label: r"Address",
        capture: CaptureShape::AfterSeparator,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Grade(Grade),
    Date(NaiveDate),
    Text(String),
}

/// A compiled [`LabeledRuleDef`].
#[derive(Debug)]
pub struct LabeledRule {
    def: LabeledRuleDef,
    regex: Regex,
}

impl LabeledRule {
    pub fn compile(def: LabeledRuleDef) -> Result<Self, regex::Error> {
        let regex = Regex::new(&def.capture.pattern(def.label))?;
        Ok(LabeledRule { def, regex })
    }

    pub fn field(&self) -> LabeledField {
        self.def.field
    }

    pub fn def(&self) -> &LabeledRuleDef {
        &self.def
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// First match in document order, post-processed. Later matches are
    /// never consulted, even when the first one fails post-processing.
    pub fn apply(&self, text: &str) -> Option<FieldValue> {
        let caps = self.regex.captures(text)?;
        let raw = caps.get(1)?.as_str();
        self.def.capture.postprocess(raw)
    }
}

static COMPILED_RULES: LazyLock<Vec<LabeledRule>> = LazyLock::new(|| {
    LABELED_RULES
        .iter()
        .map(|def| LabeledRule::compile(*def).expect("built-in extraction rule must compile"))
        .collect()
});

/// The built-in labeled rules, compiled once.
pub fn labeled_rules() -> &'static [LabeledRule] {
    &COMPILED_RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(field: LabeledField) -> &'static LabeledRule {
        labeled_rules().iter().find(|r| r.field() == field).unwrap()
    }

    #[test]
    fn test_every_rule_compiles() {
        assert_eq!(labeled_rules().len(), LABELED_RULES.len());
    }

    #[test]
    fn test_ol_grade() {
        let r = rule(LabeledField::OlEnglishGrade);
        assert_eq!(r.apply("O/L English: B"), Some(FieldValue::Grade(Grade::B)));
        assert_eq!(
            r.apply("G.C.E. o/l examination - english language  C"),
            Some(FieldValue::Grade(Grade::C))
        );
        assert_eq!(r.apply("O/L Mathematics A"), None);
    }

    #[test]
    fn test_grade_ignores_letters_inside_words() {
        let r = rule(LabeledField::OlEnglishGrade);
        assert_eq!(
            r.apply("O/L English Language - D"),
            Some(FieldValue::Grade(Grade::D))
        );
    }

    #[test]
    fn test_grade_must_be_on_label_line() {
        let r = rule(LabeledField::AlEnglishGrade);
        assert_eq!(r.apply("General English\nA/L Results: B"), None);
        assert_eq!(r.apply("general english  -  C"), Some(FieldValue::Grade(Grade::C)));
    }

    #[test]
    fn test_grade_f_is_not_a_grade() {
        let r = rule(LabeledField::EnglishLiteratureGrade);
        assert_eq!(r.apply("English Literature F"), None);
        assert_eq!(r.apply("English Literature: A"), Some(FieldValue::Grade(Grade::A)));
    }

    #[test]
    fn test_first_match_wins() {
        let r = rule(LabeledField::AlEnglishGrade);
        assert_eq!(
            r.apply("General English C\nGeneral English A"),
            Some(FieldValue::Grade(Grade::C))
        );
    }

    #[test]
    fn test_date_of_birth() {
        let r = rule(LabeledField::DateOfBirth);
        assert_eq!(
            r.apply("Date of Birth : 1995-06-15"),
            Some(FieldValue::Date(NaiveDate::from_ymd_opt(1995, 6, 15).unwrap()))
        );
        assert_eq!(r.apply("Date of Birth: 1995-02-30"), None);
        assert_eq!(r.apply("Date of Birth: 15/06/1995"), None);
        assert_eq!(r.apply("Born 1995-06-15"), None);
    }

    #[test]
    fn test_university_keeps_label() {
        let r = rule(LabeledField::University);
        assert_eq!(
            r.apply("Education\nUniversity of Colombo  (2014-2018)\nMore"),
            Some(FieldValue::Text("University of Colombo  (2014-2018)".into()))
        );
        assert_eq!(
            r.apply("Open University of Sri Lanka"),
            Some(FieldValue::Text("University of Sri Lanka".into()))
        );
    }

    #[test]
    fn test_town_after_separator() {
        let r = rule(LabeledField::Town);
        assert_eq!(
            r.apply("Address: 12 Temple Road, Kandy\nPhone"),
            Some(FieldValue::Text("12 Temple Road, Kandy".into()))
        );
        assert_eq!(
            r.apply("Permanent Address\nNegombo\n"),
            Some(FieldValue::Text("Negombo".into()))
        );
        assert_eq!(r.apply("Address:\n"), None);
    }

    #[test]
    fn test_pattern_is_inspectable() {
        let r = rule(LabeledField::DateOfBirth);
        assert!(r.pattern().contains("Date of Birth"));
        assert_eq!(r.def().capture, CaptureShape::IsoDate);
    }
}
