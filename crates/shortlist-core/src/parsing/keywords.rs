use regex::Regex;
use std::sync::LazyLock;

use crate::model::Gender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

/// Presence test for any of a fixed set of markers anywhere in the text.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub markers: &'static [&'static str],
    pub case: CaseSensitivity,
}

impl KeywordRule {
    pub fn matches(&self, text: &str) -> bool {
        match self.case {
            CaseSensitivity::Sensitive => self.markers.iter().any(|m| text.contains(m)),
            CaseSensitivity::Insensitive => {
                let lower = text.to_lowercase();
                self.markers
                    .iter()
                    .any(|m| lower.contains(&m.to_lowercase()))
            }
        }
    }
}

// Honorifics are matched exactly: "MS." or "miss" inside a word is not a title.
pub const FEMALE_HONORIFICS: KeywordRule = KeywordRule {
    markers: &["Ms.", "Miss", "Mrs."],
    case: CaseSensitivity::Sensitive,
};

pub const MALE_HONORIFICS: KeywordRule = KeywordRule {
    markers: &["Mr."],
    case: CaseSensitivity::Sensitive,
};

pub const ENGLISH_COMPETENCY: KeywordRule = KeywordRule {
    markers: &["fluent in English", "IELTS", "TOEFL"],
    case: CaseSensitivity::Insensitive,
};

pub const CUSTOMER_SERVICE_EXPERIENCE: KeywordRule = KeywordRule {
    markers: &["Receptionist", "Customer"],
    case: CaseSensitivity::Insensitive,
};

/// Female markers take priority over male ones.
pub fn infer_gender(text: &str) -> Gender {
    if FEMALE_HONORIFICS.matches(text) {
        Gender::Female
    } else if MALE_HONORIFICS.matches(text) {
        Gender::Male
    } else {
        Gender::NotStated
    }
}

pub const QUALIFICATION_VOCABULARY: &[&str] = &["NVQ", "Diploma", "Degree", "BIT"];

static QUALIFICATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = QUALIFICATION_VOCABULARY
        .iter()
        .map(|term| regex::escape(term))
        .collect();
    Regex::new(&format!("(?i)(?:{})", alternatives.join("|")))
        .expect("qualification vocabulary must compile")
});

/// Every vocabulary term occurring in `text`, in order of first occurrence,
/// spelled as in the vocabulary.
pub fn scan_qualifications(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in QUALIFICATION_RE.find_iter(text) {
        let Some(term) = QUALIFICATION_VOCABULARY
            .iter()
            .find(|term| term.eq_ignore_ascii_case(m.as_str()))
        else {
            continue;
        };
        if !found.iter().any(|f| f == term) {
            found.push(term.to_string());
        }
    }
    found
}
