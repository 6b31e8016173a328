use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ShortlistError;

/// Academic grade letter. Declaration order is the quality order: `A` is best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E];

    pub fn from_char(c: char) -> Option<Grade> {
        match c {
            'A' => Some(Grade::A),
            'B' => Some(Grade::B),
            'C' => Some(Grade::C),
            'D' => Some(Grade::D),
            'E' => Some(Grade::E),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
        }
    }

    /// True when this grade is at least as good as `bar`.
    pub fn meets(self, bar: Grade) -> bool {
        self <= bar
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Grade {
    type Err = ShortlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Grade::from_char(c.to_ascii_uppercase()).ok_or_else(|| {
                ShortlistError::Configuration(format!("'{trimmed}' is not a grade (expected A-E)"))
            }),
            _ => Err(ShortlistError::Configuration(format!(
                "'{trimmed}' is not a grade (expected A-E)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    #[default]
    NotStated,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => write!(f, "Female"),
            Gender::Male => write!(f, "Male"),
            Gender::NotStated => write!(f, "Not Stated"),
        }
    }
}

/// How a document's bytes have to be turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Page-oriented documents (PDF).
    Paginated,
    /// Word-processor documents (DOCX/DOC).
    FlowText,
    Unsupported,
}

impl DocumentKind {
    /// Classify by file extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> DocumentKind {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".pdf") {
            DocumentKind::Paginated
        } else if lower.ends_with(".docx") || lower.ends_with(".doc") {
            DocumentKind::FlowText
        } else {
            DocumentKind::Unsupported
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Paginated => write!(f, "paginated"),
            DocumentKind::FlowText => write!(f, "flow-text"),
            DocumentKind::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// A résumé as handed over by the outer layer.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// File name without its last extension.
    pub name: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub kind: DocumentKind,
    /// Where the document was read from, when it came from disk.
    pub source_path: Option<PathBuf>,
    /// Set when the file could not be read; `bytes` is then empty.
    pub read_error: Option<String>,
}

impl SourceDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let name = match file_name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => file_name.clone(),
        };
        let kind = DocumentKind::from_file_name(&file_name);
        SourceDocument {
            name,
            file_name,
            bytes,
            kind,
            source_path: None,
            read_error: None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ShortlistError> {
        let bytes = std::fs::read(path)?;
        let mut doc = SourceDocument::new(file_name_of(path), bytes);
        doc.source_path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Like [`SourceDocument::from_path`], but an unreadable file becomes an
    /// empty document carrying the read error, so a batch can continue.
    pub fn open(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(doc) => doc,
            Err(e) => {
                let mut doc = SourceDocument::new(file_name_of(path), Vec::new());
                doc.source_path = Some(path.to_path_buf());
                doc.read_error = Some(e.to_string());
                doc
            }
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Typed fields recovered from one résumé.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub age: Option<u32>,
    pub gender: Gender,
    pub ol_english_grade: Option<Grade>,
    pub al_english_grade: Option<Grade>,
    pub english_literature_grade: Option<Grade>,
    pub english_competency_claimed: bool,
    /// Vocabulary terms in first-seen order, without duplicates.
    pub qualifications: Vec<String>,
    pub university: Option<String>,
    pub town: Option<String>,
    pub customer_service_experience_claimed: bool,
}

impl CandidateRecord {
    /// A record with nothing recovered, as produced for unreadable documents.
    pub fn empty(name: impl Into<String>) -> Self {
        CandidateRecord {
            name: name.into(),
            ..Default::default()
        }
    }
}
