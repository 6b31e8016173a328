pub mod criteria;
pub mod extract;
pub mod interview;
pub mod rules;
pub mod screen;

use chrono::NaiveDate;
use clap::Args;
use shortlist_core::criteria::builtin::{self, DEFAULT_PRESET};
use shortlist_core::criteria::{load_criteria, EligibilityCriteria};
use shortlist_core::error::ShortlistError;
use shortlist_core::extraction::pdftotext::PdftotextExtractor;
use shortlist_core::extraction::TextNormalizer;
use shortlist_core::model::{DocumentKind, Grade, SourceDocument};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Criteria selection shared by `screen` and `interview`.
#[derive(Args, Debug, Clone)]
pub struct CriteriaArgs {
    /// Predefined criteria: airport-assistant (default), front-desk
    #[arg(short, long, value_name = "NAME", conflicts_with = "criteria")]
    pub preset: Option<String>,

    /// Custom JSON criteria file
    #[arg(short, long, value_name = "FILE")]
    pub criteria: Option<PathBuf>,

    /// Minimum O/L English grade (A-D)
    #[arg(long = "min-ol", value_name = "GRADE")]
    pub min_ol: Option<Grade>,

    /// Minimum A/L General English grade (A-D)
    #[arg(long = "min-al", value_name = "GRADE")]
    pub min_al: Option<Grade>,

    /// Require customer service experience; `--require-experience=false`
    /// lifts a preset's requirement
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub require_experience: Option<bool>,

    /// Minimum age (18-60)
    #[arg(long, value_name = "YEARS")]
    pub min_age: Option<u32>,

    /// Maximum age (18-60)
    #[arg(long, value_name = "YEARS")]
    pub max_age: Option<u32>,
}

impl CriteriaArgs {
    /// Resolve the base configuration, then apply explicit flags on top.
    ///
    /// Returns the configuration name alongside the criteria.
    pub fn resolve(&self) -> Result<(String, EligibilityCriteria), ShortlistError> {
        let file = match (&self.criteria, &self.preset) {
            (Some(path), _) => load_criteria(path)?,
            (None, Some(name)) => builtin::load_preset(name)?,
            (None, None) => builtin::load_preset(DEFAULT_PRESET)?,
        };

        let mut values = file.criteria.values();
        if let Some(g) = self.min_ol {
            values.min_ol_english_grade = g;
        }
        if let Some(g) = self.min_al {
            values.min_al_english_grade = g;
        }
        if let Some(required) = self.require_experience {
            values.require_customer_service_experience = required;
        }
        if let Some(age) = self.min_age {
            values.min_age = age;
        }
        if let Some(age) = self.max_age {
            values.max_age = age;
        }

        let criteria = EligibilityCriteria::try_from(values)?;
        debug!(name = %file.name, ?criteria, "criteria resolved");
        Ok((file.name, criteria))
    }
}

/// Document input shared by every command that reads résumés.
#[derive(Args, Debug, Clone)]
pub struct DocumentArgs {
    /// Résumé files (.pdf, .docx)
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Seconds before a pdftotext run is stopped
    #[arg(long, value_name = "SECS", default_value_t = PdftotextExtractor::DEFAULT_TIMEOUT.as_secs())]
    pub pdftotext_timeout: u64,

    /// Reference date for age calculation (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub as_of: Option<NaiveDate>,
}

impl DocumentArgs {
    /// Read every file. Unreadable ones are kept as empty documents and
    /// reported as warnings when screened.
    pub fn load(&self) -> Vec<SourceDocument> {
        let docs: Vec<SourceDocument> = self
            .files
            .iter()
            .map(|path| SourceDocument::open(path))
            .collect();
        let unreadable = docs.iter().filter(|d| d.read_error.is_some()).count();
        info!(count = docs.len(), unreadable, "documents loaded");
        docs
    }

    pub fn normalizer(&self) -> TextNormalizer {
        let extractor =
            PdftotextExtractor::with_timeout(Duration::from_secs(self.pdftotext_timeout));
        let normalizer = TextNormalizer::new(Box::new(extractor));
        debug!(
            backend = normalizer.pdf_backend(),
            timeout_secs = self.pdftotext_timeout,
            "text normalizer ready"
        );
        normalizer
    }

    pub fn today(&self) -> NaiveDate {
        self.as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("'{s}' is not a YYYY-MM-DD date: {e}"))
}

/// PDFs fail soft without pdftotext; say so once instead of once per file.
pub fn warn_if_pdftotext_missing(docs: &[SourceDocument]) {
    let has_pdf = docs.iter().any(|d| d.kind == DocumentKind::Paginated);
    if has_pdf && !PdftotextExtractor::is_available() {
        warn!("pdftotext not found, PDF résumés will be read as empty. Install poppler-utils");
    }
}
