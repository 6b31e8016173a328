use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ShortlistError {
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("pdftotext did not finish within {seconds}s and was stopped")]
    PdftotextTimeout { seconds: u64 },

    #[error("failed to read DOCX document: {0}")]
    Docx(String),

    #[error("unsupported document: {0}. Supported formats: .pdf, .docx, .doc")]
    UnsupportedDocument(String),

    #[error("cannot read '{path}': {reason}")]
    DocumentRead { path: String, reason: String },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("failed to load criteria from {path}: {reason}")]
    CriteriaLoad { path: PathBuf, reason: String },

    #[error("failed to load interviewer roster from {path}: {reason}")]
    RosterLoad { path: PathBuf, reason: String },

    #[error("no shortlisted candidate named '{0}' in this interview session")]
    UnknownCandidate(String),

    #[error("interviewer '{name}' is not on the roster")]
    UnknownInterviewer { name: String },

    #[error("export failed: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
