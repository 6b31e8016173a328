use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::ShortlistError;

const DEFAULT_ROSTER_JSON: &str = include_str!("../../../../roster/default.json");

#[derive(Debug, Deserialize, Serialize)]
struct RosterFile {
    interviewers: Vec<String>,
}

/// The people who may be assigned to interviews. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    interviewers: Vec<String>,
}

impl Roster {
    /// Build a roster, rejecting blank, duplicate, or missing names.
    pub fn new<I, S>(names: I) -> Result<Self, ShortlistError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let interviewers: Vec<String> = names
            .into_iter()
            .map(|n| n.into().trim().to_string())
            .collect();

        if interviewers.is_empty() {
            return Err(ShortlistError::Configuration(
                "interviewer roster must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for name in &interviewers {
            if name.is_empty() {
                return Err(ShortlistError::Configuration(
                    "interviewer names must not be blank".into(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(ShortlistError::Configuration(format!(
                    "interviewer '{name}' appears more than once in the roster"
                )));
            }
        }

        Ok(Roster { interviewers })
    }

    /// The roster shipped with the tool.
    pub fn builtin() -> Result<Self, ShortlistError> {
        Self::from_json(DEFAULT_ROSTER_JSON, Path::new("roster/default.json"))
    }

    pub fn load(path: &Path) -> Result<Self, ShortlistError> {
        let content = std::fs::read_to_string(path).map_err(|e| ShortlistError::RosterLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content, path)
    }

    pub fn from_json(json: &str, source: &Path) -> Result<Self, ShortlistError> {
        let to_load_error = |reason: String| ShortlistError::RosterLoad {
            path: source.to_path_buf(),
            reason,
        };
        let file: RosterFile = serde_json::from_str(json).map_err(|e| to_load_error(e.to_string()))?;
        Roster::new(file.interviewers).map_err(|e| to_load_error(e.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.interviewers.iter().any(|i| i == name)
    }

    /// First roster member; assigned until someone else is chosen.
    pub fn default_interviewer(&self) -> &str {
        &self.interviewers[0]
    }

    pub fn interviewers(&self) -> &[String] {
        &self.interviewers
    }
}
