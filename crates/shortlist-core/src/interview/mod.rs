pub mod export;
pub mod roster;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::error::ShortlistError;
use crate::report::{ScreenedCandidate, ScreeningReport};
pub use roster::Roster;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Pending,
    Pass,
    Fail,
    Selected,
    Rejected,
}

impl Outcome {
    pub const ALL: [Outcome; 5] = [
        Outcome::Pending,
        Outcome::Pass,
        Outcome::Fail,
        Outcome::Selected,
        Outcome::Rejected,
    ];
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Pending => "Pending",
            Outcome::Pass => "Pass",
            Outcome::Fail => "Fail",
            Outcome::Selected => "Selected",
            Outcome::Rejected => "Rejected",
        };
        f.write_str(label)
    }
}

impl FromStr for Outcome {
    type Err = ShortlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Outcome::ALL
            .into_iter()
            .find(|o| o.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ShortlistError::Configuration(format!(
                    "unknown interview outcome '{s}' (expected Pending, Pass, Fail, Selected or Rejected)"
                ))
            })
    }
}

/// One row of the interview tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewEntry {
    pub name: String,
    pub date: NaiveDate,
    pub interviewer: String,
    pub outcome: Outcome,
    pub notes: String,
}

/// Changes to one entry. `None` leaves the current value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InterviewUpdate {
    pub date: Option<NaiveDate>,
    pub interviewer: Option<String>,
    pub outcome: Option<Outcome>,
    pub notes: Option<String>,
}

/// A plan line as read from JSON: the candidate name plus an update.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanEntry {
    pub name: String,
    #[serde(flatten)]
    pub update: InterviewUpdate,
}

/// Interview tracking for the shortlisted candidates of one screening run.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    roster: Roster,
    entries: Vec<InterviewEntry>,
}

impl InterviewSession {
    /// One pending entry per shortlisted candidate, in report order.
    ///
    /// Entries are keyed by candidate name. When several shortlisted
    /// documents share a name (`cv.pdf` and `cv.docx`), each of them is
    /// keyed by its file name instead.
    pub fn from_report(report: &ScreeningReport, roster: Roster, date: NaiveDate) -> Self {
        let shortlisted: Vec<&ScreenedCandidate> = report.shortlisted().collect();
        let entries = entry_names(&shortlisted)
            .into_iter()
            .map(|name| InterviewEntry {
                name,
                date,
                interviewer: roster.default_interviewer().to_string(),
                outcome: Outcome::Pending,
                notes: String::new(),
            })
            .collect();
        InterviewSession { roster, entries }
    }

    pub fn entries(&self) -> &[InterviewEntry] {
        &self.entries
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Apply an update to the entry for `name`.
    ///
    /// Nothing changes when the candidate or the interviewer is unknown.
    pub fn record(&mut self, name: &str, update: InterviewUpdate) -> Result<(), ShortlistError> {
        if let Some(interviewer) = &update.interviewer {
            if !self.roster.contains(interviewer) {
                return Err(ShortlistError::UnknownInterviewer {
                    name: interviewer.clone(),
                });
            }
        }
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| ShortlistError::UnknownCandidate(name.to_string()))?;

        if let Some(date) = update.date {
            entry.date = date;
        }
        if let Some(interviewer) = update.interviewer {
            entry.interviewer = interviewer;
        }
        if let Some(outcome) = update.outcome {
            entry.outcome = outcome;
        }
        if let Some(notes) = update.notes {
            entry.notes = notes;
        }
        debug!(candidate = name, outcome = %entry.outcome, "interview entry updated");
        Ok(())
    }

    /// Apply plan lines in order, stopping at the first rejected one.
    pub fn apply_plan(&mut self, plan: Vec<PlanEntry>) -> Result<(), ShortlistError> {
        for line in plan {
            self.record(&line.name, line.update)?;
        }
        Ok(())
    }
}

/// Unique entry names, one per candidate.
fn entry_names(candidates: &[&ScreenedCandidate]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for c in candidates {
        *counts.entry(c.record.name.as_str()).or_default() += 1;
    }

    let mut taken = HashSet::new();
    candidates
        .iter()
        .map(|c| {
            let base = if counts[c.record.name.as_str()] > 1 {
                c.file_name.clone()
            } else {
                c.record.name.clone()
            };
            // Same file name from two folders.
            let mut name = base.clone();
            let mut n = 2;
            while !taken.insert(name.clone()) {
                name = format!("{base} ({n})");
                n += 1;
            }
            if name != c.record.name {
                debug!(candidate = %c.record.name, entry = %name, "entry renamed to stay unique");
            }
            name
        })
        .collect()
}

pub fn parse_plan(json: &str) -> Result<Vec<PlanEntry>, ShortlistError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_plan(path: &Path) -> Result<Vec<PlanEntry>, ShortlistError> {
    let content = std::fs::read_to_string(path)?;
    parse_plan(&content)
}
