use chrono::NaiveDate;
use shortlist_core::error::ShortlistError;
use shortlist_core::interview::export::export_to_path;
use shortlist_core::interview::{load_plan, InterviewSession, Roster};
use shortlist_core::screen_documents;
use std::path::Path;

use crate::commands::{warn_if_pdftotext_missing, CriteriaArgs, DocumentArgs};
use crate::output;

pub struct InterviewOptions<'a> {
    pub roster: Option<&'a Path>,
    pub plan: Option<&'a Path>,
    pub date: Option<NaiveDate>,
    pub out: &'a Path,
}

pub fn run(
    docs_args: &DocumentArgs,
    criteria_args: &CriteriaArgs,
    options: InterviewOptions<'_>,
) -> Result<(), ShortlistError> {
    // Configuration errors surface before any document is read.
    let (_, criteria) = criteria_args.resolve()?;
    let roster = match options.roster {
        Some(path) => Roster::load(path)?,
        None => Roster::builtin()?,
    };
    let plan = options.plan.map(load_plan).transpose()?;

    let docs = docs_args.load();
    warn_if_pdftotext_missing(&docs);
    let today = docs_args.today();
    let report = screen_documents(&docs, &docs_args.normalizer(), &criteria, today);
    output::table::print_warnings(&report.warnings);

    let mut session = InterviewSession::from_report(&report, roster, options.date.unwrap_or(today));
    if let Some(plan) = plan {
        session.apply_plan(plan)?;
    }

    export_to_path(session.entries(), options.out)?;
    eprintln!(
        "{} of {} candidate(s) shortlisted for interview, written to {}",
        session.entries().len(),
        report.candidates.len(),
        options.out.display()
    );
    Ok(())
}
