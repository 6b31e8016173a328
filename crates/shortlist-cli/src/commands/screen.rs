use shortlist_core::error::ShortlistError;
use shortlist_core::report::ScreeningReport;
use shortlist_core::screen_documents;
use std::path::Path;
use tracing::info;

use crate::commands::{warn_if_pdftotext_missing, CriteriaArgs, DocumentArgs};
use crate::output;

pub fn run(
    docs_args: &DocumentArgs,
    criteria_args: &CriteriaArgs,
    output_format: &str,
    output_file: Option<&Path>,
    verbose: bool,
) -> Result<(), ShortlistError> {
    let (criteria_name, criteria) = criteria_args.resolve()?;
    let docs = docs_args.load();
    warn_if_pdftotext_missing(&docs);

    let report = screen_documents(&docs, &docs_args.normalizer(), &criteria, docs_args.today());
    info!(
        criteria = %criteria_name,
        screened = report.candidates.len(),
        shortlisted = report.shortlisted_count(),
        "screening finished"
    );

    match output_format {
        "json" => output::json::print(&report)?,
        "csv" => report.write_csv(std::io::stdout().lock())?,
        _ => {
            println!("Criteria: {criteria_name}\n");
            output::table::print_report(&report, verbose);
        }
    }

    if let Some(path) = output_file {
        write_report(&report, path)?;
        eprintln!(
            "Screened {} document(s), written to {}",
            report.candidates.len(),
            path.display()
        );
    }

    Ok(())
}

/// `.json` files get the full report; anything else gets the CSV table.
fn write_report(report: &ScreeningReport, path: &Path) -> Result<(), ShortlistError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        std::fs::write(path, output::json::to_string(report)?)?;
    } else {
        report.write_csv(std::fs::File::create(path)?)?;
    }
    Ok(())
}
