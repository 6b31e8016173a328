use shortlist_core::error::ShortlistError;
use shortlist_core::extract_document;
use tracing::warn;

use crate::commands::{warn_if_pdftotext_missing, DocumentArgs};
use crate::output;

pub fn run(docs_args: &DocumentArgs, output_format: &str) -> Result<(), ShortlistError> {
    let docs = docs_args.load();
    warn_if_pdftotext_missing(&docs);
    let normalizer = docs_args.normalizer();
    let today = docs_args.today();

    let mut records = Vec::with_capacity(docs.len());
    let mut warnings = Vec::new();
    for doc in &docs {
        let (record, warning) = extract_document(doc, &normalizer, today);
        records.push(record);
        warnings.extend(warning);
    }
    if !warnings.is_empty() {
        warn!(count = warnings.len(), "some documents produced no text");
    }

    match output_format {
        "json" => output::json::print(&records)?,
        _ => {
            output::table::print_records(&records);
            output::table::print_warnings(&warnings);
        }
    }
    Ok(())
}
