use shortlist_core::model::CandidateRecord;
use shortlist_core::report::{ReportRow, ScreeningReport, ScreeningWarning, REPORT_HEADERS};

/// Render rows as a left-aligned, space-padded table.
fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c, w = *w))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    out.push_str(&line(headers.to_vec()));
    out.push('\n');
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

pub fn print_report(report: &ScreeningReport, verbose: bool) {
    let rows: Vec<Vec<String>> = report
        .rows()
        .iter()
        .map(|r: &ReportRow| r.cells().iter().map(|c| c.to_string()).collect())
        .collect();
    print!("{}", render(&REPORT_HEADERS, &rows));

    println!(
        "\n{} of {} candidate(s) shortlisted.",
        report.shortlisted_count(),
        report.candidates.len()
    );

    if verbose {
        println!();
        for candidate in &report.candidates {
            println!(
                "{} ({}): {}",
                candidate.record.name,
                candidate.file_name,
                candidate.outcome.summary()
            );
            for check in &candidate.outcome.checks {
                let mark = if check.passed { "pass" } else { "FAIL" };
                println!("  [{mark}] {}", check.reason);
            }
        }
    }

    print_warnings(&report.warnings);
}

pub fn print_records(records: &[CandidateRecord]) {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.date_of_birth
                    .map_or_else(|| "N/A".to_string(), |d| d.format("%Y-%m-%d").to_string()),
                r.age.map_or_else(|| "N/A".to_string(), |a| a.to_string()),
                r.gender.to_string(),
                grade(r.ol_english_grade),
                grade(r.al_english_grade),
                grade(r.english_literature_grade),
                if r.qualifications.is_empty() {
                    "N/A".to_string()
                } else {
                    r.qualifications.join(", ")
                },
                r.town.clone().unwrap_or_else(|| "N/A".to_string()),
            ]
        })
        .collect();
    print!(
        "{}",
        render(
            &[
                "Name",
                "Date of Birth",
                "Age",
                "Gender",
                "O/L",
                "A/L",
                "Literature",
                "Qualifications",
                "Town",
            ],
            &rows
        )
    );
}

fn grade(g: Option<shortlist_core::model::Grade>) -> String {
    g.map_or_else(|| "N/A".to_string(), |g| g.to_string())
}

pub fn print_warnings(warnings: &[ScreeningWarning]) {
    if warnings.is_empty() {
        return;
    }
    eprintln!();
    for w in warnings {
        eprintln!("  warning: {}: {}", w.document, w.message);
    }
}
